use crate::model::{
    api::SignedUrlDto,
    file::{
        CopyFileDto, CreateFolderDto, DecompressFileDto, FileListDto, FileObjectDto,
        RenameFilesDto, RenamePairDto,
    },
};

use super::request::ApiRequest;

/// GET /api/client/servers/{server}/files/list
pub fn list_directory(server: &str, directory: &str) -> ApiRequest<Vec<FileObjectDto>> {
    ApiRequest::get("/api/client/servers/{server}/files/list")
        .param("server", server)
        .query("directory", directory)
        .list()
}

/// GET /api/client/servers/{server}/files/contents
/// Raw file contents, not JSON
pub fn get_file_contents(server: &str, file: &str) -> ApiRequest<String> {
    ApiRequest::get("/api/client/servers/{server}/files/contents")
        .param("server", server)
        .query("file", file)
        .text()
}

/// POST /api/client/servers/{server}/files/write
pub fn save_file_contents(server: &str, file: &str, content: &str) -> ApiRequest<()> {
    ApiRequest::post("/api/client/servers/{server}/files/write")
        .param("server", server)
        .query("file", file)
        .text_body(content)
}

/// PUT /api/client/servers/{server}/files/rename
/// Renames and moves are the same operation
pub fn rename_files(server: &str, root: &str, files: Vec<RenamePairDto>) -> ApiRequest<()> {
    ApiRequest::put("/api/client/servers/{server}/files/rename")
        .param("server", server)
        .json_body(&RenameFilesDto {
            root: root.to_string(),
            files,
        })
}

/// POST /api/client/servers/{server}/files/copy
pub fn copy_file(server: &str, location: &str) -> ApiRequest<()> {
    ApiRequest::post("/api/client/servers/{server}/files/copy")
        .param("server", server)
        .json_body(&CopyFileDto {
            location: location.to_string(),
        })
}

/// POST /api/client/servers/{server}/files/delete
pub fn delete_files(server: &str, root: &str, files: Vec<String>) -> ApiRequest<()> {
    ApiRequest::post("/api/client/servers/{server}/files/delete")
        .param("server", server)
        .json_body(&FileListDto {
            root: root.to_string(),
            files,
        })
}

/// POST /api/client/servers/{server}/files/create-folder
pub fn create_directory(server: &str, root: &str, name: &str) -> ApiRequest<()> {
    ApiRequest::post("/api/client/servers/{server}/files/create-folder")
        .param("server", server)
        .json_body(&CreateFolderDto {
            root: root.to_string(),
            name: name.to_string(),
        })
}

/// POST /api/client/servers/{server}/files/compress
/// Resolves to the archive that was created
pub fn compress_files(server: &str, root: &str, files: Vec<String>) -> ApiRequest<FileObjectDto> {
    ApiRequest::post("/api/client/servers/{server}/files/compress")
        .param("server", server)
        .json_body(&FileListDto {
            root: root.to_string(),
            files,
        })
        .item()
}

/// POST /api/client/servers/{server}/files/decompress
pub fn decompress_file(server: &str, root: &str, file: &str) -> ApiRequest<()> {
    ApiRequest::post("/api/client/servers/{server}/files/decompress")
        .param("server", server)
        .json_body(&DecompressFileDto {
            root: root.to_string(),
            file: file.to_string(),
        })
}

/// GET /api/client/servers/{server}/files/download
pub fn get_file_download_url(server: &str, file: &str) -> ApiRequest<SignedUrlDto> {
    ApiRequest::get("/api/client/servers/{server}/files/download")
        .param("server", server)
        .query("file", file)
        .item()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::api::request::{Body, Method};
    use serde_json::json;

    /// Tests directory listing decoding.
    ///
    /// Verifies list items are unwrapped and file keys camelized.
    ///
    /// Expected: Ok with one directory entry
    #[test]
    fn decodes_directory_listing() {
        let request = list_directory("abc123", "/plugins");
        let body = r#"{
            "object": "list",
            "data": [{
                "object": "file_object",
                "attributes": {
                    "name": "Essentials",
                    "mode": "drwxr-xr-x",
                    "mode_bits": "755",
                    "size": 4096,
                    "is_file": false,
                    "is_symlink": false,
                    "mimetype": "inode/directory",
                    "created_at": "2024-01-01T00:00:00+00:00",
                    "modified_at": "2024-01-02T00:00:00+00:00"
                }
            }]
        }"#;

        let files = request.decode(200, body).unwrap();

        assert_eq!(request.url(""), "/api/client/servers/abc123/files/list?directory=%2Fplugins");
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].mode_bits, "755");
        assert!(!files[0].is_file);
    }

    /// Tests that file writes send the raw content.
    ///
    /// Expected: text body, file as query parameter
    #[test]
    fn save_sends_raw_text() {
        let request = save_file_contents("abc123", "/server.properties", "motd=hello\n");

        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.url(""), "/api/client/servers/abc123/files/write?file=%2Fserver.properties");
        assert_eq!(request.body(), Ok(&Body::Text("motd=hello\n".to_string())));
    }

    /// Tests the rename payload.
    ///
    /// Verifies moves are expressed as renames relative to the root.
    ///
    /// Expected: PUT with `root` and `from`/`to` pairs
    #[test]
    fn rename_payload() {
        let request = rename_files(
            "abc123",
            "/",
            vec![RenamePairDto {
                from: "world".to_string(),
                to: "backup/world".to_string(),
            }],
        );

        assert_eq!(request.method(), Method::Put);
        assert_eq!(request.path(), "/api/client/servers/abc123/files/rename");
        assert_eq!(
            request.body(),
            Ok(&Body::Json(json!({ "root": "/", "files": [{ "from": "world", "to": "backup/world" }] })))
        );
    }

    /// Tests the copy payload.
    ///
    /// Expected: the full path of the source file as `location`
    #[test]
    fn copy_payload() {
        let request = copy_file("abc123", "/plugins/config.yml");

        assert_eq!(request.path(), "/api/client/servers/abc123/files/copy");
        assert_eq!(request.body(), Ok(&Body::Json(json!({ "location": "/plugins/config.yml" }))));
    }

    /// Tests that compressing resolves to the new archive.
    ///
    /// Expected: Ok with the archive's file object
    #[test]
    fn compress_decodes_archive() {
        let request = compress_files("abc123", "/", vec!["world".to_string()]);
        let body = r#"{
            "object": "file_object",
            "attributes": {
                "name": "archive-2024-01-01.tar.gz",
                "mode": "-rw-r--r--",
                "mode_bits": "644",
                "size": 1024,
                "is_file": true,
                "is_symlink": false,
                "mimetype": "application/tar+gzip",
                "created_at": "2024-01-01T00:00:00+00:00",
                "modified_at": "2024-01-01T00:00:00+00:00"
            }
        }"#;

        let archive = request.decode(200, body).unwrap();

        assert_eq!(request.body(), Ok(&Body::Json(json!({ "root": "/", "files": ["world"] }))));
        assert!(archive.is_archive());
    }
}
