use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const ARCHIVE_MIMETYPES: [&str; 8] = [
    "application/vnd.rar",
    "application/x-rar-compressed",
    "application/x-tar",
    "application/x-br",
    "application/x-bzip2",
    "application/gzip",
    "application/x-gzip",
    "application/zip",
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileObjectDto {
    pub name: String,
    pub mode: String,
    #[serde(default)]
    pub mode_bits: String,
    pub size: u64,
    pub is_file: bool,
    #[serde(default)]
    pub is_symlink: bool,
    #[serde(default)]
    pub mimetype: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl FileObjectDto {
    pub fn is_archive(&self) -> bool {
        self.is_file
            && (ARCHIVE_MIMETYPES.contains(&self.mimetype.as_str())
                || self.name.ends_with(".tar.gz")
                || self.name.ends_with(".zip"))
    }

    pub fn is_editable(&self) -> bool {
        if !self.is_file || self.is_archive() {
            return false;
        }
        self.mimetype.starts_with("text/")
            || self.mimetype.starts_with("inode/")
            || matches!(self.mimetype.as_str(), "application/json" | "application/xml" | "application/x-yaml")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenamePairDto {
    pub from: String,
    pub to: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenameFilesDto {
    pub root: String,
    pub files: Vec<RenamePairDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FileListDto {
    pub root: String,
    pub files: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CopyFileDto {
    pub location: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CreateFolderDto {
    pub root: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DecompressFileDto {
    pub root: String,
    pub file: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn file(name: &str, mimetype: &str, is_file: bool) -> FileObjectDto {
        let time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        FileObjectDto {
            name: name.to_string(),
            mode: "-rw-r--r--".to_string(),
            mode_bits: "644".to_string(),
            size: 10,
            is_file,
            is_symlink: false,
            mimetype: mimetype.to_string(),
            created_at: time,
            modified_at: time,
        }
    }

    /// Tests archive detection by mimetype and extension.
    ///
    /// Expected: archives detected, directories never archives
    #[test]
    fn detects_archives() {
        assert!(file("world.tar.gz", "application/gzip", true).is_archive());
        assert!(file("backup.zip", "application/octet-stream", true).is_archive());
        assert!(!file("plugins", "inode/directory", false).is_archive());
    }

    /// Tests which files open in the editor.
    ///
    /// Expected: text-like files editable, archives and binaries not
    #[test]
    fn detects_editable_files() {
        assert!(file("server.properties", "text/plain", true).is_editable());
        assert!(file("ops.json", "application/json", true).is_editable());
        assert!(!file("server.jar", "application/java-archive", true).is_editable());
        assert!(!file("world.zip", "application/zip", true).is_editable());
    }
}
