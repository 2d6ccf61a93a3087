use crate::model::{
    api::SignedUrlDto,
    backup::{BackupDto, CreateBackupDto, RestoreBackupDto},
};

use super::{pagination::Paginated, request::ApiRequest};

/// GET /api/client/servers/{server}/backups
pub fn get_backups(server: &str, page: u64) -> ApiRequest<Paginated<BackupDto>> {
    ApiRequest::get("/api/client/servers/{server}/backups")
        .param("server", server)
        .query("page", page)
        .paginated()
}

/// POST /api/client/servers/{server}/backups
pub fn create_backup(server: &str, dto: &CreateBackupDto) -> ApiRequest<BackupDto> {
    ApiRequest::post("/api/client/servers/{server}/backups")
        .param("server", server)
        .json_body(dto)
        .item()
}

/// DELETE /api/client/servers/{server}/backups/{backup}
pub fn delete_backup(server: &str, backup: &str) -> ApiRequest<()> {
    ApiRequest::delete("/api/client/servers/{server}/backups/{backup}")
        .param("server", server)
        .param("backup", backup)
}

/// GET /api/client/servers/{server}/backups/{backup}/download
pub fn get_backup_download_url(server: &str, backup: &str) -> ApiRequest<SignedUrlDto> {
    ApiRequest::get("/api/client/servers/{server}/backups/{backup}/download")
        .param("server", server)
        .param("backup", backup)
        .item()
}

/// POST /api/client/servers/{server}/backups/{backup}/restore
/// `truncate` deletes every file on the server before restoring
pub fn restore_backup(server: &str, backup: &str, truncate: bool) -> ApiRequest<()> {
    ApiRequest::post("/api/client/servers/{server}/backups/{backup}/restore")
        .param("server", server)
        .param("backup", backup)
        .json_body(&RestoreBackupDto { truncate })
}

/// POST /api/client/servers/{server}/backups/{backup}/lock
/// Resolves to the backup with its new lock state
pub fn toggle_backup_lock(server: &str, backup: &str) -> ApiRequest<BackupDto> {
    ApiRequest::post("/api/client/servers/{server}/backups/{backup}/lock")
        .param("server", server)
        .param("backup", backup)
        .item()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::api::request::Body;
    use serde_json::json;

    /// Tests the create payload.
    ///
    /// Verifies unset optional fields are left out and keys are snake_cased.
    ///
    /// Expected: only `is_locked`
    #[test]
    fn create_payload_omits_empty_fields() {
        let request = create_backup("abc123", &CreateBackupDto { name: None, ignored: None, is_locked: true });

        assert_eq!(request.body(), Ok(&Body::Json(json!({ "is_locked": true }))));
    }

    /// Tests paginated backup decoding.
    ///
    /// Verifies an in-progress backup has no completion time.
    ///
    /// Expected: Ok with one running backup and page metadata
    #[test]
    fn decodes_backup_page() {
        let body = json!({
            "object": "list",
            "data": [{
                "object": "backup",
                "attributes": {
                    "uuid": "b1",
                    "is_successful": false,
                    "is_locked": false,
                    "name": "nightly",
                    "ignored_files": ["*.log"],
                    "checksum": null,
                    "bytes": 0,
                    "created_at": "2024-05-01T02:00:00+00:00",
                    "completed_at": null
                }
            }],
            "meta": { "pagination": { "total": 1, "count": 1, "per_page": 20, "current_page": 1, "total_pages": 1 } }
        })
        .to_string();

        let page = get_backups("abc123", 1).decode(200, &body).unwrap();

        assert_eq!(page.items[0].ignored_files, vec!["*.log"]);
        assert!(page.items[0].is_in_progress());
        assert_eq!(page.pagination.total, 1);
    }

    /// Tests that identifiers land in the right placeholders.
    ///
    /// Expected: server then backup
    #[test]
    fn restore_path() {
        let request = restore_backup("abc123", "b1", false);
        assert_eq!(request.path(), "/api/client/servers/abc123/backups/b1/restore");
        assert_eq!(request.body(), Ok(&Body::Json(json!({ "truncate": false }))));
    }
}
