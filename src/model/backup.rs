use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackupDto {
    pub uuid: String,
    pub is_successful: bool,
    #[serde(default)]
    pub is_locked: bool,
    pub name: String,
    #[serde(default)]
    pub ignored_files: Vec<String>,
    #[serde(default)]
    pub checksum: Option<String>,
    pub bytes: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl BackupDto {
    pub fn is_in_progress(&self) -> bool {
        self.completed_at.is_none()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateBackupDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Newline separated ignore patterns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignored: Option<String>,
    pub is_locked: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RestoreBackupDto {
    pub truncate: bool,
}
