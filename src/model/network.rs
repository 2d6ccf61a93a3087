use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationDto {
    pub id: u64,
    pub ip: String,
    #[serde(default)]
    pub ip_alias: Option<String>,
    pub port: u16,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

impl AllocationDto {
    /// `alias:port` when an alias is set, `ip:port` otherwise.
    pub fn address(&self) -> String {
        let host = self.ip_alias.as_deref().unwrap_or(&self.ip);
        format!("{}:{}", crate::client::util::format::format_ip(host), self.port)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AllocationNotesDto {
    pub notes: Option<String>,
}
