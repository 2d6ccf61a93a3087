use serde::{Deserialize, Serialize};

use crate::model::{api::FractalList, network::AllocationDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerDto {
    pub server_owner: bool,
    pub identifier: String,
    #[serde(default)]
    pub internal_id: Option<u64>,
    pub uuid: String,
    pub name: String,
    pub node: String,
    #[serde(default)]
    pub is_node_under_maintenance: bool,
    pub sftp_details: SftpDetailsDto,
    #[serde(default)]
    pub description: String,
    pub limits: ServerLimitsDto,
    #[serde(default)]
    pub invocation: String,
    #[serde(default)]
    pub docker_image: String,
    #[serde(default)]
    pub egg_features: Option<Vec<String>>,
    pub feature_limits: FeatureLimitsDto,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_suspended: bool,
    #[serde(default)]
    pub is_installing: bool,
    #[serde(default)]
    pub is_transferring: bool,
    #[serde(default)]
    pub relationships: Option<ServerRelationshipsDto>,
}

impl ServerDto {
    /// The allocation marked as default, if the relationship was included.
    pub fn default_allocation(&self) -> Option<&AllocationDto> {
        self.relationships
            .as_ref()?
            .allocations
            .as_ref()?
            .items()
            .find(|allocation| allocation.is_default)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerRelationshipsDto {
    #[serde(default)]
    pub allocations: Option<FractalList<AllocationDto>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SftpDetailsDto {
    pub ip: String,
    pub port: u16,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServerLimitsDto {
    pub memory: u64,
    pub swap: i64,
    pub disk: u64,
    pub io: u64,
    pub cpu: u64,
    #[serde(default)]
    pub threads: Option<String>,
    #[serde(default)]
    pub oom_disabled: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct FeatureLimitsDto {
    pub databases: u64,
    pub allocations: u64,
    pub backups: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatsDto {
    pub current_state: String,
    #[serde(default)]
    pub is_suspended: bool,
    pub resources: ResourceUsageDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUsageDto {
    pub memory_bytes: u64,
    pub cpu_absolute: f64,
    pub disk_bytes: u64,
    pub network_rx_bytes: u64,
    pub network_tx_bytes: u64,
    #[serde(default)]
    pub uptime: u64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PowerSignal {
    Start,
    Stop,
    Restart,
    Kill,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PowerSignalDto {
    pub signal: PowerSignal,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SendCommandDto {
    pub command: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenameServerDto {
    pub name: String,
    pub description: Option<String>,
}

/// Which servers the dashboard lists.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ServerListType {
    #[default]
    Owner,
    Admin,
    AdminAll,
}

impl ServerListType {
    pub fn as_query(&self) -> &'static str {
        match self {
            ServerListType::Owner => "owner",
            ServerListType::Admin => "admin",
            ServerListType::AdminAll => "admin-all",
        }
    }
}

/// `GET /api/client/servers/{server}` with its `meta` block.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerDetailsDto {
    pub attributes: ServerDto,
    pub meta: ServerMetaDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServerMetaDto {
    #[serde(default)]
    pub is_server_owner: bool,
    #[serde(default)]
    pub user_permissions: Vec<String>,
}
