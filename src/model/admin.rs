//! Application API resources, only reachable by root administrators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::server::{FeatureLimitsDto, ServerLimitsDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeDto {
    pub id: u64,
    pub uuid: String,
    pub public: bool,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub location_id: u64,
    pub fqdn: String,
    pub scheme: String,
    #[serde(default)]
    pub behind_proxy: bool,
    #[serde(default)]
    pub maintenance_mode: bool,
    pub memory: u64,
    #[serde(default)]
    pub memory_overallocate: i64,
    pub disk: u64,
    #[serde(default)]
    pub disk_overallocate: i64,
    #[serde(default)]
    pub upload_size: u64,
    pub daemon_listen: u16,
    pub daemon_sftp: u16,
    #[serde(default)]
    pub daemon_base: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveNodeDto {
    pub name: String,
    pub description: Option<String>,
    pub location_id: u64,
    pub public: bool,
    pub fqdn: String,
    pub scheme: String,
    pub behind_proxy: bool,
    pub memory: u64,
    pub memory_overallocate: i64,
    pub disk: u64,
    pub disk_overallocate: i64,
    pub upload_size: u64,
    pub daemon_listen: u16,
    pub daemon_sftp: u16,
    pub daemon_base: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    pub id: u64,
    pub short: String,
    #[serde(default)]
    pub long: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SaveLocationDto {
    pub short: String,
    pub long: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserDto {
    pub id: u64,
    #[serde(default)]
    pub external_id: Option<String>,
    pub uuid: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub language: String,
    pub root_admin: bool,
    #[serde(rename = "2fa", default)]
    pub two_factor: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveUserDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub root_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminServerDto {
    pub id: u64,
    #[serde(default)]
    pub external_id: Option<String>,
    pub uuid: String,
    pub identifier: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub suspended: bool,
    pub limits: ServerLimitsDto,
    pub feature_limits: FeatureLimitsDto,
    pub user: u64,
    pub node: u64,
    pub allocation: u64,
    pub nest: u64,
    pub egg: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseHostDto {
    pub id: u64,
    pub name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    #[serde(default)]
    pub node: Option<u64>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveDatabaseHostDto {
    pub name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<u64>,
}
