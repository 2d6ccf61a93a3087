use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub id: u64,
    pub admin: bool,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UpdateEmailDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordDto {
    pub current_password: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyDto {
    pub identifier: String,
    pub description: String,
    #[serde(default)]
    pub allowed_ips: Vec<String>,
    #[serde(default)]
    pub last_used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiKeyDto {
    pub description: String,
    pub allowed_ips: Vec<String>,
}

/// The secret of a new key is only returned once, in `meta`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CreatedApiKeyDto {
    pub attributes: ApiKeyDto,
    pub meta: CreatedApiKeyMetaDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedApiKeyMetaDto {
    pub secret_token: String,
}
