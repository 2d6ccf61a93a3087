use serde::{Deserialize, Serialize};

use crate::model::api::FractalItem;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseHostAddressDto {
    pub address: String,
    pub port: u16,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseDto {
    pub id: String,
    pub host: DatabaseHostAddressDto,
    pub name: String,
    pub username: String,
    pub connections_from: String,
    #[serde(default)]
    pub max_connections: u64,
    #[serde(default)]
    pub relationships: Option<DatabaseRelationshipsDto>,
}

impl DatabaseDto {
    pub fn password(&self) -> Option<&str> {
        self.relationships
            .as_ref()?
            .password
            .as_ref()
            .map(|p| p.attributes.password.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseRelationshipsDto {
    #[serde(default)]
    pub password: Option<FractalItem<DatabasePasswordDto>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabasePasswordDto {
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CreateDatabaseDto {
    pub database: String,
    pub remote: String,
}
