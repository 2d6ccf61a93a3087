use crate::model::database::{CreateDatabaseDto, DatabaseDto};

use super::request::ApiRequest;

/// GET /api/client/servers/{server}/databases
pub fn get_databases(server: &str, include_password: bool) -> ApiRequest<Vec<DatabaseDto>> {
    let request = ApiRequest::get("/api/client/servers/{server}/databases").param("server", server);
    let request = if include_password {
        request.query("include", "password")
    } else {
        request
    };
    request.list()
}

/// POST /api/client/servers/{server}/databases
pub fn create_database(server: &str, dto: &CreateDatabaseDto) -> ApiRequest<DatabaseDto> {
    ApiRequest::post("/api/client/servers/{server}/databases")
        .param("server", server)
        .query("include", "password")
        .json_body(dto)
        .item()
}

/// POST /api/client/servers/{server}/databases/{database}/rotate-password
pub fn rotate_database_password(server: &str, database: &str) -> ApiRequest<DatabaseDto> {
    ApiRequest::post("/api/client/servers/{server}/databases/{database}/rotate-password")
        .param("server", server)
        .param("database", database)
        .item()
}

/// DELETE /api/client/servers/{server}/databases/{database}
pub fn delete_database(server: &str, database: &str) -> ApiRequest<()> {
    ApiRequest::delete("/api/client/servers/{server}/databases/{database}")
        .param("server", server)
        .param("database", database)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::api::request::{Body, Method};
    use serde_json::json;

    /// Tests reading the password relationship.
    ///
    /// Expected: Ok with the nested password exposed
    #[test]
    fn decodes_database_password() {
        let body = r#"{
            "object": "server_database",
            "attributes": {
                "id": "dbid",
                "host": { "address": "127.0.0.1", "port": 3306 },
                "name": "s1_main",
                "username": "u1_abc",
                "connections_from": "%",
                "max_connections": 0,
                "relationships": {
                    "password": { "object": "database_password", "attributes": { "password": "hunter2" } }
                }
            }
        }"#;

        let database = rotate_database_password("abc123", "dbid").decode(200, body).unwrap();

        assert_eq!(database.connections_from, "%");
        assert_eq!(database.password(), Some("hunter2"));
    }

    /// Tests the optional password include.
    ///
    /// Expected: include parameter only when requested
    #[test]
    fn includes_password_on_request() {
        assert_eq!(get_databases("abc123", false).url(""), "/api/client/servers/abc123/databases");
        assert_eq!(
            get_databases("abc123", true).url(""),
            "/api/client/servers/abc123/databases?include=password"
        );
    }

    /// Tests database creation and deletion requests.
    ///
    /// Expected: creation asks for the password back, deletion targets the database id
    #[test]
    fn create_and_delete_requests() {
        let create = create_database(
            "abc123",
            &CreateDatabaseDto {
                database: "main".to_string(),
                remote: "%".to_string(),
            },
        );
        assert_eq!(create.url(""), "/api/client/servers/abc123/databases?include=password");
        assert_eq!(create.body(), Ok(&Body::Json(json!({ "database": "main", "remote": "%" }))));

        let delete = delete_database("abc123", "dbid");
        assert_eq!(delete.method(), Method::Delete);
        assert_eq!(delete.path(), "/api/client/servers/abc123/databases/dbid");
    }
}

