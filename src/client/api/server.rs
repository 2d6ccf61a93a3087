use crate::model::server::{
    PowerSignal, PowerSignalDto, RenameServerDto, SendCommandDto, ServerDetailsDto, ServerDto,
    ServerListType, ServerStatsDto,
};

use super::{pagination::Paginated, request::ApiRequest};

/// GET /api/client
/// Paginated servers visible to the current user
pub fn get_servers(
    page: u64,
    query: Option<&str>,
    list_type: ServerListType,
) -> ApiRequest<Paginated<ServerDto>> {
    ApiRequest::get("/api/client")
        .query("page", page)
        .query_opt("filter[*]", query.filter(|q| !q.trim().is_empty()))
        .query("type", list_type.as_query())
        .paginated()
}

/// GET /api/client/servers/{server}
pub fn get_server(server: &str) -> ApiRequest<ServerDto> {
    ApiRequest::get("/api/client/servers/{server}")
        .param("server", server)
        .item()
}

/// GET /api/client/servers/{server}
/// Keeps the `meta` block carrying the caller's permissions on the server
pub fn get_server_details(server: &str) -> ApiRequest<ServerDetailsDto> {
    ApiRequest::get("/api/client/servers/{server}")
        .param("server", server)
        .json()
}

/// GET /api/client/servers/{server}/resources
pub fn get_server_resources(server: &str) -> ApiRequest<ServerStatsDto> {
    ApiRequest::get("/api/client/servers/{server}/resources")
        .param("server", server)
        .item()
}

/// POST /api/client/servers/{server}/power
pub fn send_power_signal(server: &str, signal: PowerSignal) -> ApiRequest<()> {
    ApiRequest::post("/api/client/servers/{server}/power")
        .param("server", server)
        .json_body(&PowerSignalDto { signal })
}

/// POST /api/client/servers/{server}/command
pub fn send_command(server: &str, command: &str) -> ApiRequest<()> {
    ApiRequest::post("/api/client/servers/{server}/command")
        .param("server", server)
        .json_body(&SendCommandDto {
            command: command.to_string(),
        })
}

/// POST /api/client/servers/{server}/settings/rename
pub fn rename_server(server: &str, dto: &RenameServerDto) -> ApiRequest<()> {
    ApiRequest::post("/api/client/servers/{server}/settings/rename")
        .param("server", server)
        .json_body(dto)
}

/// POST /api/client/servers/{server}/settings/reinstall
pub fn reinstall_server(server: &str) -> ApiRequest<()> {
    ApiRequest::post("/api/client/servers/{server}/settings/reinstall").param("server", server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::api::request::{Body, Method};
    use serde_json::json;

    /// Tests the dashboard listing URL.
    ///
    /// Verifies blank filters are dropped and the list type is sent.
    ///
    /// Expected: page and type only
    #[test]
    fn server_list_url() {
        let request = get_servers(2, Some("  "), ServerListType::AdminAll);
        assert_eq!(request.url(""), "/api/client?page=2&type=admin-all");

        let request = get_servers(1, Some("lobby"), ServerListType::Owner);
        assert_eq!(request.url(""), "/api/client?page=1&filter%5B*%5D=lobby&type=owner");
    }

    /// Tests the power signal payload.
    ///
    /// Expected: lowercase signal name
    #[test]
    fn power_signal_payload() {
        let request = send_power_signal("abc123", PowerSignal::Restart);

        assert_eq!(request.path(), "/api/client/servers/abc123/power");
        assert_eq!(request.body(), Ok(&Body::Json(json!({ "signal": "restart" }))));
    }

    /// Tests decoding a server with its allocation relationship.
    ///
    /// Verifies nested relationships are camelized and the default allocation
    /// is found.
    ///
    /// Expected: Ok with the default allocation address
    #[test]
    fn decodes_server_with_allocations() {
        let body = json!({
            "object": "server",
            "attributes": {
                "server_owner": true,
                "identifier": "abc123",
                "internal_id": 4,
                "uuid": "abc123-uuid",
                "name": "Survival",
                "node": "Node 1",
                "is_node_under_maintenance": false,
                "sftp_details": { "ip": "10.0.0.2", "port": 2022 },
                "description": "",
                "limits": { "memory": 2048, "swap": 0, "disk": 10240, "io": 500, "cpu": 200, "threads": null, "oom_disabled": true },
                "invocation": "java -jar server.jar",
                "docker_image": "ghcr.io/yolks:java_17",
                "egg_features": ["eula"],
                "feature_limits": { "databases": 1, "allocations": 2, "backups": 3 },
                "status": null,
                "is_suspended": false,
                "is_installing": false,
                "is_transferring": false,
                "relationships": {
                    "allocations": {
                        "object": "list",
                        "data": [
                            { "object": "allocation", "attributes": { "id": 1, "ip": "10.0.0.2", "ip_alias": null, "port": 25566, "notes": null, "is_default": false } },
                            { "object": "allocation", "attributes": { "id": 2, "ip": "10.0.0.2", "ip_alias": "play.example.com", "port": 25565, "notes": "main", "is_default": true } }
                        ]
                    }
                }
            }
        })
        .to_string();

        let server = get_server("abc123").decode(200, &body).unwrap();

        assert_eq!(server.name, "Survival");
        assert!(server.limits.oom_disabled);
        assert_eq!(server.feature_limits.backups, 3);
        assert_eq!(
            server.default_allocation().map(|a| a.address()),
            Some("play.example.com:25565".to_string())
        );
    }

    /// Tests decoding of live resource usage.
    ///
    /// Expected: Ok with state and camelized usage counters
    #[test]
    fn decodes_resources() {
        let body = json!({
            "object": "stats",
            "attributes": {
                "current_state": "running",
                "is_suspended": false,
                "resources": {
                    "memory_bytes": 1048576,
                    "cpu_absolute": 12.5,
                    "disk_bytes": 2048,
                    "network_rx_bytes": 10,
                    "network_tx_bytes": 20,
                    "uptime": 3600
                }
            }
        })
        .to_string();

        let request = get_server_resources("abc123");
        let stats = request.decode(200, &body).unwrap();

        assert_eq!(request.path(), "/api/client/servers/abc123/resources");
        assert_eq!(stats.current_state, "running");
        assert_eq!(stats.resources.memory_bytes, 1048576);
        assert_eq!(stats.resources.uptime, 3600);
    }

    /// Tests the console command and settings payloads.
    ///
    /// Expected: POST bodies matching the panel's field names
    #[test]
    fn settings_payloads() {
        let command = send_command("abc123", "say hello");
        assert_eq!(command.path(), "/api/client/servers/abc123/command");
        assert_eq!(command.body(), Ok(&Body::Json(json!({ "command": "say hello" }))));

        let rename = rename_server(
            "abc123",
            &RenameServerDto {
                name: "Creative".to_string(),
                description: None,
            },
        );
        assert_eq!(rename.path(), "/api/client/servers/abc123/settings/rename");
        assert_eq!(
            rename.body(),
            Ok(&Body::Json(json!({ "name": "Creative", "description": null })))
        );

        let reinstall = reinstall_server("abc123");
        assert_eq!(reinstall.method(), Method::Post);
        assert_eq!(reinstall.path(), "/api/client/servers/abc123/settings/reinstall");
        assert_eq!(reinstall.body(), Ok(&Body::Empty));
    }
}

