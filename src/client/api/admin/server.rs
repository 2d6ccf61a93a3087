use crate::{
    client::api::{pagination::Paginated, request::ApiRequest},
    model::admin::AdminServerDto,
};

/// GET /api/application/servers
pub fn get_admin_servers(page: u64, per_page: u64) -> ApiRequest<Paginated<AdminServerDto>> {
    ApiRequest::get("/api/application/servers")
        .query("page", page)
        .query("per_page", per_page)
        .paginated()
}

/// POST /api/application/servers/{server}/suspend
pub fn suspend_server(server: u64) -> ApiRequest<()> {
    ApiRequest::post("/api/application/servers/{server}/suspend").param("server", server)
}

/// POST /api/application/servers/{server}/unsuspend
pub fn unsuspend_server(server: u64) -> ApiRequest<()> {
    ApiRequest::post("/api/application/servers/{server}/unsuspend").param("server", server)
}

/// DELETE /api/application/servers/{server}[/force]
pub fn delete_admin_server(server: u64, force: bool) -> ApiRequest<()> {
    let template = if force {
        "/api/application/servers/{server}/force"
    } else {
        "/api/application/servers/{server}"
    };
    ApiRequest::delete(template).param("server", server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::api::request::Method;
    use serde_json::json;

    /// Tests forced and regular deletion routes.
    ///
    /// Expected: `force` appends its own segment
    #[test]
    fn delete_routes_on_force() {
        assert_eq!(delete_admin_server(7, false).path(), "/api/application/servers/7");
        assert_eq!(delete_admin_server(7, true).path(), "/api/application/servers/7/force");
        assert_eq!(delete_admin_server(7, true).method(), Method::Delete);
        assert_eq!(suspend_server(7).method(), Method::Post);
    }

    /// Tests the admin server listing.
    ///
    /// Expected: paging in the query, suspension flag decoded
    #[test]
    fn decodes_admin_servers() {
        let request = get_admin_servers(1, 50);
        let body = json!({
            "object": "list",
            "data": [{
                "object": "server",
                "attributes": {
                    "id": 7, "external_id": null, "uuid": "uuid-7", "identifier": "abc123",
                    "name": "Survival", "description": "", "suspended": true,
                    "limits": { "memory": 2048, "swap": 0, "disk": 10240, "io": 500, "cpu": 200, "threads": null, "oom_disabled": true },
                    "feature_limits": { "databases": 1, "allocations": 2, "backups": 3 },
                    "user": 1, "node": 1, "allocation": 4, "nest": 1, "egg": 5,
                    "created_at": "2024-01-01T00:00:00+00:00", "updated_at": null
                }
            }],
            "meta": { "pagination": {
                "total": 1, "count": 1, "per_page": 50, "current_page": 1, "total_pages": 1
            }}
        })
        .to_string();

        let page = request.decode(200, &body).unwrap();

        assert_eq!(request.url(""), "/api/application/servers?page=1&per_page=50");
        assert!(page.items[0].suspended);
        assert_eq!(page.items[0].identifier, "abc123");
        assert_eq!(unsuspend_server(7).path(), "/api/application/servers/7/unsuspend");
    }
}
