use crate::{
    client::api::{pagination::Paginated, request::ApiRequest},
    model::admin::{DatabaseHostDto, SaveDatabaseHostDto},
};

/// GET /api/application/database-hosts
pub fn get_database_hosts(page: u64, per_page: u64) -> ApiRequest<Paginated<DatabaseHostDto>> {
    ApiRequest::get("/api/application/database-hosts")
        .query("page", page)
        .query("per_page", per_page)
        .paginated()
}

/// POST /api/application/database-hosts
pub fn create_database_host(dto: &SaveDatabaseHostDto) -> ApiRequest<DatabaseHostDto> {
    ApiRequest::post("/api/application/database-hosts")
        .json_body(dto)
        .item()
}

/// PATCH /api/application/database-hosts/{host}
pub fn update_database_host(host: u64, dto: &SaveDatabaseHostDto) -> ApiRequest<DatabaseHostDto> {
    ApiRequest::patch("/api/application/database-hosts/{host}")
        .param("host", host)
        .json_body(dto)
        .item()
}

/// DELETE /api/application/database-hosts/{host}
pub fn delete_database_host(host: u64) -> ApiRequest<()> {
    ApiRequest::delete("/api/application/database-hosts/{host}").param("host", host)
}
