use crate::model::network::{AllocationDto, AllocationNotesDto};

use super::request::ApiRequest;

/// GET /api/client/servers/{server}/network/allocations
pub fn get_allocations(server: &str) -> ApiRequest<Vec<AllocationDto>> {
    ApiRequest::get("/api/client/servers/{server}/network/allocations")
        .param("server", server)
        .list()
}

/// POST /api/client/servers/{server}/network/allocations
/// Assigns a free allocation from the server's node
pub fn create_allocation(server: &str) -> ApiRequest<AllocationDto> {
    ApiRequest::post("/api/client/servers/{server}/network/allocations")
        .param("server", server)
        .item()
}

/// POST /api/client/servers/{server}/network/allocations/{allocation}/primary
pub fn set_primary_allocation(server: &str, allocation: u64) -> ApiRequest<AllocationDto> {
    ApiRequest::post("/api/client/servers/{server}/network/allocations/{allocation}/primary")
        .param("server", server)
        .param("allocation", allocation)
        .item()
}

/// POST /api/client/servers/{server}/network/allocations/{allocation}
pub fn set_allocation_notes(
    server: &str,
    allocation: u64,
    notes: Option<String>,
) -> ApiRequest<AllocationDto> {
    ApiRequest::post("/api/client/servers/{server}/network/allocations/{allocation}")
        .param("server", server)
        .param("allocation", allocation)
        .json_body(&AllocationNotesDto { notes })
        .item()
}

/// DELETE /api/client/servers/{server}/network/allocations/{allocation}
pub fn delete_allocation(server: &str, allocation: u64) -> ApiRequest<()> {
    ApiRequest::delete("/api/client/servers/{server}/network/allocations/{allocation}")
        .param("server", server)
        .param("allocation", allocation)
}
