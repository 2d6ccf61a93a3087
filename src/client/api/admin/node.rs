use crate::{
    client::api::{pagination::Paginated, request::ApiRequest},
    model::admin::{NodeDto, SaveNodeDto},
};

/// GET /api/application/nodes
pub fn get_nodes(page: u64, per_page: u64) -> ApiRequest<Paginated<NodeDto>> {
    ApiRequest::get("/api/application/nodes")
        .query("page", page)
        .query("per_page", per_page)
        .paginated()
}

/// GET /api/application/nodes/{node}
pub fn get_node(node: u64) -> ApiRequest<NodeDto> {
    ApiRequest::get("/api/application/nodes/{node}")
        .param("node", node)
        .item()
}

/// POST /api/application/nodes
pub fn create_node(dto: &SaveNodeDto) -> ApiRequest<NodeDto> {
    ApiRequest::post("/api/application/nodes").json_body(dto).item()
}

/// PATCH /api/application/nodes/{node}
pub fn update_node(node: u64, dto: &SaveNodeDto) -> ApiRequest<NodeDto> {
    ApiRequest::patch("/api/application/nodes/{node}")
        .param("node", node)
        .json_body(dto)
        .item()
}

/// DELETE /api/application/nodes/{node}
pub fn delete_node(node: u64) -> ApiRequest<()> {
    ApiRequest::delete("/api/application/nodes/{node}").param("node", node)
}
