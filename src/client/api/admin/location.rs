use crate::{
    client::api::{pagination::Paginated, request::ApiRequest},
    model::admin::{LocationDto, SaveLocationDto},
};

/// GET /api/application/locations
pub fn get_locations(page: u64, per_page: u64) -> ApiRequest<Paginated<LocationDto>> {
    ApiRequest::get("/api/application/locations")
        .query("page", page)
        .query("per_page", per_page)
        .paginated()
}

/// POST /api/application/locations
pub fn create_location(dto: &SaveLocationDto) -> ApiRequest<LocationDto> {
    ApiRequest::post("/api/application/locations")
        .json_body(dto)
        .item()
}

/// PATCH /api/application/locations/{location}
pub fn update_location(location: u64, dto: &SaveLocationDto) -> ApiRequest<LocationDto> {
    ApiRequest::patch("/api/application/locations/{location}")
        .param("location", location)
        .json_body(dto)
        .item()
}

/// DELETE /api/application/locations/{location}
pub fn delete_location(location: u64) -> ApiRequest<()> {
    ApiRequest::delete("/api/application/locations/{location}").param("location", location)
}
