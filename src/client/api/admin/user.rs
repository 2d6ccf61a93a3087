use crate::{
    client::api::{pagination::Paginated, request::ApiRequest},
    model::admin::{AdminUserDto, SaveUserDto},
};

/// GET /api/application/users
pub fn get_users(
    page: u64,
    per_page: u64,
    email: Option<&str>,
) -> ApiRequest<Paginated<AdminUserDto>> {
    ApiRequest::get("/api/application/users")
        .query("page", page)
        .query("per_page", per_page)
        .query_opt("filter[email]", email.filter(|e| !e.trim().is_empty()))
        .paginated()
}

/// GET /api/application/users/{user}
pub fn get_user(user: u64) -> ApiRequest<AdminUserDto> {
    ApiRequest::get("/api/application/users/{user}")
        .param("user", user)
        .item()
}

/// POST /api/application/users
pub fn create_user(dto: &SaveUserDto) -> ApiRequest<AdminUserDto> {
    ApiRequest::post("/api/application/users").json_body(dto).item()
}

/// PATCH /api/application/users/{user}
pub fn update_user(user: u64, dto: &SaveUserDto) -> ApiRequest<AdminUserDto> {
    ApiRequest::patch("/api/application/users/{user}")
        .param("user", user)
        .json_body(dto)
        .item()
}

/// DELETE /api/application/users/{user}
pub fn delete_user(user: u64) -> ApiRequest<()> {
    ApiRequest::delete("/api/application/users/{user}").param("user", user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::api::request::{Body, Method};
    use serde_json::json;

    /// Tests decoding of the `2fa` key.
    ///
    /// Verifies the key is not a camelCase candidate and reaches the model as is.
    ///
    /// Expected: Ok with two factor enabled
    #[test]
    fn decodes_two_factor_flag() {
        let body = r#"{
            "object": "user",
            "attributes": {
                "id": 1, "external_id": null, "uuid": "u-1", "username": "admin",
                "email": "admin@example.com", "first_name": "Ad", "last_name": "Min",
                "language": "en", "root_admin": true, "2fa": true,
                "created_at": "2024-01-01T00:00:00+00:00", "updated_at": "2024-01-01T00:00:00+00:00"
            }
        }"#;

        let user = get_user(1).decode(200, body).unwrap();

        assert!(user.root_admin);
        assert!(user.two_factor);
        assert_eq!(user.first_name, "Ad");
    }

    /// Tests the email filter.
    ///
    /// Expected: filter only when an email is given
    #[test]
    fn filters_by_email() {
        assert_eq!(get_users(1, 25, None).url(""), "/api/application/users?page=1&per_page=25");
        assert_eq!(
            get_users(1, 25, Some("a@b.c")).url(""),
            "/api/application/users?page=1&per_page=25&filter%5Bemail%5D=a%40b.c"
        );
    }

    /// Tests that a user update without a new password leaves it out.
    ///
    /// Expected: PATCH with snake_case body and no `password` key
    #[test]
    fn update_omits_unchanged_password() {
        let request = update_user(
            4,
            &SaveUserDto {
                external_id: None,
                username: "moderator".to_string(),
                email: "mod@example.com".to_string(),
                first_name: "Mod".to_string(),
                last_name: "Erator".to_string(),
                password: None,
                root_admin: false,
                language: None,
            },
        );

        assert_eq!(request.method(), Method::Patch);
        assert_eq!(request.path(), "/api/application/users/4");
        assert_eq!(
            request.body(),
            Ok(&Body::Json(json!({
                "username": "moderator",
                "email": "mod@example.com",
                "first_name": "Mod",
                "last_name": "Erator",
                "root_admin": false
            })))
        );
    }
}
