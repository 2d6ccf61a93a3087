use crate::model::{
    account::{
        AccountDto, ApiKeyDto, CreateApiKeyDto, CreatedApiKeyDto, UpdateEmailDto,
        UpdatePasswordDto,
    },
};

use super::request::ApiRequest;

/// GET /api/client/account
/// Resolves to the signed-in user; a 401 means there is no session
pub fn get_account() -> ApiRequest<AccountDto> {
    ApiRequest::get("/api/client/account").item()
}

/// PUT /api/client/account/email
pub fn update_email(dto: &UpdateEmailDto) -> ApiRequest<()> {
    ApiRequest::put("/api/client/account/email").json_body(dto)
}

/// PUT /api/client/account/password
pub fn update_password(dto: &UpdatePasswordDto) -> ApiRequest<()> {
    ApiRequest::put("/api/client/account/password").json_body(dto)
}

/// GET /api/client/account/api-keys
pub fn get_api_keys() -> ApiRequest<Vec<ApiKeyDto>> {
    ApiRequest::get("/api/client/account/api-keys").list()
}

/// POST /api/client/account/api-keys
pub fn create_api_key(dto: &CreateApiKeyDto) -> ApiRequest<CreatedApiKeyDto> {
    ApiRequest::post("/api/client/account/api-keys")
        .json_body(dto)
        .json()
}

/// DELETE /api/client/account/api-keys/{identifier}
pub fn delete_api_key(identifier: &str) -> ApiRequest<()> {
    ApiRequest::delete("/api/client/account/api-keys/{identifier}").param("identifier", identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::api::request::{Body, Method};
    use serde_json::json;

    /// Tests that a new key's secret is read from `meta`.
    ///
    /// Expected: Ok with attributes and secret token
    #[test]
    fn decodes_created_key() {
        let request = create_api_key(&CreateApiKeyDto {
            description: "ci".to_string(),
            allowed_ips: vec!["10.0.0.1".to_string()],
        });
        let body = r#"{
            "object": "api_key",
            "attributes": {
                "identifier": "ptlc_1",
                "description": "ci",
                "allowed_ips": ["10.0.0.1"],
                "last_used_at": null,
                "created_at": "2024-03-01T10:00:00+00:00"
            },
            "meta": { "secret_token": "s3cr3t" }
        }"#;

        let created = request.decode(201, body).unwrap();

        assert_eq!(created.attributes.identifier, "ptlc_1");
        assert_eq!(created.attributes.allowed_ips, vec!["10.0.0.1"]);
        assert_eq!(created.meta.secret_token, "s3cr3t");
        assert_eq!(
            request.body(),
            Ok(&Body::Json(json!({ "description": "ci", "allowed_ips": ["10.0.0.1"] })))
        );
    }

    /// Tests the credential update payloads.
    ///
    /// Verifies camelCase model fields leave in snake_case.
    ///
    /// Expected: PUT bodies with the panel's field names
    #[test]
    fn credential_payloads() {
        let email = update_email(&UpdateEmailDto {
            email: "new@example.com".to_string(),
            password: "secret".to_string(),
        });
        assert_eq!(email.method(), Method::Put);
        assert_eq!(
            email.body(),
            Ok(&Body::Json(json!({ "email": "new@example.com", "password": "secret" })))
        );

        let password = update_password(&UpdatePasswordDto {
            current_password: "old-secret".to_string(),
            password: "new-secret".to_string(),
            password_confirmation: "new-secret".to_string(),
        });
        assert_eq!(password.path(), "/api/client/account/password");
        assert_eq!(
            password.body(),
            Ok(&Body::Json(json!({
                "current_password": "old-secret",
                "password": "new-secret",
                "password_confirmation": "new-secret"
            })))
        );
    }

    /// Tests listing and revoking API keys.
    ///
    /// Expected: keys decoded from the list, identifier in the delete path
    #[test]
    fn lists_and_revokes_keys() {
        let body = r#"{
            "object": "list",
            "data": [{
                "object": "api_key",
                "attributes": {
                    "identifier": "ptlc_1",
                    "description": "ci",
                    "allowed_ips": [],
                    "last_used_at": null,
                    "created_at": "2024-03-01T10:00:00+00:00"
                }
            }]
        }"#;

        let keys = get_api_keys().decode(200, body).unwrap();
        assert_eq!(keys.len(), 1);
        assert!(keys[0].last_used_at.is_none());

        let revoke = delete_api_key("ptlc_1");
        assert_eq!(revoke.method(), Method::Delete);
        assert_eq!(revoke.path(), "/api/client/account/api-keys/ptlc_1");
    }
}

