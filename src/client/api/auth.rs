use crate::model::auth::{
    LoginCheckpointDto, LoginDto, LoginResponseDto, PasswordResetRequestDto, StatusDto,
};

use super::request::ApiRequest;

/// GET /sanctum/csrf-cookie
/// Primes the XSRF cookie; must precede the first authentication POST
pub fn get_csrf_cookie() -> ApiRequest<()> {
    ApiRequest::get("/sanctum/csrf-cookie")
}

/// POST /auth/login
pub fn login(dto: &LoginDto) -> ApiRequest<LoginResponseDto> {
    ApiRequest::post("/auth/login").json_body(dto).json()
}

/// POST /auth/login/checkpoint
/// Completes a login that requires a second factor
pub fn login_checkpoint(dto: &LoginCheckpointDto) -> ApiRequest<LoginResponseDto> {
    ApiRequest::post("/auth/login/checkpoint").json_body(dto).json()
}

/// POST /auth/password
pub fn request_password_reset(email: &str) -> ApiRequest<StatusDto> {
    ApiRequest::post("/auth/password")
        .json_body(&PasswordResetRequestDto {
            email: email.to_string(),
        })
        .json()
}

/// POST /auth/logout
pub fn logout() -> ApiRequest<()> {
    ApiRequest::post("/auth/logout")
}
