use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoginDto {
    pub user: String,
    pub password: String,
    #[serde(rename = "g-recaptcha-response", skip_serializing_if = "Option::is_none")]
    pub recaptcha_response: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoginResponseDto {
    pub data: LoginResultDto,
}

/// `complete == false` means a second factor is required and `confirmation_token`
/// must be sent to the checkpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResultDto {
    pub complete: bool,
    #[serde(default)]
    pub intended: Option<String>,
    #[serde(default)]
    pub confirmation_token: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginCheckpointDto {
    pub confirmation_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_token: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PasswordResetRequestDto {
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatusDto {
    pub status: String,
}
