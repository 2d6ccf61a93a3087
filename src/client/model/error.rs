use thiserror::Error;

use crate::model::api::{ErrorDto, PanelErrorsDto};

const UNEXPECTED_ERROR: &str = "An unexpected error was encountered while processing this request.";

/// A rejected request.
///
/// `status` is the HTTP status returned by the panel, or `0` when the request never
/// produced a response (transport failure, body that could not be serialized or decoded).
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u64, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::new(0, format!("Failed to send request: {}", err))
    }

    pub fn serialization(err: impl std::fmt::Display) -> Self {
        Self::new(0, format!("Failed to serialize request: {}", err))
    }

    pub fn decode(status: u64, err: impl std::fmt::Display) -> Self {
        Self::new(status, format!("Failed to parse response: {}", err))
    }

    /// Builds an error from a non-2xx response body.
    ///
    /// The panel reports failures either as `{"errors": [{"detail": ...}]}` or as
    /// `{"error": ...}`; the first detail wins. Anything else falls back to the raw body.
    pub fn from_response(status: u64, body: &str) -> Self {
        if let Ok(errors) = serde_json::from_str::<PanelErrorsDto>(body) {
            if let Some(detail) = errors.errors.into_iter().map(|e| e.detail).find(|d| !d.is_empty()) {
                return Self::new(status, detail);
            }
        }

        if let Ok(error) = serde_json::from_str::<ErrorDto>(body) {
            return Self::new(status, error.error);
        }

        let trimmed = body.trim();
        if trimmed.is_empty() {
            Self::new(status, UNEXPECTED_ERROR)
        } else {
            Self::new(status, trimmed)
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    pub fn is_validation(&self) -> bool {
        self.status == 422
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests extracting the first detail from the panel error envelope.
    ///
    /// Expected: message equals the first non-empty `detail`
    #[test]
    fn uses_first_error_detail() {
        let body = r#"{"errors":[{"code":"ValidationException","status":"422","detail":"The name field is required."},{"code":"x","status":"422","detail":"Second"}]}"#;

        let err = ApiError::from_response(422, body);

        assert_eq!(err.status, 422);
        assert_eq!(err.message, "The name field is required.");
        assert!(err.is_validation());
    }

    /// Tests the single `error` field shape.
    ///
    /// Expected: message equals the `error` string
    #[test]
    fn uses_error_field() {
        let err = ApiError::from_response(404, r#"{"error":"Server not found"}"#);

        assert_eq!(err.message, "Server not found");
        assert!(err.is_not_found());
    }

    /// Tests fallbacks for bodies the panel did not format.
    ///
    /// Expected: raw text is kept, an empty body gets the generic message
    #[test]
    fn falls_back_to_body_text() {
        let err = ApiError::from_response(502, "Bad Gateway\n");
        assert_eq!(err.message, "Bad Gateway");

        let err = ApiError::from_response(500, "");
        assert_eq!(err.message, UNEXPECTED_ERROR);
    }

    /// Tests that the display output is the message alone.
    ///
    /// Expected: `to_string` yields the message
    #[test]
    fn displays_message() {
        let err = ApiError::transport("connection refused");
        assert_eq!(err.to_string(), "Failed to send request: connection refused");
        assert_eq!(err.status, 0);
    }
}
