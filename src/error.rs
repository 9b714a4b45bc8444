use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to API callers. Each variant maps to a status code and a
/// sanitized message; upstream bodies and internal causes are logged where
/// they occur and never forwarded verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing/invalid session, or the upstream rejected our API key.
    #[error("{0}")]
    Unauthorized(String),
    /// Malformed input, or the upstream rejected the prompt.
    #[error("{0}")]
    BadRequest(String),
    /// Upstream returned an unhandled non-2xx status.
    #[error("AI service error: {0}")]
    Upstream(u16),
    /// Missing configuration or any unexpected failure.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn unauthorized() -> Self {
        Self::Unauthorized("Unauthorized".to_string())
    }

    /// Generic catch-all message; the real cause is logged at the failure site.
    pub fn internal() -> Self {
        Self::Internal("Failed to process your request".to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
