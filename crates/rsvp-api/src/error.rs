//! Error types for the HTTP layer.
//!
//! [`ApiError`] maps registry failures onto HTTP status codes and renders
//! them through its [`IntoResponse`] implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rsvp_core::RegistryError;

/// Errors returned by API handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Required input was missing or invalid.
    #[error("{0}")]
    Validation(String),

    /// The named attendee does not exist.
    #[error("{0}")]
    NotFound(String),
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        if err.is_validation() {
            Self::Validation(err.to_string())
        } else {
            Self::NotFound(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = serde_json::json!({
            "message": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
