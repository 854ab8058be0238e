//! Request-level error taxonomy and its mapping to HTTP responses.

use crate::transport::http::types::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Everything a product handler can fail with.
///
/// Persistence failures never appear here: they are absorbed inside the
/// storage layer and the in-memory state stays authoritative.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed create/update payload, with itemized messages.
    #[error("Invalid payload")]
    Validation(Vec<String>),
    /// Path id is not a positive integer.
    #[error("Invalid id parameter")]
    InvalidId,
    /// The targeted product does not exist.
    #[error("Product not found")]
    NotFound,
    /// Anything else. Detail goes to the log, never to the client.
    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, details) = match &self {
            ApiError::Validation(details) => (StatusCode::BAD_REQUEST, Some(details.clone())),
            ApiError::InvalidId => (StatusCode::BAD_REQUEST, None),
            ApiError::NotFound => (StatusCode::NOT_FOUND, None),
            ApiError::Internal(e) => {
                tracing::error!(error = ?e, "unhandled failure in request handler");
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };
        let body = ErrorResponse {
            error: self.to_string(),
            details,
        };
        (status, Json(body)).into_response()
    }
}
