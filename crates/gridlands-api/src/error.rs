//! Error types for the map query API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that converts
//! into an HTTP response via its [`IntoResponse`] implementation, with a
//! JSON `{error, status}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gridlands_db::DbError;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Query coordinates outside the world extent.
    #[error("invalid coordinates: outside the world extent")]
    OutOfBounds,

    /// The requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A grid store operation failed.
    #[error("grid store error: {0}")]
    Db(#[from] DbError),

    /// World generation failed.
    #[error("generation failed: {0}")]
    Generation(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::OutOfBounds => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Db(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("store error: {e}")),
            Self::Generation(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
