//! Application error type mapping to HTTP status codes.
//!
//! Error bodies use a single `detail` field, e.g.
//! `{"detail": "Invalid API Key"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use fitplan_types::generation::GenerationError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Missing or wrong `x-api-key`.
    Unauthorized,
    /// The generation collaborator failed.
    Generation(GenerationError),
}

impl From<GenerationError> for AppError {
    fn from(e: GenerationError) -> Self {
        AppError::Generation(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Invalid API Key"),
            AppError::Generation(e) => {
                tracing::error!(error = %e, "Plan generation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
