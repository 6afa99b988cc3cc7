use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::roadmap::extractor::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Origin not allowed: {0}")]
    OriginNotAllowed(String),

    #[error("External call failed: {0}")]
    ExternalCall(#[from] LlmError),

    #[error("Extraction failed: {error}")]
    Extraction {
        raw_response: String,
        error: ExtractionError,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, Value) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::OriginNotAllowed(origin) => {
                tracing::warn!("Rejected request from origin {origin}");
                (
                    StatusCode::FORBIDDEN,
                    json!({ "error": "Not allowed by CORS" }),
                )
            }
            AppError::ExternalCall(e) => {
                tracing::error!("Gemini API error: {e}");
                let mut body = json!({
                    "error": "Failed to generate roadmap",
                    "details": e.details(),
                });
                if let Some(upstream) = e.status() {
                    body["status"] = json!(upstream);
                }
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
            AppError::Extraction {
                raw_response,
                error,
            } => {
                tracing::error!("Failed to parse AI response as JSON: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to parse AI response as JSON",
                        "rawResponse": raw_response,
                        "parseError": error.to_string(),
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
