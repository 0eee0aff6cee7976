use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::ingest::IngestError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// An unsupported upload is not an error here: the shell reports it as a view.
/// A model answer that is not JSON is not an error either.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Could not read document: {0}")]
    Ingestion(#[from] IngestError),

    #[error("Remote model error: {0}")]
    RemoteService(#[from] LlmError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Ingestion(e) => {
                tracing::warn!("Ingestion failed: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "INGESTION_ERROR",
                    e.to_string(),
                )
            }
            AppError::RemoteService(e) => {
                tracing::error!("Remote model error: {e}");
                // Surfaced as-is so the user sees why the call failed.
                (StatusCode::BAD_GATEWAY, "REMOTE_SERVICE_ERROR", e.to_string())
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TEMPLATE_ERROR",
                    "The page could not be rendered".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
