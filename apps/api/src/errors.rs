use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::export::ExportError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("A generation request is already in flight")]
    GenerationInFlight,

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::GenerationInFlight => (
                StatusCode::CONFLICT,
                "GENERATION_IN_FLIGHT",
                self.to_string(),
            ),
            AppError::Export(e) => match e {
                ExportError::NothingToExport(notice) => (
                    StatusCode::CONFLICT,
                    "NOTHING_TO_EXPORT",
                    notice.to_string(),
                ),
                ExportError::SurfaceBlocked => (
                    StatusCode::CONFLICT,
                    "DISPLAY_SURFACE_BLOCKED",
                    e.to_string(),
                ),
                ExportError::ClipboardWrite => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CLIPBOARD_WRITE_FAILED",
                    e.to_string(),
                ),
            },
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
