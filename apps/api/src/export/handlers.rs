//! Axum route handlers for the Export API.
//!
//! Each handler runs its adapter against a capturing sink and converts the
//! capture into the HTTP response (print page, file attachment, clipboard
//! payload).

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::document::assemble;
use crate::errors::AppError;
use crate::export::clipboard::{export_clipboard, CLIPBOARD_SUCCESS_MESSAGE};
use crate::export::print::export_print;
use crate::export::text::export_text;
use crate::export::word::export_word;
use crate::export::{CapturedSurface, CapturingClipboard, CapturingFileSink, SavedFile};
use crate::render::document_to_html;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ClipboardResponse {
    pub text: String,
    pub message: String,
}

/// GET /api/v1/export/print
///
/// Returns the standalone print page. The frontend opens it in a new
/// window; the page's own deferred script raises the print dialog.
pub async fn handle_export_print(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let raw = state.generation.raw();
    let rendered = document_to_html(&assemble(&raw));

    let mut surface = CapturedSurface::default();
    export_print(Some(&rendered), &raw, &mut surface)?;
    Ok(Html(surface.page.unwrap_or_default()))
}

/// GET /api/v1/export/word
///
/// Downloads the document as `generated-resume.doc`.
pub async fn handle_export_word(State(state): State<AppState>) -> Result<Response, AppError> {
    let raw = state.generation.raw();
    let rendered = document_to_html(&assemble(&raw));

    let mut files = CapturingFileSink::default();
    export_word(Some(&rendered), &raw, &mut files)?;
    attachment_response(files)
}

/// GET /api/v1/export/text
///
/// Downloads the raw generation result as `generated-resume.txt`.
pub async fn handle_export_text(State(state): State<AppState>) -> Result<Response, AppError> {
    let raw = state.generation.raw();

    let mut files = CapturingFileSink::default();
    export_text(&raw, &mut files)?;
    attachment_response(files)
}

/// GET /api/v1/export/clipboard
///
/// Returns the raw text plus the success notice; the frontend completes
/// the clipboard write on its side of the capability boundary.
pub async fn handle_export_clipboard(
    State(state): State<AppState>,
) -> Result<Json<ClipboardResponse>, AppError> {
    let raw = state.generation.raw();

    let mut clipboard = CapturingClipboard::default();
    export_clipboard(&raw, &mut clipboard)?;
    Ok(Json(ClipboardResponse {
        text: clipboard.text.unwrap_or_default(),
        message: CLIPBOARD_SUCCESS_MESSAGE.to_string(),
    }))
}

/// Turns the captured file into an attachment download response.
fn attachment_response(files: CapturingFileSink) -> Result<Response, AppError> {
    let SavedFile {
        filename,
        content_type,
        bytes,
    } = files
        .saved
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("file sink captured nothing")))?;

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
