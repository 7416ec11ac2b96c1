//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::document::{assemble, Document};
use crate::errors::AppError;
use crate::generation::generator::run_generation;
use crate::models::form::GenerationForm;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub raw: String,
    pub document: Document,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeView {
    pub is_generating: bool,
    pub form: GenerationForm,
    pub raw: String,
    pub document: Document,
}

/// POST /api/v1/generate
///
/// Runs the full generation flow and returns the raw text plus the parsed
/// document. 409 when a generation is already in flight.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(form): Json<GenerationForm>,
) -> Result<Json<GenerateResponse>, AppError> {
    let raw = run_generation(&state.generation, state.llm.as_ref(), form).await?;
    let document = assemble(&raw);
    Ok(Json(GenerateResponse { raw, document }))
}

/// GET /api/v1/resume
///
/// Returns the current generation state and the fully resolved document,
/// rebuilt from the raw result on every read.
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeView> {
    let (is_generating, form, raw) = state.generation.snapshot();
    let document = assemble(&raw);
    Json(ResumeView {
        is_generating,
        form,
        raw,
        document,
    })
}
