pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers as export_handlers;
use crate::generation::handlers as generation_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/v1/generate", post(generation_handlers::handle_generate))
        .route("/api/v1/resume", get(generation_handlers::handle_get_resume))
        // Export API
        .route(
            "/api/v1/export/print",
            get(export_handlers::handle_export_print),
        )
        .route(
            "/api/v1/export/word",
            get(export_handlers::handle_export_word),
        )
        .route(
            "/api/v1/export/text",
            get(export_handlers::handle_export_text),
        )
        .route(
            "/api/v1/export/clipboard",
            get(export_handlers::handle_export_clipboard),
        )
        .with_state(state)
}
