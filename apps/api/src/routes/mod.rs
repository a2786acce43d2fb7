pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::parsing::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume parsing API
        .route("/api/v1/resumes/parse", post(handlers::handle_parse_upload))
        .route(
            "/api/v1/resumes/parse-text",
            post(handlers::handle_parse_text),
        )
        .route(
            "/api/v1/resumes/export",
            post(handlers::handle_export_upload),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
