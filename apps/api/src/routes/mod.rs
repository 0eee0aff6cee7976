pub mod health;
pub mod resume;
pub mod ui;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(ui::index))
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resume",
            post(resume::handle_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}
