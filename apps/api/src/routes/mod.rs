pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::blocks::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/vocabulary", get(handlers::handle_vocabulary))
        .route("/api/v1/blocks/validate", post(handlers::handle_validate))
        .route(
            "/api/v1/blocks/validate/batch",
            post(handlers::handle_validate_batch),
        )
        .fallback(not_found)
        .with_state(state)
}
