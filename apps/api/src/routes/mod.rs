pub mod health;
pub mod index;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::errors::AppError;
use crate::state::AppState;

/// Any non-POST method on the analyze path gets the JSON 405 body rather
/// than the framework's empty default.
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/api/analyze",
            post(handle_analyze).fallback(method_not_allowed),
        )
        // No size cap on the uploaded image.
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
