pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::preview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/layout", post(handlers::handle_layout))
        .route("/api/v1/measure", post(handlers::handle_measure))
        .route("/api/v1/export", post(handlers::handle_export))
        .with_state(state)
}
