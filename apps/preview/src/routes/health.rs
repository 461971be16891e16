use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status plus the loaded metric table size and baseline width.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "message-preview",
        "metric_entries": state.engine.table().len(),
        "base_metric": state.engine.base_metric(),
    }))
}
