use std::sync::Arc;

use crate::config::Config;
use crate::layout::LayoutEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup from the metric table; read-only afterwards.
    pub engine: Arc<LayoutEngine>,
    pub config: Config,
}
