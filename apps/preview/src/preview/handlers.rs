use axum::{extract::State, Json};
use tracing::debug;

use crate::errors::AppError;
use crate::export::{derive_separators, join_macro};
use crate::layout::clamp_cursor;
use crate::preview::models::{
    ExportRequest, ExportResponse, LayoutRequest, LayoutResponse, MeasureRequest,
    MeasureResponse,
};
use crate::state::AppState;

/// POST /api/v1/layout
pub async fn handle_layout(
    State(state): State<AppState>,
    Json(req): Json<LayoutRequest>,
) -> Result<Json<LayoutResponse>, AppError> {
    check_length(&req.text, state.config.max_document_chars)?;

    let LayoutRequest {
        text,
        auto_wrap,
        cursor,
    } = req;

    // CPU-bound pass — spawn_blocking to avoid blocking the async executor.
    let engine = state.engine.clone();
    let layout = tokio::task::spawn_blocking(move || engine.layout(&text, auto_wrap))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in layout: {e}")))?;

    debug!(
        lines = layout.lines.len(),
        effective_size = layout.effective_size,
        auto_wrap,
        "Layout pass complete"
    );

    let cursor = cursor.map(|offset| clamp_cursor(offset, &layout.text));
    Ok(Json(LayoutResponse::new(
        layout,
        state.engine.base_metric(),
        cursor,
    )))
}

/// POST /api/v1/measure
pub async fn handle_measure(
    State(state): State<AppState>,
    Json(req): Json<MeasureRequest>,
) -> Result<Json<MeasureResponse>, AppError> {
    check_length(&req.text, state.config.max_document_chars)?;

    let size = state.engine.size_for(&req.text);
    Ok(Json(MeasureResponse {
        width: size.metric,
        font_size: size.size,
        overflow_index: state.engine.overflow_index(&req.text),
        char_count: req.text.chars().count(),
    }))
}

/// POST /api/v1/export
pub async fn handle_export(
    State(state): State<AppState>,
    Json(req): Json<ExportRequest>,
) -> Result<Json<ExportResponse>, AppError> {
    check_length(&req.text, state.config.max_document_chars)?;

    let lines: Vec<&str> = req.text.split('\n').collect();
    let separators = derive_separators(&req.separators, lines.len().saturating_sub(1));
    let macro_text = join_macro(lines, &separators);

    Ok(Json(ExportResponse {
        separators,
        macro_text,
    }))
}

fn check_length(text: &str, max_chars: usize) -> Result<(), AppError> {
    let count = text.chars().count();
    if count > max_chars {
        return Err(AppError::Validation(format!(
            "text is {count} characters long, the limit is {max_chars}"
        )));
    }
    Ok(())
}
