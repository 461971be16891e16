use serde::{Deserialize, Serialize};

use crate::export::Separator;
use crate::layout::engine::LineLayout;
use crate::layout::DocumentLayout;

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LayoutRequest {
    pub text: String,
    #[serde(default)]
    pub auto_wrap: bool,
    /// Caret offset in chars before the edit; echoed back clamped to the new text.
    #[serde(default)]
    pub cursor: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct LineView {
    #[serde(flatten)]
    pub layout: LineLayout,
    /// `[start, end)` char range past the baseline width, if the line overflows.
    pub overflow: Option<(usize, usize)>,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub text: String,
    pub changed: bool,
    pub lines: Vec<LineView>,
    pub effective_size: u32,
    pub display_size: u32,
    pub base_metric: f64,
    pub details: Vec<String>,
    pub cursor: Option<usize>,
}

impl LayoutResponse {
    pub fn new(layout: DocumentLayout, base_metric: f64, cursor: Option<usize>) -> Self {
        let details = layout.details();
        let lines = layout
            .lines
            .into_iter()
            .map(|line| LineView {
                overflow: line.overflow_range(),
                layout: line,
            })
            .collect();
        Self {
            text: layout.text,
            changed: layout.changed,
            lines,
            effective_size: layout.effective_size,
            display_size: layout.display_size,
            base_metric,
            details,
            cursor,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Measure
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MeasureRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct MeasureResponse {
    pub width: f64,
    pub font_size: u32,
    pub overflow_index: usize,
    pub char_count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Export
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub text: String,
    /// Separators chosen so far; re-derived against the document's gap count.
    #[serde(default)]
    pub separators: Vec<Separator>,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub separators: Vec<Separator>,
    pub macro_text: String,
}
