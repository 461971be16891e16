// Text measurement and layout for fixed-width message boxes.
// Implements: glyph metric table, width measurement, overflow location, greedy reflow,
// baseline-relative font sizing, and the document layout pass that ties them together.
// Everything here is synchronous and pure once the metric table is loaded.

pub mod engine;
pub mod font_scaler;
pub mod measure;
pub mod metric_table;
pub mod overflow;
pub mod reflow;

// Re-export the public API consumed by the host (main, handlers).
pub use engine::{clamp_cursor, DocumentLayout, LayoutEngine};
pub use metric_table::load_metrics;
