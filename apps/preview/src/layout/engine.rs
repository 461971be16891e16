//! Layout pass over a whole message document.
//!
//! `LayoutEngine` owns the immutable metric table and the baseline measured from it. It is
//! built once by the host at startup and shared read-only afterwards; every method is a
//! pure function of its input.

use serde::Serialize;

use crate::layout::font_scaler::{size_for, BaselinePhrase, LineSize, BASE_FONT_SIZE};
use crate::layout::measure::RIGHT_SINGLE_QUOTE;
use crate::layout::metric_table::MetricTable;
use crate::layout::overflow::find_overflow_index;
use crate::layout::reflow::wrap_line;

/// Scale applied to the effective size before the text widget renders it.
pub const TEXT_SCALE: f64 = 0.75;

/// Pixel width of the in-game text area at [`BASE_FONT_SIZE`].
pub const MAX_WIDTH_PX: f64 = 1080.0;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// Layout of a single (possibly wrapped) line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineLayout {
    pub text: String,
    /// Measured advance width.
    pub metric: f64,
    /// Font size this line would need on its own.
    pub size: u32,
    /// Char index where the line leaves the baseline width; equals `char_count` when it fits.
    pub overflow_index: usize,
    pub char_count: usize,
    /// Approximate on-screen width in pixels at `size`.
    pub approx_px: f64,
}

impl LineLayout {
    /// Char range to highlight as overflow, if any.
    pub fn overflow_range(&self) -> Option<(usize, usize)> {
        (self.overflow_index < self.char_count).then_some((self.overflow_index, self.char_count))
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentLayout {
    /// Document text after apostrophe normalization and, if requested, reflow.
    pub text: String,
    /// True when `text` differs from the input document.
    pub changed: bool,
    pub lines: Vec<LineLayout>,
    /// Smallest per-line size; the whole document renders at this size.
    pub effective_size: u32,
    /// `effective_size` scaled by [`TEXT_SCALE`].
    pub display_size: u32,
}

impl DocumentLayout {
    /// One human-readable summary row per line.
    pub fn details(&self) -> Vec<String> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                format!(
                    "Line {}: Calc length = {:?}, Rendered ≈ {:.2}px, Eff size = {}",
                    i + 1,
                    line.metric,
                    line.approx_px,
                    line.size
                )
            })
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct LayoutEngine {
    table: MetricTable,
    baseline: BaselinePhrase,
}

impl LayoutEngine {
    /// Builds an engine around `table`, measuring the baseline phrase with it.
    pub fn new(table: MetricTable) -> Self {
        let baseline = BaselinePhrase::measure(&table);
        Self { table, baseline }
    }

    pub fn table(&self) -> &MetricTable {
        &self.table
    }

    /// Width of the baseline phrase: the per-line budget.
    pub fn base_metric(&self) -> f64 {
        self.baseline.metric
    }

    /// Overflow point of `text` against the baseline width.
    pub fn overflow_index(&self, text: &str) -> usize {
        find_overflow_index(&self.table, text, self.baseline.metric)
    }

    /// Wraps `line` to the baseline width.
    pub fn wrap(&self, line: &str) -> Vec<String> {
        wrap_line(&self.table, line, self.baseline.metric)
    }

    pub fn size_for(&self, text: &str) -> LineSize {
        size_for(&self.table, &self.baseline, text)
    }

    /// Size for a document line. Blank lines keep the base size and report the baseline
    /// width so they never pull the document size down.
    fn line_size(&self, line: &str) -> LineSize {
        if line.trim().is_empty() {
            LineSize {
                size: BASE_FONT_SIZE,
                metric: self.baseline.metric,
            }
        } else {
            self.size_for(line)
        }
    }

    /// Runs a full layout pass over `document`.
    ///
    /// 1. Straight apostrophes become ’.
    /// 2. With `auto_wrap`, every line is reflowed to the baseline width.
    /// 3. Each resulting line gets a size and an overflow index, both against the baseline.
    /// 4. The document size is the smallest line size.
    pub fn layout(&self, document: &str, auto_wrap: bool) -> DocumentLayout {
        let normalized = normalize_apostrophes(document);

        let lines: Vec<String> = if auto_wrap {
            normalized.split('\n').flat_map(|line| self.wrap(line)).collect()
        } else {
            normalized.split('\n').map(str::to_string).collect()
        };

        let px_per_unit = MAX_WIDTH_PX / (f64::from(BASE_FONT_SIZE) * self.baseline.metric);

        let lines: Vec<LineLayout> = lines
            .into_iter()
            .map(|text| {
                let LineSize { size, metric } = self.line_size(&text);
                LineLayout {
                    overflow_index: self.overflow_index(&text),
                    char_count: text.chars().count(),
                    approx_px: f64::from(size) * px_per_unit * metric,
                    text,
                    metric,
                    size,
                }
            })
            .collect();

        let effective_size = lines
            .iter()
            .map(|l| l.size)
            .min()
            .unwrap_or(BASE_FONT_SIZE);
        let display_size = (f64::from(effective_size) * TEXT_SCALE) as u32;

        let text = lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        DocumentLayout {
            changed: text != document,
            text,
            lines,
            effective_size,
            display_size,
        }
    }
}

/// Replaces every straight apostrophe with a right single quotation mark.
pub fn normalize_apostrophes(text: &str) -> String {
    text.replace('\'', &RIGHT_SINGLE_QUOTE.to_string())
}

/// Clamps a caret offset (in chars) to the length of `text`.
pub fn clamp_cursor(offset: usize, text: &str) -> usize {
    offset.min(text.chars().count())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
