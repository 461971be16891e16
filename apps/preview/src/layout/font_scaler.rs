//! Per-line font size relative to the baseline phrase.
//!
//! The text box is designed around one reference line, [`BASE_PHRASE`], rendered at
//! [`BASE_FONT_SIZE`]. Its measured width is both the per-line width budget and the divisor
//! for shrinking: a line twice as wide as the baseline renders at half the size.

use serde::Serialize;

use crate::layout::measure::measure_text;
use crate::layout::metric_table::MetricTable;

/// Reference font size the text box was designed for.
pub const BASE_FONT_SIZE: u32 = 54;

/// The line that exactly fills the text box at [`BASE_FONT_SIZE`].
pub const BASE_PHRASE: &str = "Oh. And it needs to be found and caught down";

/// The baseline phrase together with its measured width under a given table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaselinePhrase {
    pub phrase: String,
    pub metric: f64,
}

impl BaselinePhrase {
    /// Measures [`BASE_PHRASE`] with `table`.
    pub fn measure(table: &MetricTable) -> Self {
        Self::custom(table, BASE_PHRASE)
    }

    /// Measures an arbitrary reference phrase with `table`.
    pub fn custom(table: &MetricTable, phrase: &str) -> Self {
        Self {
            phrase: phrase.to_string(),
            metric: measure_text(table, phrase),
        }
    }
}

/// Chosen size for one line and the width it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSize {
    pub size: u32,
    pub metric: f64,
}

/// Font size for `text` so that it fits the baseline width.
///
/// Lines no wider than the baseline keep [`BASE_FONT_SIZE`]; wider lines shrink in inverse
/// proportion to their width, floored, and never below 1.
pub fn size_for(table: &MetricTable, baseline: &BaselinePhrase, text: &str) -> LineSize {
    let metric = measure_text(table, text);
    LineSize {
        size: scaled_size(baseline.metric, metric),
        metric,
    }
}

/// Size for a line of width `metric` against a baseline of width `base_metric`.
pub(crate) fn scaled_size(base_metric: f64, metric: f64) -> u32 {
    if metric <= base_metric {
        return BASE_FONT_SIZE;
    }
    let scaled = f64::from(BASE_FONT_SIZE) * (base_metric / metric);
    // `as` saturates and maps NaN to 0; both end up clamped to 1.
    (scaled as u32).max(1)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_table() -> MetricTable {
        MetricTable::from_iter(
            ('a'..='z')
                .chain('A'..='Z')
                .chain([' ', '.'])
                .map(|c| (c.to_string(), 10.0)),
        )
    }

    #[test]
    fn test_baseline_measures_base_phrase() {
        let table = uniform_table();
        let baseline = BaselinePhrase::measure(&table);
        assert_eq!(baseline.phrase, BASE_PHRASE);
        assert_eq!(baseline.metric, 10.0 * BASE_PHRASE.chars().count() as f64);
    }

    #[test]
    fn test_short_line_keeps_base_size() {
        let table = uniform_table();
        let baseline = BaselinePhrase::measure(&table);
        let result = size_for(&table, &baseline, "Short line");
        assert_eq!(result.size, BASE_FONT_SIZE);
        assert_eq!(result.metric, 100.0);
    }

    #[test]
    fn test_line_equal_to_baseline_keeps_base_size() {
        let table = uniform_table();
        let baseline = BaselinePhrase::measure(&table);
        assert_eq!(size_for(&table, &baseline, BASE_PHRASE).size, BASE_FONT_SIZE);
    }

    #[test]
    fn test_double_width_line_halves_size() {
        let table = uniform_table();
        let baseline = BaselinePhrase::measure(&table);
        let doubled = format!("{BASE_PHRASE}{BASE_PHRASE}");
        let result = size_for(&table, &baseline, &doubled);
        assert_eq!(result.size, BASE_FONT_SIZE / 2);
        assert_eq!(result.metric, 2.0 * baseline.metric);
    }

    #[test]
    fn test_slightly_wider_line_shrinks() {
        let table = uniform_table();
        let baseline = BaselinePhrase::measure(&table);
        let result = size_for(&table, &baseline, &format!("{BASE_PHRASE}x"));
        assert!(result.size < BASE_FONT_SIZE);
        assert!(result.size > 0);
    }

    #[test]
    fn test_size_never_below_one() {
        assert_eq!(scaled_size(10.0, 1.0e9), 1);
        assert_eq!(scaled_size(10.0, f64::INFINITY), 1);
    }

    #[test]
    fn test_scaled_size_floors() {
        // 54 * (100 / 130) = 41.53...
        assert_eq!(scaled_size(100.0, 130.0), 41);
    }
}
