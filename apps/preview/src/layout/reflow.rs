//! Greedy line reflow.
//!
//! Splits one line into sub-lines that each fit a width limit, breaking at the last space
//! before the overflow point when there is one and mid-word otherwise. Every iteration
//! consumes at least one unit, so the loop always terminates.

use crate::layout::measure::leading_unit_len;
use crate::layout::metric_table::MetricTable;
use crate::layout::overflow::overflow_index_chars;

/// Wraps `line` into sub-lines no wider than `limit`.
///
/// - An empty line yields a single empty sub-line.
/// - A break at a space drops that space, and trailing whitespace of the emitted sub-line.
/// - A unit that is wider than `limit` on its own is emitted alone. The `{n}` placeholder
///   counts as one unit and is never split.
pub fn wrap_line(table: &MetricTable, line: &str, limit: f64) -> Vec<String> {
    if line.is_empty() {
        return vec![String::new()];
    }

    let chars: Vec<char> = line.chars().collect();
    let mut remaining: &[char] = &chars;
    let mut wrapped = Vec::new();

    while !remaining.is_empty() {
        let mut cut = overflow_index_chars(table, remaining, limit);
        if cut == 0 {
            cut = leading_unit_len(remaining);
        }

        if cut >= remaining.len() {
            wrapped.push(remaining.iter().collect());
            break;
        }

        match remaining[..cut].iter().rposition(|&c| c == ' ') {
            Some(bp) if bp > 0 => {
                let part: String = remaining[..bp].iter().collect();
                wrapped.push(part.trim_end().to_string());
                remaining = &remaining[bp + 1..];
            }
            _ => {
                wrapped.push(remaining[..cut].iter().collect());
                remaining = &remaining[cut..];
            }
        }
    }

    wrapped
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
