//! Overflow point of a line: the first unit whose width would push the running total
//! past a limit.
//!
//! Uses the same unit scan as [`measure_text`](crate::layout::measure::measure_text),
//! except that a straight apostrophe is looked up as a LEFT single quotation mark.

use crate::layout::measure::{Advances, LEFT_SINGLE_QUOTE};
use crate::layout::metric_table::MetricTable;

/// Char index at which cumulative width would exceed `limit`.
///
/// Returns the start of the first unit that does not fit, or the char length of `text`
/// when everything fits. The `{n}` placeholder is never split: either it fits whole or the
/// returned index is its first char.
pub fn find_overflow_index(table: &MetricTable, text: &str, limit: f64) -> usize {
    let chars: Vec<char> = text.chars().collect();
    overflow_index_chars(table, &chars, limit)
}

pub(crate) fn overflow_index_chars(table: &MetricTable, chars: &[char], limit: f64) -> usize {
    let mut total = 0.0_f64;
    for advance in Advances::new(table, chars, LEFT_SINGLE_QUOTE) {
        if total + advance.width > limit {
            return advance.start;
        }
        total += advance.width;
    }
    chars.len()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::measure::{measure_text, PLACEHOLDER_WIDTH, RIGHT_SINGLE_QUOTE};

    fn uniform_table(width: f64) -> MetricTable {
        MetricTable::from_iter(
            ('a'..='z')
                .chain(std::iter::once(' '))
                .map(|c| (c.to_string(), width)),
        )
    }

    #[test]
    fn test_empty_text_returns_zero() {
        assert_eq!(find_overflow_index(&uniform_table(10.0), "", 5.0), 0);
    }

    #[test]
    fn test_everything_fits_returns_length() {
        let table = uniform_table(10.0);
        assert_eq!(find_overflow_index(&table, "abc", 30.0), 3);
    }

    #[test]
    fn test_returns_first_overflowing_char() {
        let table = uniform_table(10.0);
        // 10 + 10 = 20 fits, the third char would make 30 > 25.
        assert_eq!(find_overflow_index(&table, "abcd", 25.0), 2);
    }

    #[test]
    fn test_exact_fit_is_not_overflow() {
        let table = uniform_table(10.0);
        assert_eq!(find_overflow_index(&table, "abc", 20.0), 2);
        assert_eq!(find_overflow_index(&table, "ab", 20.0), 2);
    }

    #[test]
    fn test_first_char_too_wide_returns_zero() {
        let table = uniform_table(10.0);
        assert_eq!(find_overflow_index(&table, "abc", 5.0), 0);
    }

    #[test]
    fn test_index_counts_chars_not_bytes() {
        let table = MetricTable::from_iter([("é", 10.0), ("ü", 10.0)]);
        assert_eq!(find_overflow_index(&table, "éüé", 20.0), 2);
    }

    #[test]
    fn test_placeholder_is_atomic() {
        let table = uniform_table(10.0);
        // "ab" = 20, the placeholder would push it far past 100.
        assert_eq!(find_overflow_index(&table, "ab{n}c", 100.0), 2);
        // With room for the whole placeholder the scan continues after it.
        let limit = 20.0 + PLACEHOLDER_WIDTH;
        assert_eq!(find_overflow_index(&table, "ab{n}c", limit), 5);
    }

    #[test]
    fn test_infinite_limit_returns_length() {
        let table = uniform_table(10.0);
        let text = "hello {n} world 42";
        assert_eq!(
            find_overflow_index(&table, text, f64::INFINITY),
            text.chars().count()
        );
    }

    #[test]
    fn test_monotonic_in_limit() {
        let table = MetricTable::from_iter([("a", 7.5), ("b", 12.0), (" ", 4.0)]);
        let text = "ab ba {n} 12 bab";
        let mut previous = 0;
        for step in 0..200 {
            let limit = f64::from(step) * 5.0;
            let idx = find_overflow_index(&table, text, limit);
            assert!(idx >= previous, "index went down at limit {limit}");
            previous = idx;
        }
    }

    #[test]
    fn test_apostrophe_uses_left_quote() {
        // The overflow scan looks `'` up as ‘ while measure_text uses ’.
        let table = MetricTable::from_iter([
            (LEFT_SINGLE_QUOTE.to_string(), 30.0),
            (RIGHT_SINGLE_QUOTE.to_string(), 5.0),
        ]);
        assert_eq!(measure_text(&table, "'"), 5.0);
        assert_eq!(find_overflow_index(&table, "'", 10.0), 0);
        assert_eq!(find_overflow_index(&table, "'", 30.0), 1);
    }
}
