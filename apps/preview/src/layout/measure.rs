//! Cumulative advance-width measurement.
//!
//! A line is scanned left to right in *units*: either the three-character placeholder
//! `{n}` (an embedded game variable, always [`PLACEHOLDER_WIDTH`] wide and never split)
//! or a single character. Character widths come from the [`MetricTable`] with two
//! fallbacks for missing or zero entries: ASCII digits use [`DIGIT_FALLBACK_WIDTH`],
//! anything else (fractions and numerals from other scripts included) uses the table's
//! space width.
//!
//! Straight apostrophes are looked up as a curly quote. Which curly quote depends on the
//! caller: [`measure_text`] maps `'` to a right single quotation mark, while the overflow
//! scan in `overflow.rs` maps it to a left one. The two have always disagreed; both
//! mappings are pinned by tests until someone decides which one the game actually uses.

use crate::layout::metric_table::MetricTable;

/// The embedded-variable placeholder `{n}`, measured as one unit.
const PLACEHOLDER_CHARS: [char; 3] = ['{', 'n', '}'];

/// Rendered width of the `{n}` placeholder.
pub const PLACEHOLDER_WIDTH: f64 = 343.6875;

/// Width of a digit missing from the table.
pub const DIGIT_FALLBACK_WIDTH: f64 = 15.0;

/// Right single quotation mark, used by [`measure_text`] for `'`.
pub const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

/// Left single quotation mark, used by the overflow scan for `'`.
pub const LEFT_SINGLE_QUOTE: char = '\u{2018}';

// ────────────────────────────────────────────────────────────────────────────
// Unit scan
// ────────────────────────────────────────────────────────────────────────────

/// One measured unit of a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Advance {
    /// Char index where the unit starts.
    pub start: usize,
    /// Number of chars the unit spans (3 for the placeholder, otherwise 1).
    pub len: usize,
    pub width: f64,
}

/// Iterator over the [`Advance`]s of a char slice.
pub(crate) struct Advances<'a> {
    table: &'a MetricTable,
    chars: &'a [char],
    apostrophe: char,
    pos: usize,
}

impl<'a> Advances<'a> {
    /// `apostrophe` is the glyph looked up in place of a straight `'`.
    pub fn new(table: &'a MetricTable, chars: &'a [char], apostrophe: char) -> Self {
        Self {
            table,
            chars,
            apostrophe,
            pos: 0,
        }
    }
}

impl Iterator for Advances<'_> {
    type Item = Advance;

    fn next(&mut self) -> Option<Advance> {
        let rest = self.chars.get(self.pos..).filter(|r| !r.is_empty())?;
        let start = self.pos;

        let advance = if rest.starts_with(&PLACEHOLDER_CHARS) {
            Advance {
                start,
                len: PLACEHOLDER_CHARS.len(),
                width: PLACEHOLDER_WIDTH,
            }
        } else {
            let ch = match rest[0] {
                '\'' => self.apostrophe,
                other => other,
            };
            Advance {
                start,
                len: 1,
                width: char_width(self.table, ch),
            }
        };

        self.pos += advance.len;
        Some(advance)
    }
}

/// Number of chars in the unit starting at the front of `chars` (0 when empty).
pub(crate) fn leading_unit_len(chars: &[char]) -> usize {
    if chars.starts_with(&PLACEHOLDER_CHARS) {
        PLACEHOLDER_CHARS.len()
    } else {
        chars.len().min(1)
    }
}

/// Width of a single (already apostrophe-mapped) character.
fn char_width(table: &MetricTable, ch: char) -> f64 {
    match table.glyph_width(ch) {
        Some(w) if w != 0.0 => w,
        _ if ch.is_ascii_digit() => DIGIT_FALLBACK_WIDTH,
        _ => table.space_width(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Measurement
// ────────────────────────────────────────────────────────────────────────────

/// Total advance width of `text`.
///
/// A plain running sum, no rounding. The empty string measures `0.0`.
pub fn measure_text(table: &MetricTable, text: &str) -> f64 {
    let chars: Vec<char> = text.chars().collect();
    measure_chars(table, &chars)
}

pub(crate) fn measure_chars(table: &MetricTable, chars: &[char]) -> f64 {
    Advances::new(table, chars, RIGHT_SINGLE_QUOTE).fold(0.0, |total, a| total + a.width)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::metric_table::DEFAULT_SPACE_WIDTH;

    fn letters_table() -> MetricTable {
        let mut entries: Vec<(String, f64)> = ('a'..='z')
            .chain('A'..='Z')
            .map(|c| (c.to_string(), 10.0))
            .collect();
        entries.push((" ".to_string(), 10.0));
        MetricTable::from_iter(entries)
    }

    #[test]
    fn test_measure_empty_is_zero() {
        assert_eq!(measure_text(&letters_table(), ""), 0.0);
    }

    #[test]
    fn test_measure_sums_table_widths() {
        let table = MetricTable::from_iter([("a", 10.0), ("b", 12.0)]);
        assert_eq!(measure_text(&table, "ab"), 22.0);
    }

    #[test]
    fn test_measure_digit_fallback() {
        let table = MetricTable::from_iter([("a", 10.0)]);
        assert_eq!(measure_text(&table, "5"), DIGIT_FALLBACK_WIDTH);
    }

    #[test]
    fn test_measure_zero_width_entry_falls_back() {
        let table = MetricTable::from_iter([("7", 0.0), ("x", 0.0), (" ", 6.0)]);
        assert_eq!(measure_text(&table, "7"), DIGIT_FALLBACK_WIDTH);
        assert_eq!(measure_text(&table, "x"), 6.0);
    }

    #[test]
    fn test_measure_unknown_char_uses_space_width() {
        let table = MetricTable::from_iter([(" ", 11.0)]);
        assert_eq!(measure_text(&table, "é"), 11.0);
    }

    #[test]
    fn test_measure_unknown_char_without_space_entry() {
        let table = MetricTable::empty();
        assert_eq!(measure_text(&table, "?"), DEFAULT_SPACE_WIDTH);
    }

    #[test]
    fn test_measure_placeholder_is_fixed_width() {
        let table = MetricTable::from_iter([("{", 1000.0), ("n", 1000.0), ("}", 1000.0)]);
        assert_eq!(measure_text(&table, "{n}"), PLACEHOLDER_WIDTH);
    }

    #[test]
    fn test_measure_placeholder_then_char() {
        let table = letters_table();
        assert_eq!(measure_text(&table, "{n}x"), PLACEHOLDER_WIDTH + 10.0);
    }

    #[test]
    fn test_measure_partial_placeholder_is_plain_chars() {
        let table = letters_table();
        // "{n" has no closing brace: '{' falls back to space width, 'n' is a letter.
        assert_eq!(measure_text(&table, "{n"), 20.0);
    }

    #[test]
    fn test_measure_apostrophe_uses_right_quote() {
        let table = MetricTable::from_iter([
            (RIGHT_SINGLE_QUOTE.to_string(), 4.0),
            (LEFT_SINGLE_QUOTE.to_string(), 9.0),
            ("'".to_string(), 100.0),
        ]);
        assert_eq!(measure_text(&table, "'"), 4.0);
    }

    #[test]
    fn test_measure_non_ascii_numerals_use_space_width() {
        let table = MetricTable::from_iter([(" ", 10.0)]);
        for numeral in ["½", "Ⅻ", "²", "٣"] {
            assert_eq!(measure_text(&table, numeral), 10.0, "{numeral}");
        }
        assert_eq!(measure_text(&table, "3"), DIGIT_FALLBACK_WIDTH);
    }

    #[test]
    fn test_measure_mixed_line_sums_widths_and_fallbacks() {
        let table = MetricTable::from_iter([("a", 10.0), ("b", 12.5), (" ", 3.0)]);
        // a b space b a space, then '9' (digit fallback), space, 'é' (space width).
        let expected = 10.0 + 12.5 + 3.0 + 12.5 + 10.0 + 3.0 + DIGIT_FALLBACK_WIDTH + 3.0 + 3.0;
        assert_eq!(measure_text(&table, "ab ba 9 é"), expected);
        assert_eq!(expected, 72.0);
    }

    #[test]
    fn test_leading_unit_len() {
        let chars: Vec<char> = "{n}a".chars().collect();
        assert_eq!(leading_unit_len(&chars), 3);
        assert_eq!(leading_unit_len(&chars[1..]), 1);
        assert_eq!(leading_unit_len(&[]), 0);
    }
}
