//! Macro export: joins message lines with the control escape chosen for each gap.
//!
//! The game's script format separates message lines with literal two-character escapes:
//! `\r` starts a new line, `\n` breaks the line inside the same box, `\f` scrolls the box.
//! A message of N lines has N−1 gaps, each with one separator.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Separator {
    #[serde(rename = "\\r")]
    NewLine,
    #[serde(rename = "\\n")]
    LineBreak,
    #[serde(rename = "\\f")]
    ScrollLine,
}

impl Separator {
    /// The literal escape written into the macro text.
    pub fn escape(self) -> &'static str {
        match self {
            Separator::NewLine => r"\r",
            Separator::LineBreak => r"\n",
            Separator::ScrollLine => r"\f",
        }
    }

    /// Separator a gap gets until the user picks one: a line break after the first
    /// line, a scroll after every later one.
    pub fn default_for_gap(gap: usize) -> Self {
        if gap == 0 {
            Separator::LineBreak
        } else {
            Separator::ScrollLine
        }
    }
}

/// Resizes a separator list to `gap_count` gaps.
///
/// Entries for gaps that still exist are kept; new gaps get [`Separator::default_for_gap`].
pub fn derive_separators(previous: &[Separator], gap_count: usize) -> Vec<Separator> {
    (0..gap_count)
        .map(|gap| {
            previous
                .get(gap)
                .copied()
                .unwrap_or_else(|| Separator::default_for_gap(gap))
        })
        .collect()
}

/// Joins `lines` into macro text, using `separators[i]` between line `i` and `i + 1`.
///
/// Missing separators fall back to the per-gap default.
pub fn join_macro<'a, I>(lines: I, separators: &[Separator]) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            let gap = i - 1;
            let sep = separators
                .get(gap)
                .copied()
                .unwrap_or_else(|| Separator::default_for_gap(gap));
            out.push_str(sep.escape());
        }
        out.push_str(line);
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
