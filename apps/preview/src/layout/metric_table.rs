//! Per-glyph advance widths for the in-game message font.
//!
//! Widths come from an external definition file (`strlength.txt`), one record per line:
//!
//! ```text
//! // comment
//! A,21.328125
//! ’ 8.671875
//! ```
//!
//! A record is split on its first comma when it has one, otherwise on its first run of
//! whitespace. Records that do not yield a key and a numeric width are skipped. The table
//! is filled once at startup and is read-only afterwards.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

/// Width used for the space character when the table has no entry for it.
pub const DEFAULT_SPACE_WIDTH: f64 = 8.671875;

// ────────────────────────────────────────────────────────────────────────────
// Metric table
// ────────────────────────────────────────────────────────────────────────────

/// Mapping from glyph key to advance width.
///
/// Keys are case- and codepoint-sensitive. Most keys are a single character; the file
/// format allows longer keys, which are stored but only reachable through [`MetricTable::width`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricTable {
    widths: HashMap<String, f64>,
}

impl MetricTable {
    /// A table with no entries. Every lookup falls through to the fallback widths.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses the contents of a metric definition file.
    ///
    /// Never fails: comment lines, blank lines and unparsable records are skipped.
    pub fn parse(source: &str) -> Self {
        let mut widths = HashMap::new();
        let mut skipped = 0usize;

        for (line_no, record) in source.lines().enumerate() {
            let record = record.trim();
            if record.is_empty() || record.starts_with("//") {
                continue;
            }
            match parse_record(record) {
                Some((key, width)) => {
                    widths.insert(key.to_string(), width);
                }
                None => {
                    skipped += 1;
                    debug!(line = line_no + 1, record, "Skipping unparsable metric record");
                }
            }
        }

        if skipped > 0 {
            debug!(skipped, "Metric records skipped while parsing");
        }

        Self { widths }
    }

    /// Width stored for `key`, if any.
    pub fn width(&self, key: &str) -> Option<f64> {
        self.widths.get(key).copied()
    }

    /// Width stored for a single character, if any.
    pub fn glyph_width(&self, ch: char) -> Option<f64> {
        let mut buf = [0u8; 4];
        self.width(ch.encode_utf8(&mut buf))
    }

    /// Width used for unknown non-digit characters: the table's own space width,
    /// or [`DEFAULT_SPACE_WIDTH`] when space is missing.
    pub fn space_width(&self) -> f64 {
        self.glyph_width(' ').unwrap_or(DEFAULT_SPACE_WIDTH)
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Later duplicates overwrite earlier ones.
impl<K: Into<String>> FromIterator<(K, f64)> for MetricTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(entries: I) -> Self {
        Self {
            widths: entries.into_iter().map(|(k, w)| (k.into(), w)).collect(),
        }
    }
}

/// Splits one trimmed, non-comment record into `(key, width)`.
///
/// Only the first two fields are used; anything after the width is ignored.
fn parse_record(record: &str) -> Option<(&str, f64)> {
    let (key, rest) = if record.contains(',') {
        let (key, rest) = record.split_once(',')?;
        (key, rest.split(',').next().unwrap_or_default())
    } else {
        let (key, rest) = record.split_once(char::is_whitespace)?;
        (key, rest.split_whitespace().next().unwrap_or_default())
    };

    let width = rest.trim().parse::<f64>().ok()?;
    Some((key, width))
}

// ────────────────────────────────────────────────────────────────────────────
// Loading
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of reading a metric definition file.
///
/// A failed load is not an error for the host: it continues with an empty table and
/// every measurement degrades to the fallback widths.
#[derive(Debug)]
pub enum MetricLoad {
    Loaded(MetricTable),
    LoadFailed { path: PathBuf, reason: String },
}

impl MetricLoad {
    /// Unwraps the loaded table, or logs the failure and returns an empty table.
    pub fn into_table(self) -> MetricTable {
        match self {
            MetricLoad::Loaded(table) => table,
            MetricLoad::LoadFailed { path, reason } => {
                warn!(
                    path = %path.display(),
                    %reason,
                    "Failed to load metric table, falling back to default widths"
                );
                MetricTable::empty()
            }
        }
    }
}

/// Reads and parses the metric definition file at `path`.
pub fn load_metrics(path: &Path) -> MetricLoad {
    match fs::read_to_string(path) {
        Ok(source) => {
            let table = MetricTable::parse(&source);
            info!(path = %path.display(), entries = table.len(), "Metric table loaded");
            MetricLoad::Loaded(table)
        }
        Err(e) => MetricLoad::LoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
