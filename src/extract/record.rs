//! Table record materialization: header flattening and row alignment.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Separator between levels of a multi-row header.
pub const HEADER_LEVEL_SEPARATOR: &str = "_";

/// One extracted table with its associated title.
///
/// Serializes as `{"Table Title": ..., "Data": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRecord {
    /// Title taken from the nearest paragraph above the table
    #[serde(rename = "Table Title")]
    pub title: String,

    /// One mapping per body row, keyed by column label
    #[serde(rename = "Data")]
    pub rows: Vec<RecordRow>,
}

impl TableRecord {
    /// Create a record with a title and no rows.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    /// Get the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if no paragraph could be associated as a title.
    pub fn is_untitled(&self) -> bool {
        self.title.is_empty()
    }

    /// Column labels in first-seen order across all rows.
    pub fn column_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for row in &self.rows {
            for (label, _) in row.iter() {
                if !labels.contains(&label) {
                    labels.push(label);
                }
            }
        }
        labels
    }
}

/// A body row keyed by column label, in column order.
///
/// Inserting an existing label overwrites its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordRow {
    entries: IndexMap<String, String>,
}

impl RecordRow {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty row with room for `columns` labels.
    pub fn with_capacity(columns: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(columns),
        }
    }

    /// Insert a value under a label.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(label.into(), value.into());
    }

    /// Get the value for a label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    /// Iterate `(label, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    /// Get the number of columns present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: Into<String>, V: Into<String>> FromIterator<(L, V)> for RecordRow {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut row = Self::with_capacity(iter.size_hint().0);
        for (label, value) in iter {
            row.insert(label, value);
        }
        row
    }
}

/// Flatten header rows into one label per column.
///
/// With several header rows, column `i`'s label joins every level's text
/// at `i` with `_` and trims the result. The label count is the longest
/// header row; a shorter level contributes an empty string.
pub fn column_labels(header: &[Vec<String>]) -> Vec<String> {
    let width = header.iter().map(Vec::len).max().unwrap_or(0);

    (0..width)
        .map(|i| {
            header
                .iter()
                .map(|level| level.get(i).map(String::as_str).unwrap_or(""))
                .collect::<Vec<_>>()
                .join(HEADER_LEVEL_SEPARATOR)
                .trim()
                .to_string()
        })
        .collect()
}

/// Build a record from a header grid, body grid and title.
///
/// Columns align by position. Cells beyond the header width are dropped
/// and missing cells are left out of that row's mapping. Without any header
/// row, columns are labelled by index (`"0"`, `"1"`, ...).
pub fn build_table(header: &[Vec<String>], body: &[Vec<String>], title: &str) -> TableRecord {
    build_table_with_mismatches(header, body, title).0
}

/// Like [`build_table`], also returning how many rows did not match the
/// header width.
pub fn build_table_with_mismatches(
    header: &[Vec<String>],
    body: &[Vec<String>],
    title: &str,
) -> (TableRecord, usize) {
    let labels: Vec<String> = if header.is_empty() {
        let width = body.iter().map(Vec::len).max().unwrap_or(0);
        (0..width).map(|i| i.to_string()).collect()
    } else {
        if header.windows(2).any(|w| w[0].len() != w[1].len()) {
            log::warn!(
                "Table {:?}: header rows have differing widths {:?}",
                title,
                header.iter().map(Vec::len).collect::<Vec<_>>()
            );
        }
        column_labels(header)
    };

    let mut mismatches = 0;
    let rows: Vec<RecordRow> = body
        .iter()
        .enumerate()
        .map(|(index, cells)| {
            if cells.len() != labels.len() {
                mismatches += 1;
                log::warn!(
                    "Table {:?}: body row {} has {} cells, header has {} columns",
                    title,
                    index,
                    cells.len(),
                    labels.len()
                );
            }
            labels
                .iter()
                .zip(cells)
                .map(|(label, value)| (label.as_str(), value.as_str()))
                .collect::<RecordRow>()
        })
        .collect();

    let record = TableRecord {
        title: title.to_string(),
        rows,
    };
    (record, mismatches)
}
