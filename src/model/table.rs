//! Table types.

use super::{BoundingPoly, Layout, TextAnchor};
use serde::{Deserialize, Serialize};

/// A table detected on a page.
///
/// Rows are not required to have the same number of cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Table geometry
    #[serde(default)]
    pub layout: Layout,

    /// Header rows (more than one = multi-level header)
    #[serde(default)]
    pub header_rows: Vec<TableRow>,

    /// Body rows
    #[serde(default)]
    pub body_rows: Vec<TableRow>,
}

impl Table {
    /// Create a new table with the given bounds and no rows.
    pub fn new(bounding_poly: BoundingPoly) -> Self {
        Self {
            layout: Layout::new(TextAnchor::default(), bounding_poly),
            header_rows: Vec::new(),
            body_rows: Vec::new(),
        }
    }

    /// Add a header row.
    pub fn add_header_row(&mut self, row: TableRow) {
        self.header_rows.push(row);
    }

    /// Add a body row.
    pub fn add_body_row(&mut self, row: TableRow) {
        self.body_rows.push(row);
    }

    /// Y coordinate of the table's top edge (top-left vertex).
    pub fn top_y(&self) -> Option<f32> {
        self.layout.bounding_poly.top_y()
    }

    /// Get the total number of rows.
    pub fn row_count(&self) -> usize {
        self.header_rows.len() + self.body_rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.header_rows.is_empty() && self.body_rows.is_empty()
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Cells in the row
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Create a row whose cells cover the given ranges.
    pub fn from_ranges(ranges: impl IntoIterator<Item = (i64, i64)>) -> Self {
        Self::new(
            ranges
                .into_iter()
                .map(|(start, end)| TableCell::new(TextAnchor::from_range(start, end)))
                .collect(),
        )
    }

    /// Get the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A table cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    /// Cell text span and geometry
    #[serde(default)]
    pub layout: Layout,

    /// Number of rows this cell spans
    #[serde(default)]
    pub row_span: i32,

    /// Number of columns this cell spans
    #[serde(default)]
    pub col_span: i32,
}

impl TableCell {
    /// Create a cell with the given text anchor.
    pub fn new(text_anchor: TextAnchor) -> Self {
        Self {
            layout: Layout::with_anchor(text_anchor),
            row_span: 1,
            col_span: 1,
        }
    }

    /// Get the cell's text anchor.
    pub fn text_anchor(&self) -> &TextAnchor {
        &self.layout.text_anchor
    }
}
