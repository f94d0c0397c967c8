//! Cell text extraction for table rows.

use super::anchor::{resolve_text_anchor, FlatText};
use crate::error::Result;
use crate::model::TableRow;

/// A 2-D grid of resolved cell text, one inner `Vec` per row.
pub type Grid = Vec<Vec<String>>;

/// Resolve every cell of every row to text.
///
/// The grid has the same shape as the input: rows keep their own cell
/// counts, so ragged tables stay ragged.
pub fn extract_rows(rows: &[TableRow], text: &FlatText<'_>) -> Result<Grid> {
    rows.iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|cell| resolve_text_anchor(cell.text_anchor(), text))
                .collect::<Result<Vec<_>>>()
        })
        .collect()
}
