//! Extraction statistics.

use serde::{Deserialize, Serialize};

/// Statistics collected during table extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of pages processed
    pub page_count: u32,

    /// Number of paragraphs scanned for titles
    pub paragraph_count: u32,

    /// Number of tables extracted
    pub table_count: u32,

    /// Number of body rows emitted as records
    pub row_count: u32,

    /// Tables with no paragraph above them
    pub untitled_tables: u32,

    /// Body rows whose width differs from the header
    pub shape_mismatches: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment page count.
    pub fn add_page(&mut self) {
        self.page_count += 1;
    }

    /// Count a built table.
    pub fn add_table(&mut self, rows: usize, titled: bool, mismatches: usize) {
        self.table_count += 1;
        self.row_count += rows as u32;
        self.shape_mismatches += mismatches as u32;
        if !titled {
            self.untitled_tables += 1;
        }
    }
}
