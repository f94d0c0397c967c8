//! Page-level types.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A single page of a processed document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Page number (1-indexed, 0 if the provider omitted it)
    #[serde(default)]
    pub page_number: u32,

    /// Paragraphs in provider order
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    /// Tables in provider order
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(page_number: u32) -> Self {
        Self {
            page_number,
            paragraphs: Vec::new(),
            tables: Vec::new(),
        }
    }

    /// Add a paragraph to the page.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Add a table to the page.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Check if the page has any tables.
    pub fn has_tables(&self) -> bool {
        !self.tables.is_empty()
    }

    /// Check if the page is empty (no paragraphs and no tables).
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_new() {
        let page = Page::new(3);
        assert_eq!(page.page_number, 3);
        assert!(page.is_empty());
        assert!(!page.has_tables());
    }

    #[test]
    fn test_page_add_table() {
        let mut page = Page::new(1);
        page.add_paragraph(Paragraph::default());
        page.add_table(Table::default());
        assert!(page.has_tables());
        assert!(!page.is_empty());
    }
}
