//! Document-level types.

use super::Page;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A document as returned by the document-understanding provider.
///
/// All text anchors in the document index into [`Document::text`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// MIME type of the source file, if reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Flat text of the whole document
    #[serde(default)]
    pub text: String,

    /// Pages in document order
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new document with the given flat text and no pages.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            mime_type: None,
            text: text.into(),
            pages: Vec::new(),
        }
    }

    /// Parse a document from provider JSON.
    ///
    /// Accepts either the bare document object or a full process response
    /// wrapping it in a `"document"` field.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::Error::Json`] if the JSON is malformed or the
    /// document (wrapped or bare) does not match the expected shape.
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        let mut value: serde_json::Value = serde_json::from_slice(data)?;
        let document = match value.get_mut(RESPONSE_DOCUMENT_FIELD) {
            Some(inner) => serde_json::from_value(inner.take())?,
            None => serde_json::from_value(value)?,
        };
        Ok(document)
    }

    /// Parse a document from a provider JSON string.
    pub fn from_json_str(data: &str) -> Result<Self> {
        Self::from_json_slice(data.as_bytes())
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get the total number of tables across all pages.
    pub fn table_count(&self) -> usize {
        self.pages.iter().map(|p| p.tables.len()).sum()
    }

    /// Get the total number of paragraphs across all pages.
    pub fn paragraph_count(&self) -> usize {
        self.pages.iter().map(|p| p.paragraphs.len()).sum()
    }

    /// Get a page by number (1-indexed position in the document).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Field of a process response that wraps the document.
const RESPONSE_DOCUMENT_FIELD: &str = "document";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new("hello");
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert_eq!(doc.table_count(), 0);
        assert!(doc.get_page(0).is_none());
        assert!(doc.get_page(1).is_none());
    }

    #[test]
    fn test_document_from_bare_json() {
        let json = r#"{
            "mimeType": "application/pdf",
            "text": "Title\n",
            "pages": [{"pageNumber": 1, "paragraphs": [{}], "tables": []}]
        }"#;
        let doc = Document::from_json_str(json).unwrap();
        assert_eq!(doc.mime_type.as_deref(), Some("application/pdf"));
        assert_eq!(doc.text, "Title\n");
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.paragraph_count(), 1);
        assert_eq!(doc.get_page(1).unwrap().page_number, 1);
    }

    #[test]
    fn test_document_from_response_envelope() {
        let json = r#"{"document": {"text": "abc", "pages": [{}, {}]}, "humanReviewStatus": {}}"#;
        let doc = Document::from_json_str(json).unwrap();
        assert_eq!(doc.text, "abc");
        assert_eq!(doc.page_count(), 2);
    }

    #[test]
    fn test_document_corrupt_envelope_is_rejected() {
        let json = r#"{"document": {"text": "A\n", "pages": [{"tables": [{"headerRows": [{"cells": [
            {"layout": {"textAnchor": {"textSegments": [{"startIndex": "abc", "endIndex": "1"}]}}}
        ]}]}]}]}}"#;
        let result = Document::from_json_str(json);
        assert!(matches!(result, Err(crate::Error::Json(_))));
    }

    #[test]
    fn test_document_envelope_must_be_object() {
        let result = Document::from_json_str(r#"{"document": "not a document"}"#);
        assert!(matches!(result, Err(crate::Error::Json(_))));
    }

    #[test]
    fn test_document_invalid_json() {
        let result = Document::from_json_str("[1, 2, 3]");
        assert!(result.is_err());
    }
}
