//! Provider for saved document-understanding responses.

use crate::detect::MIME_JSON;
use crate::error::Result;
use crate::model::Document;

use super::DocumentProvider;

/// Reads a provider response previously saved as JSON.
///
/// Accepts the bare document object or the full process response with a
/// top-level `"document"` field.
#[derive(Debug, Clone, Default)]
pub struct JsonResponseProvider {
    _private: (),
}

impl JsonResponseProvider {
    /// Create a new JSON response provider.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentProvider for JsonResponseProvider {
    fn supported_mime_types(&self) -> &[&str] {
        &[MIME_JSON]
    }

    fn name(&self) -> &str {
        "json"
    }

    fn process(&self, content: &[u8], _mime_type: &str) -> Result<Document> {
        let doc = Document::from_json_slice(content)?;
        log::debug!(
            "Loaded document: {} chars, {} pages, {} tables",
            doc.text.chars().count(),
            doc.page_count(),
            doc.table_count()
        );
        Ok(doc)
    }
}
