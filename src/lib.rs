//! # untable
//!
//! Titled table extraction from document-understanding responses.
//!
//! A document-understanding service returns a document as one flat text
//! plus pages of paragraphs and tables that point into that text through
//! offset anchors. This library resolves those anchors, gives each table
//! the text of the nearest paragraph above it as a title, and turns every
//! table into records keyed by (flattened) column headers.
//!
//! ## Quick Start
//!
//! ```no_run
//! use untable::{load_document, extract_tables, render};
//!
//! fn main() -> untable::Result<()> {
//!     // Load a saved provider response
//!     let doc = load_document("response.json")?;
//!
//!     // Extract titled tables
//!     let records = extract_tables(&doc)?;
//!
//!     // Persist as JSON
//!     render::write_json("table_data.json", &records, render::JsonFormat::Pretty)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Offset resolution**: multi-segment text anchors, character offsets
//! - **Title association**: nearest preceding paragraph on the same page
//! - **Header flattening**: multi-row headers joined with `_`
//! - **Output formats**: JSON (`"Table Title"` / `"Data"`), Markdown
//! - **Parallel processing**: Uses Rayon for multi-page documents

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod provider;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_mime_type_from_bytes, detect_mime_type_from_path};
pub use error::{Error, Result};
pub use extract::{
    associate_titles, build_table, document_titles, extract_rows, extract_tables,
    extract_tables_with_options, resolve_text_anchor, ExtractOptions, Extraction,
    ExtractionStats, FlatText, PageSelection, RecordRow, TableExtractor, TableRecord,
};
pub use model::{
    BoundingPoly, Document, Layout, NormalizedVertex, Page, Paragraph, Table, TableCell,
    TableRow, TextAnchor, TextSegment,
};
pub use provider::{DocumentProvider, JsonResponseProvider, ProviderRegistry};
pub use render::JsonFormat;

use std::path::Path;

/// Load a document from a file using the default providers.
///
/// # Example
///
/// ```no_run
/// use untable::load_document;
///
/// let doc = load_document("response.json").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    ProviderRegistry::with_defaults().process_file(path)
}

/// Load a document from bytes using the default providers.
pub fn load_document_bytes(data: &[u8]) -> Result<Document> {
    ProviderRegistry::with_defaults().process_bytes(data)
}

/// Load a document from a file without blocking the async runtime.
#[cfg(feature = "async")]
pub async fn load_document_async<P: AsRef<Path>>(path: P) -> Result<Document> {
    let content = tokio::fs::read(path).await?;
    load_document_bytes(&content)
}

/// Extract titled tables from a file.
///
/// # Example
///
/// ```no_run
/// use untable::extract_file;
///
/// for record in extract_file("response.json").unwrap() {
///     println!("{}: {} rows", record.title, record.row_count());
/// }
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<Vec<TableRecord>> {
    let doc = load_document(path)?;
    extract_tables(&doc)
}

/// Extract tables from a file and render them as JSON.
///
/// # Example
///
/// ```no_run
/// use untable::{to_json, JsonFormat};
///
/// let json = to_json("response.json", JsonFormat::Pretty).unwrap();
/// std::fs::write("table_data.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let records = extract_file(path)?;
    render::to_json(&records, format)
}

/// Extract tables from a file and render them as Markdown.
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let records = extract_file(path)?;
    Ok(render::to_markdown(&records))
}

/// Builder for loading documents and extracting tables.
///
/// # Example
///
/// ```no_run
/// use untable::{Untable, JsonFormat};
///
/// let json = Untable::new()
///     .sequential()
///     .with_pages(untable::PageSelection::Range(1..=3))
///     .load("response.json")?
///     .to_json(JsonFormat::Compact)?;
/// # Ok::<(), untable::Error>(())
/// ```
pub struct Untable {
    extract_options: ExtractOptions,
    registry: ProviderRegistry,
}

impl Untable {
    /// Create a new builder with the default providers.
    pub fn new() -> Self {
        Self {
            extract_options: ExtractOptions::default(),
            registry: ProviderRegistry::with_defaults(),
        }
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.extract_options = self.extract_options.sequential();
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.extract_options = self.extract_options.with_pages(pages);
        self
    }

    /// Register an additional document provider.
    pub fn with_provider(mut self, provider: std::sync::Arc<dyn DocumentProvider>) -> Self {
        self.registry.register(provider);
        self
    }

    /// Load a file and extract its tables.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<UntableResult> {
        let document = self.registry.process_file(path)?;
        self.extract(document)
    }

    /// Load bytes and extract their tables.
    pub fn load_bytes(self, data: &[u8]) -> Result<UntableResult> {
        let document = self.registry.process_bytes(data)?;
        self.extract(document)
    }

    /// Extract tables from an already loaded document.
    pub fn extract(self, document: Document) -> Result<UntableResult> {
        let extraction = TableExtractor::with_options(self.extract_options).extract(&document)?;
        Ok(UntableResult {
            document,
            extraction,
        })
    }
}

impl Default for Untable {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of loading a document and extracting its tables.
pub struct UntableResult {
    /// The loaded document
    pub document: Document,
    /// Extracted records and statistics
    extraction: Extraction,
}

impl UntableResult {
    /// Convert the records to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.extraction.records, format)
    }

    /// Convert the records to Markdown.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.extraction.records)
    }

    /// Write the records as JSON to a file.
    pub fn write_json<P: AsRef<Path>>(&self, path: P, format: JsonFormat) -> Result<()> {
        render::write_json(path, &self.extraction.records, format)
    }

    /// Get the extracted records.
    pub fn records(&self) -> &[TableRecord] {
        &self.extraction.records
    }

    /// Get the full extraction, including source locations.
    pub fn extraction(&self) -> &Extraction {
        &self.extraction
    }

    /// Get extraction statistics.
    pub fn stats(&self) -> &ExtractionStats {
        &self.extraction.stats
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "document": {
            "text": "Sales\nRegion Total\nNorth 10\n",
            "pages": [{
                "pageNumber": 1,
                "paragraphs": [{"layout": {
                    "textAnchor": {"textSegments": [{"endIndex": "5"}]},
                    "boundingPoly": {"normalizedVertices": [
                        {"x": 0.1, "y": 0.1}, {"x": 0.5, "y": 0.1},
                        {"x": 0.5, "y": 0.15}, {"x": 0.1, "y": 0.15}
                    ]}
                }}],
                "tables": [{
                    "layout": {"boundingPoly": {"normalizedVertices": [
                        {"x": 0.1, "y": 0.2}, {"x": 0.9, "y": 0.2},
                        {"x": 0.9, "y": 0.4}, {"x": 0.1, "y": 0.4}
                    ]}},
                    "headerRows": [{"cells": [
                        {"layout": {"textAnchor": {"textSegments": [{"startIndex": "6", "endIndex": "12"}]}}},
                        {"layout": {"textAnchor": {"textSegments": [{"startIndex": "13", "endIndex": "18"}]}}}
                    ]}],
                    "bodyRows": [{"cells": [
                        {"layout": {"textAnchor": {"textSegments": [{"startIndex": "19", "endIndex": "24"}]}}},
                        {"layout": {"textAnchor": {"textSegments": [{"startIndex": "25", "endIndex": "27"}]}}}
                    ]}]
                }]
            }]
        }
    }"#;

    #[test]
    fn test_untable_builder_default() {
        let builder = Untable::default();
        assert!(builder.extract_options.parallel);
        assert!(builder.registry.supports("application/json"));
    }

    #[test]
    fn test_untable_builder_chained() {
        let builder = Untable::new()
            .sequential()
            .with_pages(PageSelection::Range(1..=5));
        assert!(!builder.extract_options.parallel);
        assert_eq!(builder.extract_options.pages, PageSelection::Range(1..=5));
    }

    #[test]
    fn test_untable_load_bytes() {
        let result = Untable::new().load_bytes(RESPONSE.as_bytes()).unwrap();
        assert_eq!(result.records().len(), 1);
        assert_eq!(result.records()[0].title, "Sales");
        assert_eq!(result.records()[0].rows[0].get("Region"), Some("North"));
        assert_eq!(result.records()[0].rows[0].get("Total"), Some("10"));
        assert_eq!(result.stats().table_count, 1);
        assert_eq!(result.document().page_count(), 1);
    }

    #[test]
    fn test_untable_to_json() {
        let result = Untable::new().load_bytes(RESPONSE.as_bytes()).unwrap();
        let json = result.to_json(JsonFormat::Compact).unwrap();
        assert_eq!(
            json,
            r#"[{"Table Title":"Sales","Data":[{"Region":"North","Total":"10"}]}]"#
        );
    }

    #[test]
    fn test_untable_load_bytes_unsupported() {
        let result = Untable::new().load_bytes(b"%PDF-1.7\n");
        assert!(matches!(result, Err(Error::UnsupportedMimeType(_))));
    }

    #[test]
    fn test_load_document_bytes_empty() {
        assert!(matches!(
            load_document_bytes(b""),
            Err(Error::UnknownFormat)
        ));
    }
}
