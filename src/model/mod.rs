//! Document model types for provider responses.
//!
//! This module mirrors the read-only shape returned by a remote
//! document-understanding service: a flat document text plus pages of
//! paragraphs and tables, each carrying normalized geometry and text
//! anchors into the flat text. Only the fields the extraction pipeline
//! reads are modelled; everything else in a response is ignored.

mod document;
mod layout;
mod page;
mod paragraph;
mod table;

pub use document::Document;
pub use layout::{BoundingPoly, Layout, NormalizedVertex, TextAnchor, TextSegment};
pub use page::Page;
pub use paragraph::Paragraph;
pub use table::{Table, TableCell, TableRow};
