//! Error types for untable library.

use std::io;
use thiserror::Error;

/// Result type alias for untable operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during table extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The provider response could not be deserialized.
    #[error("Provider response error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input bytes do not match any supported document format.
    #[error("Unknown file format: not a supported document")]
    UnknownFormat,

    /// No provider is registered for the MIME type.
    #[error("Unsupported MIME type: {0}")]
    UnsupportedMimeType(String),

    /// A text anchor points outside the document text.
    ///
    /// The provider's offsets disagree with its own text, so the whole
    /// document is rejected.
    #[error("Text anchor [{start}, {end}) is inconsistent with document text of length {len}")]
    DataIntegrity {
        /// Segment start offset
        start: i64,
        /// Segment end offset
        end: i64,
        /// Document text length in characters
        len: usize,
    },

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// Error during rendering (JSON, Markdown).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Whether this error means the provider data itself is corrupt.
    pub fn is_data_integrity(&self) -> bool {
        matches!(self, Error::DataIntegrity { .. })
    }
}
