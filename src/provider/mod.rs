//! Document provider seam.
//!
//! A provider turns raw file bytes plus a MIME type into a [`Document`].
//! Remote document-understanding services plug in by implementing
//! [`DocumentProvider`]; the crate ships a [`JsonResponseProvider`] that
//! reads responses such a service already returned.
//!
//! # Example
//!
//! ```no_run
//! use untable::provider::ProviderRegistry;
//!
//! fn main() -> untable::Result<()> {
//!     let registry = ProviderRegistry::with_defaults();
//!     let doc = registry.process_file("response.json")?;
//!     println!("{} tables", doc.table_count());
//!     Ok(())
//! }
//! ```

mod json;

pub use json::JsonResponseProvider;

use crate::detect::detect_mime_type_from_bytes;
use crate::error::{Error, Result};
use crate::model::Document;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for document providers.
///
/// Implement this trait to connect a document-understanding service.
pub trait DocumentProvider: Send + Sync {
    /// Get the MIME types this provider accepts.
    ///
    /// MIME types should be lowercase (e.g., `["application/pdf"]`).
    fn supported_mime_types(&self) -> &[&str];

    /// Get the name of this provider.
    fn name(&self) -> &str;

    /// Process raw file content into a document.
    fn process(&self, content: &[u8], mime_type: &str) -> Result<Document>;

    /// Check if this provider accepts the given MIME type.
    fn supports_mime_type(&self, mime_type: &str) -> bool {
        let mime_lower = mime_type.to_lowercase();
        self.supported_mime_types().iter().any(|m| *m == mime_lower)
    }
}

/// Registry for document providers.
///
/// Maps MIME types to providers and dispatches processing requests.
pub struct ProviderRegistry {
    by_mime_type: HashMap<String, Arc<dyn DocumentProvider>>,
    by_name: HashMap<String, Arc<dyn DocumentProvider>>,
}

impl ProviderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            by_mime_type: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with default providers (saved JSON responses).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(JsonResponseProvider::new()));
        registry
    }

    /// Register a provider for all its MIME types.
    ///
    /// A later registration replaces an earlier one for the same MIME type.
    pub fn register(&mut self, provider: Arc<dyn DocumentProvider>) {
        for mime in provider.supported_mime_types() {
            self.by_mime_type
                .insert(mime.to_lowercase(), provider.clone());
        }
        self.by_name.insert(provider.name().to_lowercase(), provider);
    }

    /// Get a provider by MIME type.
    pub fn get_by_mime_type(&self, mime_type: &str) -> Option<Arc<dyn DocumentProvider>> {
        self.by_mime_type.get(&mime_type.to_lowercase()).cloned()
    }

    /// Get a provider by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentProvider>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if a MIME type is supported.
    pub fn supports(&self, mime_type: &str) -> bool {
        self.by_mime_type.contains_key(&mime_type.to_lowercase())
    }

    /// Get all supported MIME types.
    pub fn supported_mime_types(&self) -> Vec<&str> {
        self.by_mime_type.keys().map(|s| s.as_str()).collect()
    }

    /// Process content of a known MIME type.
    pub fn process(&self, content: &[u8], mime_type: &str) -> Result<Document> {
        let provider = self
            .get_by_mime_type(mime_type)
            .ok_or_else(|| Error::UnsupportedMimeType(mime_type.to_string()))?;

        log::debug!(
            "Processing {} bytes of {} with provider '{}'",
            content.len(),
            mime_type,
            provider.name()
        );
        provider.process(content, mime_type)
    }

    /// Process content, detecting its MIME type from the leading bytes.
    pub fn process_bytes(&self, content: &[u8]) -> Result<Document> {
        let mime_type = detect_mime_type_from_bytes(content)?;
        self.process(content, mime_type)
    }

    /// Read and process a file, detecting its MIME type.
    pub fn process_file<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let content = std::fs::read(path)?;
        self.process_bytes(&content)
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
