//! Extraction adapters delivering ordered paragraph strings.
//!
//! One adapter per supported container format. Adapters must deliver
//! non-empty, trimmed paragraphs in document order — the pipeline relies
//! on that contract instead of re-checking it. Unsupported containers are
//! the one condition that surfaces as a typed error.
//!
//! # Example
//!
//! ```no_run
//! use norma::extract::AdapterRegistry;
//! use std::path::Path;
//!
//! fn main() -> norma::Result<()> {
//!     let registry = AdapterRegistry::with_defaults();
//!     let paragraphs = registry.extract(Path::new("tese.txt"))?;
//!     println!("{} paragraphs", paragraphs.len());
//!     Ok(())
//! }
//! ```

mod text;

pub use text::PlainTextAdapter;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Trait for container-format extraction adapters.
///
/// Implement this trait to add support for a new document container.
pub trait ExtractionAdapter: Send + Sync {
    /// Supported file extensions, lowercase without the leading dot
    /// (e.g., `["txt"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this adapter.
    fn name(&self) -> &str;

    /// Extract ordered, non-empty, trimmed paragraphs from a file.
    fn extract(&self, path: &Path) -> Result<Vec<String>>;

    /// Check if this adapter supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry mapping file extensions to extraction adapters.
pub struct AdapterRegistry {
    adapters: HashMap<String, Arc<dyn ExtractionAdapter>>,
    by_name: HashMap<String, Arc<dyn ExtractionAdapter>>,
}

impl AdapterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            adapters: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the default adapters (plain text).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PlainTextAdapter::new()));
        registry
    }

    /// Register an adapter for all its supported extensions.
    pub fn register(&mut self, adapter: Arc<dyn ExtractionAdapter>) {
        for ext in adapter.supported_extensions() {
            self.adapters.insert(ext.to_lowercase(), adapter.clone());
        }
        self.by_name.insert(adapter.name().to_lowercase(), adapter);
    }

    /// Get an adapter by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn ExtractionAdapter>> {
        self.adapters.get(&ext.to_lowercase()).cloned()
    }

    /// Get an adapter by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn ExtractionAdapter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.adapters.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.adapters.keys().map(|s| s.as_str()).collect()
    }

    /// Extract paragraphs from a file using the appropriate adapter.
    pub fn extract(&self, path: &Path) -> Result<Vec<String>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedFormat("file has no extension".into()))?;

        let adapter = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))?;

        adapter.extract(path)
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
