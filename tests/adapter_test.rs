//! Integration tests for the extraction adapter registry.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use norma::error::{Error, Result};
use norma::extract::{AdapterRegistry, ExtractionAdapter, PlainTextAdapter};

/// Mock adapter for testing.
struct MockAdapter {
    extensions: Vec<&'static str>,
    name: &'static str,
}

impl MockAdapter {
    fn new(extensions: Vec<&'static str>, name: &'static str) -> Self {
        Self { extensions, name }
    }
}

impl ExtractionAdapter for MockAdapter {
    fn supported_extensions(&self) -> &[&str] {
        &self.extensions
    }

    fn name(&self) -> &str {
        self.name
    }

    fn extract(&self, _path: &Path) -> Result<Vec<String>> {
        Ok(vec![format!("extracted by {}", self.name)])
    }
}

#[test]
fn test_empty_registry_supports_nothing() {
    let registry = AdapterRegistry::new();
    assert!(!registry.supports("txt"));
    assert!(registry.supported_extensions().is_empty());
}

#[test]
fn test_register_custom_adapter() {
    let mut registry = AdapterRegistry::new();
    registry.register(Arc::new(MockAdapter::new(vec!["odt", "fodt"], "opendocument")));

    assert!(registry.supports("odt"));
    assert!(registry.supports("FODT"));
    assert!(registry.get_by_name("opendocument").is_some());

    let paragraphs = registry.extract(Path::new("document.odt")).unwrap();
    assert_eq!(paragraphs, vec!["extracted by opendocument"]);
}

#[test]
fn test_custom_adapter_takes_over_extension() {
    let mut registry = AdapterRegistry::with_defaults();
    registry.register(Arc::new(MockAdapter::new(vec!["txt"], "mock")));

    let paragraphs = registry.extract(Path::new("document.txt")).unwrap();
    assert_eq!(paragraphs, vec!["extracted by mock"]);
}

#[test]
fn test_unknown_extension_error_names_it() {
    let registry = AdapterRegistry::with_defaults();
    match registry.extract(Path::new("document.gdoc")) {
        Err(Error::UnsupportedFormat(ext)) => assert_eq!(ext, "gdoc"),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
}

#[test]
fn test_plain_text_adapter_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "Primeiro parágrafo.").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "  Segundo parágrafo.  ").unwrap();

    let registry = AdapterRegistry::with_defaults();
    let paragraphs = registry.extract(&path).unwrap();

    assert_eq!(paragraphs, vec!["Primeiro parágrafo.", "Segundo parágrafo."]);
}

#[test]
fn test_plain_text_adapter_missing_file_is_io_error() {
    let adapter = PlainTextAdapter::new();
    let result = adapter.extract(Path::new("/nonexistent/doc.txt"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_supports_extension_is_case_insensitive() {
    let adapter = PlainTextAdapter::new();
    assert!(adapter.supports_extension("txt"));
    assert!(adapter.supports_extension("TXT"));
    assert!(!adapter.supports_extension("pdf"));
}
