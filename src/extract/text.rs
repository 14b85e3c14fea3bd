//! Plain-text extraction adapter.

use std::fs;
use std::path::Path;

use log::debug;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;

use super::ExtractionAdapter;

/// Adapter for `.txt` files.
///
/// Reads the file as UTF-8 (invalid sequences replaced), applies NFC
/// normalization, splits on newlines, and drops blank lines, so the
/// pipeline receives non-empty trimmed paragraphs in order.
pub struct PlainTextAdapter;

impl PlainTextAdapter {
    /// Create a new plain-text adapter.
    pub fn new() -> Self {
        Self
    }

    /// Split already-loaded text into ordered paragraphs.
    pub fn extract_str(&self, text: &str) -> Vec<String> {
        let normalized: String = text.nfc().collect();
        normalized
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for PlainTextAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionAdapter for PlainTextAdapter {
    fn supported_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn extract(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes);
        let paragraphs = self.extract_str(&text);
        debug!(
            "extracted {} paragraphs from {}",
            paragraphs.len(),
            path.display()
        );
        Ok(paragraphs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_str_splits_and_trims() {
        let adapter = PlainTextAdapter::new();
        let paragraphs = adapter.extract_str("  Primeiro.  \n\n\nSegundo.\n   \nTerceiro.");

        assert_eq!(paragraphs, vec!["Primeiro.", "Segundo.", "Terceiro."]);
    }

    #[test]
    fn test_extract_str_applies_nfc() {
        let adapter = PlainTextAdapter::new();
        // "ç" as combining cedilla normalizes to the precomposed form.
        let paragraphs = adapter.extract_str("cita\u{0063}\u{0327}\u{00e3}o");
        assert_eq!(paragraphs, vec!["citação"]);
    }

    #[test]
    fn test_extract_str_empty_input() {
        let adapter = PlainTextAdapter::new();
        assert!(adapter.extract_str("").is_empty());
        assert!(adapter.extract_str("\n\n  \n").is_empty());
    }

    #[test]
    fn test_crlf_input() {
        let adapter = PlainTextAdapter::new();
        let paragraphs = adapter.extract_str("Primeiro.\r\nSegundo.\r\n");
        assert_eq!(paragraphs, vec!["Primeiro.", "Segundo."]);
    }
}
