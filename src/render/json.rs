//! JSON rendering for normalized documents.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{NormalizedDocument, StyleSheet, ABNT_STYLES};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialized payload: the document plus the constant directive table, so
/// a downstream container writer needs no content inspection of its own.
#[derive(Serialize)]
struct JsonPayload<'a> {
    document: &'a NormalizedDocument,
    styles: &'static StyleSheet,
}

/// Convert a normalized document to JSON.
pub fn to_json(doc: &NormalizedDocument, format: JsonFormat) -> Result<String> {
    let payload = JsonPayload {
        document: doc,
        styles: &ABNT_STYLES,
    };

    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&payload),
        JsonFormat::Compact => serde_json::to_string(&payload),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
