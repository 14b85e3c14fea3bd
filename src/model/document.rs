//! Document-level types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{NormalizedParagraph, Role};

/// A fully normalized document: ordered paragraphs plus run metadata.
///
/// Cardinality and order of `paragraphs` always match the extracted
/// input sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedDocument {
    /// Metadata about the normalization run
    pub metadata: Metadata,

    /// Paragraphs in original document order
    pub paragraphs: Vec<NormalizedParagraph>,
}

impl NormalizedDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            paragraphs: Vec::new(),
        }
    }

    /// Get the number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Count the paragraphs carrying the given role.
    pub fn count_role(&self, role: Role) -> usize {
        self.paragraphs.iter().filter(|p| p.role == role).count()
    }

    /// Check if the document has any paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Plain text of the whole document, emphasis markers removed.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for NormalizedDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata about a normalization run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Source file name, when the document came from a file
    pub source_name: Option<String>,

    /// Total number of paragraphs
    pub paragraph_count: usize,

    /// Paragraphs classified as body text
    pub body_count: usize,

    /// Paragraphs classified as block quotations
    pub quote_count: usize,

    /// Paragraphs classified as references
    pub reference_count: usize,

    /// When the document was normalized
    pub normalized_at: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        if let Some(ref source) = self.source_name {
            lines.push(format!("source: \"{}\"", escape_yaml(source)));
        }
        lines.push(format!("paragraphs: {}", self.paragraph_count));
        lines.push(format!("body: {}", self.body_count));
        lines.push(format!("block_quotes: {}", self.quote_count));
        lines.push(format!("references: {}", self.reference_count));
        if let Some(ref at) = self.normalized_at {
            lines.push(format!("normalized_at: {}", at.to_rfc3339()));
        }

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
