//! Paragraph-level types: roles and normalized paragraphs.

use serde::{Deserialize, Serialize};

use crate::patterns::{EMPHASIS_CLOSE, EMPHASIS_OPEN};

/// The role a paragraph plays in the normalized document.
///
/// Exactly one role per paragraph, assigned before rewriting. The role
/// selects which style directive applies downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Running body text
    #[default]
    Body,

    /// Long direct quotation set off by indentation
    BlockQuote,

    /// Bibliographic reference entry
    Reference,
}

impl Role {
    /// Lowercase name used in summaries and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Body => "body",
            Role::BlockQuote => "block_quote",
            Role::Reference => "reference",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A paragraph after classification and rewriting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedParagraph {
    /// 0-indexed position within the document
    pub index: usize,

    /// Assigned role
    pub role: Role,

    /// Original extracted text
    pub source: String,

    /// Rewritten text, with emphasis markers for italic spans
    pub text: String,
}

impl NormalizedParagraph {
    /// Check if this paragraph is a bibliographic reference.
    pub fn is_reference(&self) -> bool {
        self.role == Role::Reference
    }

    /// Check if this paragraph is a block quotation.
    pub fn is_block_quote(&self) -> bool {
        self.role == Role::BlockQuote
    }

    /// Rewritten text with the emphasis markers removed.
    pub fn plain_text(&self) -> String {
        self.text.replace(EMPHASIS_OPEN, "").replace(EMPHASIS_CLOSE, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(role: Role, text: &str) -> NormalizedParagraph {
        NormalizedParagraph {
            index: 0,
            role,
            source: text.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_role_predicates() {
        assert!(paragraph(Role::Reference, "SILVA, J.").is_reference());
        assert!(paragraph(Role::BlockQuote, "citação").is_block_quote());
        assert!(!paragraph(Role::Body, "texto").is_reference());
    }

    #[test]
    fn test_plain_text_strips_markers() {
        let p = paragraph(Role::Body, "(Silva <i>et al.</i> 2020)");
        assert_eq!(p.plain_text(), "(Silva et al. 2020)");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::BlockQuote.to_string(), "block_quote");
        assert_eq!(Role::default(), Role::Body);
    }
}
