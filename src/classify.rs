//! Paragraph role classification.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Role;
use crate::patterns::{self, STANDARDS_BODY_PREFIX};

/// Trimmed length above which a quote-delimited paragraph is treated as a
/// block quotation. Proxy for "longer than three lines": the engine sees
/// logical paragraphs, not rendered lines.
pub const BLOCK_QUOTE_MIN_CHARS: usize = 240;

static CLASSIFIER: Lazy<ParagraphClassifier> = Lazy::new(ParagraphClassifier::new);

/// Assigns a role to each paragraph using length, quoting, and prefix
/// heuristics.
pub struct ParagraphClassifier {
    reference_entry: Regex,
}

impl ParagraphClassifier {
    /// Create a new classifier with compiled patterns.
    pub fn new() -> Self {
        Self {
            reference_entry: patterns::reference_entry_pattern(),
        }
    }

    /// Assign a role to one paragraph of text.
    ///
    /// Total and deterministic: every input maps to exactly one role,
    /// and nothing here can fail.
    pub fn classify(&self, text: &str) -> Role {
        let trimmed = text.trim();

        if is_quote_delimited(trimmed) && trimmed.chars().count() > BLOCK_QUOTE_MIN_CHARS {
            return Role::BlockQuote;
        }

        if self.reference_entry.is_match(trimmed) || trimmed.starts_with(STANDARDS_BODY_PREFIX) {
            return Role::Reference;
        }

        Role::Body
    }
}

impl Default for ParagraphClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn is_quote_delimited(trimmed: &str) -> bool {
    trimmed.starts_with('"') && trimmed.ends_with('"')
}

/// Remove the enclosing double quotes from a block quotation.
///
/// Strips exactly one leading and one trailing quote character; the
/// block indentation already signals the quotation visually.
pub fn strip_quote_delimiters(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}

/// Classify one paragraph using the shared classifier instance.
pub fn classify(text: &str) -> Role {
    CLASSIFIER.classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_quote() -> String {
        format!("\"{}\"", "Uma citação direta longa o suficiente. ".repeat(8))
    }

    #[test]
    fn test_classify_body() {
        assert_eq!(classify("This is a normal sentence."), Role::Body);
        assert_eq!(classify("Como aponta Silva (2020), o efeito persiste."), Role::Body);
    }

    #[test]
    fn test_classify_reference() {
        assert_eq!(
            classify("SILVA, J. Título da obra. Editora, 2020."),
            Role::Reference
        );
        assert_eq!(
            classify("ASSOCIAÇÃO BRASILEIRA DE NORMAS TÉCNICAS. NBR 10520."),
            Role::Reference
        );
    }

    #[test]
    fn test_classify_block_quote() {
        let quote = long_quote();
        assert!(quote.chars().count() > BLOCK_QUOTE_MIN_CHARS);
        assert_eq!(classify(&quote), Role::BlockQuote);
    }

    #[test]
    fn test_short_quote_is_body() {
        assert_eq!(classify("\"Uma citação curta.\""), Role::Body);
    }

    #[test]
    fn test_long_unquoted_is_body() {
        let text = "Texto corrido sem aspas. ".repeat(20);
        assert_eq!(classify(&text), Role::Body);
    }

    #[test]
    fn test_quote_check_uses_trimmed_text() {
        let quote = format!("   {}   ", long_quote());
        assert_eq!(classify(&quote), Role::BlockQuote);
    }

    #[test]
    fn test_lowercase_surname_is_not_reference() {
        assert_eq!(classify("Silva, J. Título da obra."), Role::Body);
    }

    #[test]
    fn test_classify_is_total_on_odd_input() {
        assert_eq!(classify(""), Role::Body);
        assert_eq!(classify("   "), Role::Body);
        assert_eq!(classify("\""), Role::Body);
        assert_eq!(classify("()"), Role::Body);
    }

    #[test]
    fn test_strip_quote_delimiters() {
        assert_eq!(strip_quote_delimiters("\"texto\""), "texto");
        // Only the outermost pair is removed.
        assert_eq!(strip_quote_delimiters("\"\"texto\"\""), "\"texto\"");
        assert_eq!(strip_quote_delimiters("sem aspas"), "sem aspas");
    }
}
