//! Citation rewriting and Latin-expression emphasis marking.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::patterns::{self, EMPHASIS_CLOSE, EMPHASIS_OPEN, LATIN_EXPRESSIONS};

/// Canonical "et al." separator, with its leading space.
const CANONICAL_ET_AL: &str = " et al.";

static REWRITER: Lazy<CitationRewriter> = Lazy::new(CitationRewriter::new);

/// Rewrites parenthetical citations and marks Latin bibliographic
/// expressions for emphasis.
pub struct CitationRewriter {
    citation: Regex,
    // (literal search, replacement) pairs per expression and trailing
    // boundary character, applied left to right
    emphasis_map: Vec<(String, String)>,
}

impl CitationRewriter {
    /// Create a new rewriter with compiled patterns.
    pub fn new() -> Self {
        let mut emphasis_map = Vec::with_capacity(LATIN_EXPRESSIONS.len() * 4);
        for expr in LATIN_EXPRESSIONS {
            let marked = format!(" {}{}{}", EMPHASIS_OPEN, expr, EMPHASIS_CLOSE);
            for boundary in [" ", ",", ".", ")"] {
                emphasis_map.push((
                    format!(" {}{}", expr, boundary),
                    format!("{}{}", marked, boundary),
                ));
            }
        }
        Self {
            citation: patterns::citation_pattern(),
            emphasis_map,
        }
    }

    /// Rewrite one paragraph of text.
    ///
    /// Pure and total: identical input yields identical output, and a
    /// paragraph without citations or Latin expressions comes back
    /// unchanged. Malformed parentheticals simply fail to match.
    pub fn rewrite(&self, text: &str) -> String {
        let rewritten = self.rewrite_citations(text);
        self.mark_latin_expressions(&rewritten)
    }

    /// Normalize author casing and separators in parenthetical citations.
    ///
    /// Matches are located against the immutable input and the result is
    /// assembled in a single pass, so offsets never drift across multiple
    /// citations in one paragraph.
    fn rewrite_citations(&self, text: &str) -> String {
        self.citation
            .replace_all(text, |caps: &Captures| {
                let author = &caps[1];
                let separator = normalize_separator(&caps[2]);
                let rest = &caps[3];

                // Parenthetical citations carry initial-capital author
                // names rather than all-caps.
                let author = if author == author.to_uppercase() {
                    title_case(author)
                } else {
                    author.to_string()
                };

                format!("({}{}{})", author, separator, rest)
            })
            .into_owned()
    }

    /// Wrap Latin expressions in emphasis markers.
    ///
    /// An expression counts only when bounded by a leading space and a
    /// trailing space, comma, period, or closing parenthesis; the
    /// boundary character stays outside the closing marker. Wrapped
    /// occurrences lose their leading-space boundary, so a second pass
    /// over already-marked text is a no-op.
    fn mark_latin_expressions(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (needle, replacement) in &self.emphasis_map {
            if result.contains(needle.as_str()) {
                result = result.replace(needle.as_str(), replacement);
            }
        }
        result
    }
}

impl Default for CitationRewriter {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_separator(separator: &str) -> &str {
    if separator.eq_ignore_ascii_case(CANONICAL_ET_AL) {
        CANONICAL_ET_AL
    } else {
        separator
    }
}

/// First letter of each word uppercased, remainder lowercased.
fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Rewrite one paragraph using the shared rewriter instance.
pub fn rewrite(text: &str) -> String {
    REWRITER.rewrite(text)
}
