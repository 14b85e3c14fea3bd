//! Recognized citation patterns and the fixed Latin abbreviation vocabulary.
//!
//! Constants only; the classifier and rewriter compile their regexes from
//! the pattern sources defined here and keep them read-only afterwards.

use regex::Regex;

/// Latin bibliographic abbreviations rendered in italics.
///
/// Ordered longest-first so no pass can match a shorter expression inside
/// a longer one.
pub const LATIN_EXPRESSIONS: &[&str] = &[
    "loc. cit.",
    "op. cit.",
    "et al.",
    "passim",
    "apud",
    "sic",
    "in",
];

/// Opening marker for an italic span in rewritten text.
///
/// Style renderers translate each marker pair into an actual italic run
/// and remove the markers from visible text.
pub const EMPHASIS_OPEN: &str = "<i>";

/// Closing marker for an italic span in rewritten text.
pub const EMPHASIS_CLOSE: &str = "</i>";

/// Prefix used by the national standards body in its own reference entries.
pub const STANDARDS_BODY_PREFIX: &str = "ASSOCIAÇÃO BRASILEIRA";

/// Parenthetical citation: `(AUTHOR, rest)` or `(AUTHOR et al. rest)`.
///
/// AUTHOR is one or more ASCII uppercase letters, the separator is a comma
/// or the literal "et al." (case-insensitive), and the remainder runs up to
/// the nearest closing parenthesis.
pub(crate) fn citation_pattern() -> Regex {
    Regex::new(r"\(([A-Z]+)(,|\s+(?i:et\s+al\.))(.*?)\)").unwrap()
}

/// Bibliographic entry opening with an all-caps surname, e.g. `SILVA, J.`
pub(crate) fn reference_entry_pattern() -> Regex {
    Regex::new(r"^[A-Z]+,\s+[A-Z]").unwrap()
}
