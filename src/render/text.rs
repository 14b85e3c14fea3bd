//! Plain text rendering for normalized documents.

use crate::error::Result;
use crate::model::{NormalizedDocument, Role};

use super::RenderOptions;

/// Convert a normalized document to plain text.
///
/// Emphasis markers are removed; block quotations keep a four-space
/// indent as the textual stand-in for the block indentation directive.
pub fn to_text(doc: &NormalizedDocument, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    if options.include_frontmatter {
        output.push_str(&doc.metadata.to_yaml_frontmatter());
    }

    let body = doc
        .paragraphs
        .iter()
        .map(|p| match p.role {
            Role::BlockQuote => format!("    {}", p.plain_text()),
            _ => p.plain_text(),
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    output.push_str(&body);

    Ok(output.trim_end().to_string())
}
