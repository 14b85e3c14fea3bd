//! Markdown rendering for normalized documents.

use crate::error::Result;
use crate::model::{NormalizedDocument, NormalizedParagraph, Role};
use crate::patterns::{EMPHASIS_CLOSE, EMPHASIS_OPEN};

use super::RenderOptions;

/// Convert a normalized document to Markdown.
pub fn to_markdown(doc: &NormalizedDocument, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Markdown renderer.
///
/// Emphasis marker pairs become `*…*` italic spans, block quotations
/// become `>` blocks, and reference entries are emitted as plain lines,
/// optionally under a configured references heading.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &NormalizedDocument) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&doc.metadata.to_yaml_frontmatter());
        }

        let mut heading_emitted = false;
        for paragraph in &doc.paragraphs {
            if paragraph.role == Role::Reference && !heading_emitted {
                if let Some(ref heading) = self.options.references_heading {
                    output.push_str("## ");
                    output.push_str(heading);
                    output.push_str("\n\n");
                }
                heading_emitted = true;
            }
            self.render_paragraph(&mut output, paragraph);
        }

        Ok(output.trim().to_string())
    }

    fn render_paragraph(&self, output: &mut String, paragraph: &NormalizedParagraph) {
        let text = emphasis_to_markdown(&paragraph.text);
        match paragraph.role {
            Role::BlockQuote => {
                output.push_str("> ");
                output.push_str(&text);
            }
            Role::Body | Role::Reference => output.push_str(&text),
        }
        output.push_str("\n\n");
    }
}

/// Translate emphasis marker pairs into Markdown italics.
fn emphasis_to_markdown(text: &str) -> String {
    text.replace(EMPHASIS_OPEN, "*").replace(EMPHASIS_CLOSE, "*")
}
