//! # norma
//!
//! Rule-based normalization of prose documents to the ABNT 2023 academic
//! style.
//!
//! The engine classifies each paragraph of extracted text — body text,
//! block quotation, or bibliographic reference — rewrites parenthetical
//! citations and Latin bibliographic expressions, and emits the
//! normalized paragraphs together with a constant typographic directive
//! table for downstream style renderers.
//!
//! ## Quick Start
//!
//! ```
//! use norma::{normalize_text, render, RenderOptions};
//!
//! let doc = normalize_text("Como observado (SILVA, 2020), o efeito persiste.");
//! let markdown = render::to_markdown(&doc, &RenderOptions::default()).unwrap();
//! assert!(markdown.contains("(Silva, 2020)"));
//! ```
//!
//! ## Design
//!
//! - **Total core**: `classify` and `rewrite` never fail — malformed
//!   citations and unclassifiable paragraphs fall through to the
//!   defaults (`Body` role, unmodified text).
//! - **Order preservation**: the pipeline never merges, drops, or
//!   reorders paragraphs.
//! - **Fixed styling**: the directive table is constant data, never
//!   derived from document content.

pub mod classify;
pub mod error;
pub mod extract;
pub mod model;
pub mod patterns;
pub mod pipeline;
pub mod render;
pub mod rewrite;

// Re-export commonly used types
pub use classify::{classify, ParagraphClassifier, BLOCK_QUOTE_MIN_CHARS};
pub use error::{Error, Result};
pub use extract::{AdapterRegistry, ExtractionAdapter, PlainTextAdapter};
pub use model::{
    Alignment, LineSpacing, Metadata, NormalizedDocument, NormalizedParagraph, PageMargins, Role,
    RoleStyle, StyleSheet, ABNT_STYLES,
};
pub use pipeline::{NormalizationPipeline, PipelineOptions};
pub use render::{JsonFormat, RenderOptions};
pub use rewrite::{rewrite, CitationRewriter};

use std::path::Path;

/// Normalize raw text into a document.
///
/// Splits the text into paragraphs (one per non-blank line) and runs the
/// full pipeline. Total: any input yields a document.
pub fn normalize_text(text: &str) -> NormalizedDocument {
    let adapter = PlainTextAdapter::new();
    let paragraphs = adapter.extract_str(text);
    NormalizationPipeline::with_defaults().normalize_document(&paragraphs)
}

/// Normalize a document file.
///
/// # Example
///
/// ```no_run
/// use norma::normalize_file;
///
/// let doc = normalize_file("tese.txt").unwrap();
/// println!("{} paragraphs", doc.paragraph_count());
/// ```
pub fn normalize_file<P: AsRef<Path>>(path: P) -> Result<NormalizedDocument> {
    normalize_file_with_options(path, PipelineOptions::default())
}

/// Normalize a document file with custom pipeline options.
pub fn normalize_file_with_options<P: AsRef<Path>>(
    path: P,
    options: PipelineOptions,
) -> Result<NormalizedDocument> {
    let path = path.as_ref();
    let registry = AdapterRegistry::with_defaults();
    let paragraphs = registry.extract(path)?;

    let mut doc = NormalizationPipeline::new(options).normalize_document(&paragraphs);
    doc.metadata.source_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(String::from);
    Ok(doc)
}

/// Builder for normalizing and rendering documents.
///
/// # Example
///
/// ```no_run
/// use norma::Norma;
///
/// let markdown = Norma::new()
///     .with_frontmatter()
///     .with_references_heading("Referências")
///     .normalize("tese.txt")?
///     .to_markdown()?;
/// # Ok::<(), norma::Error>(())
/// ```
pub struct Norma {
    pipeline_options: PipelineOptions,
    render_options: RenderOptions,
}

impl Norma {
    /// Create a new Norma builder.
    pub fn new() -> Self {
        Self {
            pipeline_options: PipelineOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Disable parallel paragraph processing.
    pub fn sequential(mut self) -> Self {
        self.pipeline_options = self.pipeline_options.sequential();
        self
    }

    /// Enable frontmatter in output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Set the heading inserted before the references section.
    pub fn with_references_heading(mut self, heading: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_references_heading(heading);
        self
    }

    /// Normalize a document file and return a result wrapper.
    pub fn normalize<P: AsRef<Path>>(self, path: P) -> Result<NormaResult> {
        let document = normalize_file_with_options(path, self.pipeline_options)?;
        Ok(NormaResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Normalize already-loaded text.
    pub fn normalize_text(self, text: &str) -> NormaResult {
        let adapter = PlainTextAdapter::new();
        let paragraphs = adapter.extract_str(text);
        let document =
            NormalizationPipeline::new(self.pipeline_options).normalize_document(&paragraphs);
        NormaResult {
            document,
            render_options: self.render_options,
        }
    }
}

impl Default for Norma {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of normalizing a document.
pub struct NormaResult {
    /// The normalized document
    pub document: NormalizedDocument,
    /// Render options to use
    render_options: RenderOptions,
}

impl NormaResult {
    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the normalized document.
    pub fn document(&self) -> &NormalizedDocument {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norma_builder() {
        let norma = Norma::new()
            .sequential()
            .with_frontmatter()
            .with_references_heading("Referências");

        assert!(!norma.pipeline_options.parallel);
        assert!(norma.render_options.include_frontmatter);
        assert_eq!(
            norma.render_options.references_heading.as_deref(),
            Some("Referências")
        );
    }

    #[test]
    fn test_norma_builder_default() {
        let norma = Norma::default();
        assert!(norma.pipeline_options.parallel);
        assert!(!norma.render_options.include_frontmatter);
    }

    #[test]
    fn test_normalize_text_end_to_end() {
        let doc = normalize_text("Como observado (SILVA, 2020).\nSILVA, J. Título. Editora, 2020.");

        assert_eq!(doc.paragraph_count(), 2);
        assert_eq!(doc.paragraphs[0].text, "Como observado (Silva, 2020).");
        assert_eq!(doc.paragraphs[1].role, Role::Reference);
        assert_eq!(doc.metadata.reference_count, 1);
    }

    #[test]
    fn test_normalize_text_empty_input() {
        let doc = normalize_text("");
        assert!(doc.is_empty());
        assert_eq!(doc.metadata.paragraph_count, 0);
    }

    #[test]
    fn test_normalize_file_unsupported_extension() {
        let result = normalize_file("document.docx");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_norma_result_renders() {
        let result = Norma::new().normalize_text("Texto com (SILVA et al. 2020) citado.");

        let text = result.to_text().unwrap();
        assert!(text.contains("(Silva et al. 2020)"));

        let markdown = result.to_markdown().unwrap();
        assert!(markdown.contains("(Silva *et al.* 2020)"));

        let json = result.to_json(JsonFormat::Compact).unwrap();
        assert!(json.contains("et al."));
    }
}
