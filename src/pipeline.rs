//! Orchestration of the classifier and rewriter over a document.

use chrono::Utc;
use log::debug;
use rayon::prelude::*;

use crate::classify::{strip_quote_delimiters, ParagraphClassifier};
use crate::model::{
    Metadata, NormalizedDocument, NormalizedParagraph, Role, StyleSheet, ABNT_STYLES,
};
use crate::rewrite::CitationRewriter;

/// Options for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Whether to process paragraphs in parallel
    pub parallel: bool,
}

impl PipelineOptions {
    /// Create new pipeline options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// The document normalization pipeline.
///
/// Stateless across runs: each paragraph's transformation depends only on
/// its own text, and the compiled patterns are read-only after
/// construction, so one pipeline may serve concurrent documents.
pub struct NormalizationPipeline {
    classifier: ParagraphClassifier,
    rewriter: CitationRewriter,
    options: PipelineOptions,
}

impl NormalizationPipeline {
    /// Create a pipeline with the given options.
    pub fn new(options: PipelineOptions) -> Self {
        Self {
            classifier: ParagraphClassifier::new(),
            rewriter: CitationRewriter::new(),
            options,
        }
    }

    /// Create a pipeline with default options.
    pub fn with_defaults() -> Self {
        Self::new(PipelineOptions::default())
    }

    /// Normalize an ordered sequence of extracted paragraphs.
    ///
    /// The output sequence has the same length and order as the input;
    /// paragraphs are never merged, dropped, or reordered. Input
    /// paragraphs are expected non-empty and trimmed (the extraction
    /// adapter's contract), but stray whitespace is tolerated.
    pub fn normalize(&self, paragraphs: &[String]) -> Vec<NormalizedParagraph> {
        let normalized: Vec<NormalizedParagraph> = if self.options.parallel {
            paragraphs
                .par_iter()
                .enumerate()
                .map(|(index, text)| self.normalize_one(index, text))
                .collect()
        } else {
            paragraphs
                .iter()
                .enumerate()
                .map(|(index, text)| self.normalize_one(index, text))
                .collect()
        };

        debug!("normalized {} paragraphs", normalized.len());
        normalized
    }

    /// Normalize paragraphs into a document with metadata.
    pub fn normalize_document(&self, paragraphs: &[String]) -> NormalizedDocument {
        let paragraphs = self.normalize(paragraphs);
        let metadata = Metadata {
            source_name: None,
            paragraph_count: paragraphs.len(),
            body_count: count_role(&paragraphs, Role::Body),
            quote_count: count_role(&paragraphs, Role::BlockQuote),
            reference_count: count_role(&paragraphs, Role::Reference),
            normalized_at: Some(Utc::now()),
        };
        NormalizedDocument {
            metadata,
            paragraphs,
        }
    }

    /// The constant directive table applied by style renderers.
    ///
    /// Independent of document content, so renderers need no content
    /// inspection of their own.
    pub fn style_sheet(&self) -> &'static StyleSheet {
        &ABNT_STYLES
    }

    fn normalize_one(&self, index: usize, text: &str) -> NormalizedParagraph {
        let trimmed = text.trim();
        let role = self.classifier.classify(trimmed);

        // Quotation marks are redundant once block indentation signals
        // the quotation.
        let body = match role {
            Role::BlockQuote => strip_quote_delimiters(trimmed),
            _ => trimmed,
        };

        NormalizedParagraph {
            index,
            role,
            source: text.to_string(),
            text: self.rewriter.rewrite(body),
        }
    }
}

fn count_role(paragraphs: &[NormalizedParagraph], role: Role) -> usize {
    paragraphs.iter().filter(|p| p.role == role).count()
}
