//! Error types for the norma library.

use std::io;
use thiserror::Error;

/// Result type alias for norma operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the extraction and rendering boundaries.
///
/// Classification and rewriting are total functions and expose no error
/// states of their own: malformed citations, unmatched Latin expressions,
/// and unclassifiable paragraphs fall through to the defaults.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document container format is not supported.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// Failure while extracting paragraphs from a container.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Error during rendering (text, Markdown, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
