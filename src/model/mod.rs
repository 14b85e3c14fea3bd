//! Normalized document model shared by the pipeline and the renderers.
//!
//! The model is the intermediate representation between paragraph
//! extraction and style rendering: each paragraph carries its assigned
//! role and rewritten text, and the constant style table tells renderers
//! how each role must look.

mod document;
mod paragraph;
mod style;

pub use document::{Metadata, NormalizedDocument};
pub use paragraph::{NormalizedParagraph, Role};
pub use style::{Alignment, LineSpacing, PageMargins, RoleStyle, StyleSheet, ABNT_STYLES};
