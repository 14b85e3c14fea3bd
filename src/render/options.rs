//! Rendering options and configuration.

/// Options for rendering normalized documents.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Include YAML frontmatter with run metadata
    pub include_frontmatter: bool,

    /// Heading inserted before the first reference entry in Markdown
    /// output, when set
    pub references_heading: Option<String>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Set the heading inserted before the references section.
    pub fn with_references_heading(mut self, heading: impl Into<String>) -> Self {
        self.references_heading = Some(heading.into());
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: false,
            references_heading: None,
        }
    }
}
