//! Constant typographic directives applied by style renderers.
//!
//! The directive table is fixed data, independent of document content.
//! Nothing here is derived or mutated at runtime.

use serde::Serialize;

use super::Role;

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Justified alignment
    Justify,
}

/// Line spacing mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSpacing {
    /// Renderer default
    #[default]
    Default,
    /// Single spacing
    Single,
    /// 1.5 line spacing
    OnePointFive,
}

/// Typographic attributes for one paragraph context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoleStyle {
    /// Font family name
    pub font_family: &'static str,

    /// Point size
    pub size_pt: f32,

    /// Bold face
    pub bold: bool,

    /// Line spacing mode
    pub line_spacing: LineSpacing,

    /// Text alignment
    pub alignment: Alignment,

    /// Left indent in centimeters
    pub left_indent_cm: f32,

    /// First-line indent in centimeters; negative means hanging
    pub first_line_indent_cm: f32,

    /// Spacing before the paragraph in points
    pub space_before_pt: f32,

    /// Spacing after the paragraph in points
    pub space_after_pt: f32,
}

/// Page margin directive in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageMargins {
    pub top_cm: f32,
    pub bottom_cm: f32,
    pub left_cm: f32,
    pub right_cm: f32,
}

/// The full directive table handed to style renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StyleSheet {
    /// Running body text
    pub body: RoleStyle,

    /// Pre-existing level 1 section headings
    pub heading1: RoleStyle,

    /// Pre-existing level 2 section headings
    pub heading2: RoleStyle,

    /// Long direct quotations
    pub block_quote: RoleStyle,

    /// Bibliographic reference entries
    pub reference: RoleStyle,

    /// Page margins
    pub margins: PageMargins,
}

impl StyleSheet {
    /// Directive for a classified paragraph role.
    ///
    /// Headings belong to the renderer (pre-existing section titles) and
    /// are not reachable from a [`Role`].
    pub fn for_role(&self, role: Role) -> &RoleStyle {
        match role {
            Role::Body => &self.body,
            Role::BlockQuote => &self.block_quote,
            Role::Reference => &self.reference,
        }
    }
}

const FONT: &str = "Times New Roman";

/// The ABNT 2023 directive table.
pub const ABNT_STYLES: StyleSheet = StyleSheet {
    body: RoleStyle {
        font_family: FONT,
        size_pt: 12.0,
        bold: false,
        line_spacing: LineSpacing::OnePointFive,
        alignment: Alignment::Justify,
        left_indent_cm: 0.0,
        first_line_indent_cm: 0.0,
        space_before_pt: 0.0,
        space_after_pt: 0.0,
    },
    heading1: RoleStyle {
        font_family: FONT,
        size_pt: 14.0,
        bold: true,
        line_spacing: LineSpacing::Default,
        alignment: Alignment::Center,
        left_indent_cm: 0.0,
        first_line_indent_cm: 0.0,
        space_before_pt: 0.0,
        space_after_pt: 12.0,
    },
    heading2: RoleStyle {
        font_family: FONT,
        size_pt: 12.0,
        bold: true,
        line_spacing: LineSpacing::Default,
        alignment: Alignment::Left,
        left_indent_cm: 0.0,
        first_line_indent_cm: 0.0,
        space_before_pt: 12.0,
        space_after_pt: 6.0,
    },
    block_quote: RoleStyle {
        font_family: FONT,
        size_pt: 10.0,
        bold: false,
        line_spacing: LineSpacing::Single,
        alignment: Alignment::Justify,
        left_indent_cm: 4.0,
        first_line_indent_cm: 0.0,
        space_before_pt: 6.0,
        space_after_pt: 6.0,
    },
    reference: RoleStyle {
        font_family: FONT,
        size_pt: 10.0,
        bold: false,
        line_spacing: LineSpacing::Single,
        alignment: Alignment::Left,
        left_indent_cm: 0.0,
        first_line_indent_cm: -0.75,
        space_before_pt: 0.0,
        space_after_pt: 6.0,
    },
    margins: PageMargins {
        top_cm: 3.0,
        bottom_cm: 2.0,
        left_cm: 3.0,
        right_cm: 2.0,
    },
};
