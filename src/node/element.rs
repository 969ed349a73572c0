//! Element payload - boxes that group other nodes
//!
//! Elements carry their tag, attributes and the text style they hand down to
//! descendant text. Every style field is optional: an unset field inherits.

use compact_str::CompactString;

use crate::error::RenderTreeResult;

use super::NodeKind;
use super::text::FontSize;

/// Element attributes as ordered key-value pairs
///
/// Attribute lists on render tree boxes are short, so a linear scan beats
/// hashing. They are fixed once the element is built.
pub type Attrs = Vec<(CompactString, CompactString)>;

// =============================================================================
// TextStyle
// =============================================================================

/// Inheritable text style declared on an element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyle {
    pub font: Option<CompactString>,
    pub font_size: Option<FontSize>,
    pub bold: Option<bool>,
}

impl TextStyle {
    /// Style with nothing set
    pub const INHERIT: Self = Self {
        font: None,
        font_size: None,
        bold: None,
    };

    /// Check if every field inherits
    pub fn is_inherit(&self) -> bool {
        self.font.is_none() && self.font_size.is_none() && self.bold.is_none()
    }
}

// =============================================================================
// ElementData
// =============================================================================

/// Payload of an element node
#[derive(Debug, Clone, PartialEq)]
pub struct ElementData {
    pub(crate) tag: CompactString,
    pub(crate) attrs: Attrs,
    pub(crate) style: TextStyle,
}

impl ElementData {
    /// Create an element with no attributes and inherited style
    pub fn new(tag: impl Into<CompactString>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attrs::new(),
            style: TextStyle::INHERIT,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder
    // ─────────────────────────────────────────────────────────────────────────

    /// Add or replace an attribute, keeping its position
    pub fn attr(mut self, name: impl Into<CompactString>, value: impl Into<CompactString>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some(attr) => attr.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Set the font family handed to descendants
    pub fn font(mut self, font: impl Into<CompactString>) -> Self {
        let font = font.into();
        self.style.font = (!font.is_empty()).then_some(font);
        self
    }

    /// Set the font size handed to descendants
    pub fn font_size(mut self, size: f32) -> RenderTreeResult<Self> {
        self.style.font_size = Some(FontSize::new(size, NodeKind::Element)?);
        Ok(self)
    }

    /// Set the weight handed to descendants
    pub fn bold(mut self, bold: bool) -> Self {
        self.style.bold = Some(bold);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// Get attribute value by name
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[inline]
    pub fn style(&self) -> &TextStyle {
        &self.style
    }
}
