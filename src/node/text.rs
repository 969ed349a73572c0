//! Text payload
//!
//! Styled text runs in the render tree. Text nodes are always leaves.

use compact_str::CompactString;

use crate::error::{RenderTreeError, RenderTreeResult};

use super::NodeKind;

// =============================================================================
// FontSize
// =============================================================================

/// Font size in points: finite and non-negative
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct FontSize(f32);

impl FontSize {
    /// Heading level 1 size
    pub const HEADING1: Self = Self(32.0);
    /// Body paragraph size
    pub const PARAGRAPH: Self = Self(16.0);

    /// Validate a raw size.
    ///
    /// `kind` is only used to label the error.
    pub fn new(size: f32, kind: NodeKind) -> RenderTreeResult<Self> {
        if !size.is_finite() {
            return Err(RenderTreeError::invalid_payload(
                kind,
                format!("font size {size} is not finite"),
            ));
        }
        if size < 0.0 {
            return Err(RenderTreeError::invalid_payload(
                kind,
                format!("font size {size} is negative"),
            ));
        }
        Ok(Self(size))
    }

    /// Raw value
    #[inline]
    pub const fn get(self) -> f32 {
        self.0
    }
}

// =============================================================================
// TextData
// =============================================================================

/// Payload of a text node
#[derive(Debug, Clone, PartialEq)]
pub struct TextData {
    /// Text content; empty means no content
    pub(crate) value: CompactString,
    /// Explicit font family; `None` defers to the layout font policy
    pub(crate) font: Option<CompactString>,
    pub(crate) font_size: FontSize,
    pub(crate) is_bold: bool,
}

impl TextData {
    /// Create a text payload.
    ///
    /// An empty `font` is stored as "no explicit font".
    pub fn new(
        value: impl Into<CompactString>,
        font: impl Into<CompactString>,
        font_size: f32,
        is_bold: bool,
    ) -> RenderTreeResult<Self> {
        let font = font.into();
        Ok(Self {
            value: value.into(),
            font: (!font.is_empty()).then_some(font),
            font_size: FontSize::new(font_size, NodeKind::Text)?,
            is_bold,
        })
    }

    /// Heading level 1 text: 32pt bold, inherited font
    pub fn heading1(value: impl Into<CompactString>) -> Self {
        Self {
            value: value.into(),
            font: None,
            font_size: FontSize::HEADING1,
            is_bold: true,
        }
    }

    /// Paragraph text: 16pt regular, inherited font
    pub fn paragraph(value: impl Into<CompactString>) -> Self {
        Self {
            value: value.into(),
            font: None,
            font_size: FontSize::PARAGRAPH,
            is_bold: false,
        }
    }

    /// Replace the font family (builder style)
    pub fn with_font(mut self, font: impl Into<CompactString>) -> Self {
        let font = font.into();
        self.font = (!font.is_empty()).then_some(font);
        self
    }

    /// Text content
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Font family name, or `""` when inherited
    #[inline]
    pub fn font(&self) -> &str {
        self.font.as_deref().unwrap_or_default()
    }

    /// Font family name only when set explicitly
    #[inline]
    pub fn explicit_font(&self) -> Option<&str> {
        self.font.as_deref()
    }

    #[inline]
    pub fn font_size(&self) -> f32 {
        self.font_size.get()
    }

    #[inline]
    pub fn is_bold(&self) -> bool {
        self.is_bold
    }

    /// Check if text content is empty
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Check if text is only whitespace
    pub fn is_whitespace(&self) -> bool {
        self.value.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_payload() {
        let text = TextData::new("Hello", "Sans", 14.0, false).unwrap();
        assert_eq!(text.value(), "Hello");
        assert_eq!(text.font(), "Sans");
        assert_eq!(text.explicit_font(), Some("Sans"));
        assert_eq!(text.font_size(), 14.0);
        assert!(!text.is_bold());
    }

    #[test]
    fn test_empty_font_means_inherit() {
        let text = TextData::new("", "", 0.0, true).unwrap();
        assert!(text.is_empty());
        assert_eq!(text.font(), "");
        assert_eq!(text.explicit_font(), None);
        assert_eq!(text.font_size(), 0.0);
    }

    #[test]
    fn test_rejects_bad_font_size() {
        assert!(matches!(
            TextData::new("x", "Sans", -1.0, false),
            Err(RenderTreeError::InvalidPayload { kind: NodeKind::Text, .. })
        ));
        assert!(TextData::new("x", "Sans", f32::NAN, false).is_err());
        assert!(TextData::new("x", "Sans", f32::INFINITY, false).is_err());
    }

    #[test]
    fn test_presets() {
        let h1 = TextData::heading1("Title");
        assert_eq!(h1.font_size(), 32.0);
        assert!(h1.is_bold());

        let p = TextData::paragraph("  ").with_font("Times New Roman");
        assert_eq!(p.font_size(), 16.0);
        assert_eq!(p.font(), "Times New Roman");
        assert!(p.is_whitespace());
    }
}
