//! Font default resolution for layout
//!
//! The node model stores only what the style pass set explicitly. Layout
//! asks a [`FontPolicy`] for the effective font of a node: the node's own
//! values first, then the nearest element style up the parent chain, then
//! the policy defaults.

use compact_str::CompactString;

use crate::error::RenderTreeResult;
use crate::id::NodeId;
use crate::node::{FontSize, NodeData, TextStyle};
use crate::tree::Tree;

/// Default font family for text with no explicit or inherited family
pub const DEFAULT_FONT_FAMILY: &str = "Times New Roman";

/// Fully resolved font of a node
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFont {
    pub family: CompactString,
    pub size: f32,
    pub bold: bool,
}

/// Fallback values used when neither a node nor its ancestors set a field
#[derive(Debug, Clone, PartialEq)]
pub struct FontPolicy {
    pub default_family: CompactString,
    pub default_size: FontSize,
    pub default_bold: bool,
}

impl Default for FontPolicy {
    fn default() -> Self {
        Self {
            default_family: CompactString::from(DEFAULT_FONT_FAMILY),
            default_size: FontSize::PARAGRAPH,
            default_bold: false,
        }
    }
}

impl FontPolicy {
    /// Set the fallback family
    pub fn with_family(mut self, family: impl Into<CompactString>) -> Self {
        self.default_family = family.into();
        self
    }

    /// Set the fallback size
    pub fn with_size(mut self, size: FontSize) -> Self {
        self.default_size = size;
        self
    }

    /// Resolve the effective font of `id`.
    ///
    /// Text nodes always carry their own size and weight, so only the
    /// family is inherited for them.
    pub fn resolve(&self, tree: &Tree, id: NodeId) -> RenderTreeResult<ResolvedFont> {
        let node = tree.node(id)?;

        let mut family = None;
        let mut size = None;
        let mut bold = None;
        match node.data() {
            NodeData::Text(t) => {
                family = t.explicit_font().map(CompactString::from);
                size = Some(t.font_size());
                bold = Some(t.is_bold());
            }
            NodeData::Element(e) => take_style(e.style(), &mut family, &mut size, &mut bold),
            NodeData::Root => {}
        }

        for ancestor in tree.ancestors(id)? {
            if family.is_some() && size.is_some() && bold.is_some() {
                break;
            }
            if let Some(e) = tree.node(ancestor)?.data().as_element() {
                take_style(e.style(), &mut family, &mut size, &mut bold);
            }
        }

        Ok(ResolvedFont {
            family: family.unwrap_or_else(|| self.default_family.clone()),
            size: size.unwrap_or(self.default_size.get()),
            bold: bold.unwrap_or(self.default_bold),
        })
    }
}

/// Fill whichever fields are still unset from `style`
fn take_style(
    style: &TextStyle,
    family: &mut Option<CompactString>,
    size: &mut Option<f32>,
    bold: &mut Option<bool>,
) {
    if family.is_none() {
        *family = style.font.clone();
    }
    if size.is_none() {
        *size = style.font_size.map(FontSize::get);
    }
    if bold.is_none() {
        *bold = style.bold;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{ElementData, TextData};
    use crate::tree::TreeBuilder;

    #[test]
    fn test_defaults_apply() {
        let mut b = TreeBuilder::new();
        let t = b.paragraph("plain").unwrap();
        let tree = b.finish();

        let font = FontPolicy::default().resolve(&tree, t).unwrap();
        assert_eq!(font.family, DEFAULT_FONT_FAMILY);
        assert_eq!(font.size, 16.0);
        assert!(!font.bold);
    }

    #[test]
    fn test_nearest_ancestor_wins() {
        let mut b = TreeBuilder::new();
        b.open(ElementData::new("body").font("Serif").bold(true)).unwrap();
        let section = b.open(ElementData::new("section").font("Sans")).unwrap();
        let t = b.text(TextData::new("x", "", 12.0, false).unwrap()).unwrap();
        let tree = b.finish();

        let font = FontPolicy::default().resolve(&tree, t).unwrap();
        assert_eq!(font.family, "Sans");
        assert_eq!(font.size, 12.0);
        assert!(!font.bold);

        let font = FontPolicy::default().resolve(&tree, section).unwrap();
        assert_eq!(font.family, "Sans");
        assert_eq!(font.size, 16.0);
        assert!(font.bold);
    }

    #[test]
    fn test_explicit_font_beats_inherited() {
        let mut b = TreeBuilder::new();
        b.open(ElementData::new("body").font("Serif").bold(false)).unwrap();
        let t = b.text(TextData::heading1("Title").with_font("Mono")).unwrap();
        let tree = b.finish();

        let font = FontPolicy::default().with_family("Arial").resolve(&tree, t).unwrap();
        assert_eq!(font.family, "Mono");
        assert_eq!(font.size, 32.0);
        assert!(font.bold);
    }

    #[test]
    fn test_plain_text_under_bold_ancestor() {
        let mut b = TreeBuilder::new();
        let strong = b.open(ElementData::new("strong").bold(true)).unwrap();
        let t = b.text(TextData::new("plain", "Sans", 14.0, false).unwrap()).unwrap();
        let tree = b.finish();

        let policy = FontPolicy::default();
        assert!(!policy.resolve(&tree, t).unwrap().bold);
        assert!(policy.resolve(&tree, strong).unwrap().bold);
    }

    #[test]
    fn test_zero_size_is_not_inherit() {
        let mut b = TreeBuilder::new();
        let div = b.open(ElementData::new("div").font_size(0.0).unwrap()).unwrap();
        let tree = b.finish();

        let policy = FontPolicy::default().with_size(FontSize::HEADING1);
        assert_eq!(policy.resolve(&tree, div).unwrap().size, 0.0);
        assert_eq!(policy.resolve(&tree, tree.root()).unwrap().size, 32.0);
    }
}
