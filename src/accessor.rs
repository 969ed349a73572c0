//! Checked variant accessors
//!
//! Consumers read payload fields through the generic [`Node`] handle without
//! matching on [`NodeData`](crate::NodeData) themselves. Every accessor is a
//! pure read that returns `WrongVariant` when the node is of another kind;
//! no accessor hands out mutable access to a payload.
//!
//! The same accessors exist on [`Tree`](crate::Tree) keyed by
//! [`NodeId`](crate::NodeId); those also apply the tree's contract policy.

use crate::error::RenderTreeResult;
use crate::node::{ElementData, Node, NodeKind, TextData, TextStyle};

impl Node {
    /// Text payload of a text node
    pub fn text(&self) -> RenderTreeResult<&TextData> {
        self.data
            .as_text()
            .ok_or_else(|| self.wrong_variant(NodeKind::Text))
    }

    /// Element payload of an element node
    pub fn element(&self) -> RenderTreeResult<&ElementData> {
        self.data
            .as_element()
            .ok_or_else(|| self.wrong_variant(NodeKind::Element))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Text
    // ─────────────────────────────────────────────────────────────────────────

    impl_checked_accessor!(
        /// Text content; may be empty
        text_value, text, Text, &str, |t| t.value()
    );

    impl_checked_accessor!(
        /// Font family, `""` meaning inherit
        text_font, text, Text, &str, |t| t.font()
    );

    impl_checked_accessor!(
        /// Font family only if set on the node itself
        text_explicit_font, text, Text, Option<&str>, |t| t.explicit_font()
    );

    impl_checked_accessor!(text_font_size, text, Text, f32, |t| t.font_size());

    impl_checked_accessor!(text_bold, text, Text, bool, |t| t.is_bold());

    // ─────────────────────────────────────────────────────────────────────────
    // Element
    // ─────────────────────────────────────────────────────────────────────────

    impl_checked_accessor!(element_tag, element, Element, &str, |e| e.tag());

    impl_checked_accessor!(element_style, element, Element, &TextStyle, |e| e.style());

    /// Attribute of an element node; `Ok(None)` when the element lacks it
    pub fn element_attr(&self, name: &str) -> RenderTreeResult<Option<&str>> {
        Ok(self.element()?.get_attr(name))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::RenderTreeError;
    use crate::id::NodeId;
    use crate::node::{ElementData, Node, NodeData, NodeKind, TextData};

    fn node(data: NodeData) -> Node {
        let kind = data.kind();
        Node::new(NodeId::new(1, 0), kind, data).unwrap()
    }

    #[test]
    fn test_text_round_trip() {
        let n = node(TextData::new("Hello", "Sans", 14.0, false).unwrap().into());
        assert_eq!(n.text_value().unwrap(), "Hello");
        assert_eq!(n.text_font().unwrap(), "Sans");
        assert_eq!(n.text_font_size().unwrap(), 14.0);
        assert!(!n.text_bold().unwrap());
    }

    #[test]
    fn test_text_accessors_on_element() {
        let n = node(ElementData::new("div").into());
        let expected = RenderTreeError::WrongVariant {
            node: NodeId::new(1, 0),
            expected: NodeKind::Text,
            found: NodeKind::Element,
        };
        assert_eq!(n.text_value().unwrap_err(), expected);
        assert_eq!(n.text_font().unwrap_err(), expected);
        assert_eq!(n.text_font_size().unwrap_err(), expected);
        assert_eq!(n.text_bold().unwrap_err(), expected);
    }

    #[test]
    fn test_element_accessors_on_text_and_root() {
        let text = node(TextData::paragraph("x").into());
        assert!(matches!(
            text.element_tag(),
            Err(RenderTreeError::WrongVariant { found: NodeKind::Text, .. })
        ));
        assert!(text.element_attr("id").is_err());

        let root = node(NodeData::Root);
        assert!(matches!(
            root.text_value(),
            Err(RenderTreeError::WrongVariant { found: NodeKind::Root, .. })
        ));
    }

    #[test]
    fn test_element_accessors() {
        let n = node(ElementData::new("section").attr("id", "intro").bold(true).into());
        assert_eq!(n.element_tag().unwrap(), "section");
        assert_eq!(n.element_attr("id").unwrap(), Some("intro"));
        assert_eq!(n.element_attr("class").unwrap(), None);
        assert_eq!(n.element_style().unwrap().bold, Some(true));
    }
}
