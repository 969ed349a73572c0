//! Payload sum type and kind tag
//!
//! `NodeData` is the closed set of payload shapes. `NodeKind` is the tag,
//! always derived from the payload so the two can never disagree.

use std::fmt;

use super::{ElementData, TextData};

// =============================================================================
// NodeKind
// =============================================================================

/// Kind tag of a render tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Tree root; exactly one per tree
    Root,
    /// Box grouping other nodes
    Element,
    /// Styled text leaf
    Text,
}

impl NodeKind {
    /// Lowercase name for diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Element => "element",
            NodeKind::Text => "text",
        }
    }

    /// Whether nodes of this kind may own children
    pub const fn is_container(self) -> bool {
        !matches!(self, NodeKind::Text)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// NodeData - Sum type
// =============================================================================

/// Render tree payload sum type
///
/// Adding a node kind means adding a variant here and a `NodeKind`; every
/// exhaustive match in the crate then points at what else must change.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Root,
    Element(ElementData),
    Text(TextData),
}

impl NodeData {
    /// Kind tag of this payload
    #[inline]
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Root => NodeKind::Root,
            NodeData::Element(_) => NodeKind::Element,
            NodeData::Text(_) => NodeKind::Text,
        }
    }

    /// Check if this is the root payload
    #[inline]
    pub fn is_root(&self) -> bool {
        matches!(self, NodeData::Root)
    }

    // Generates for each variant (element -> Element, etc.):
    //   - is_xxx(&self) -> bool
    //   - as_xxx(&self) -> Option<&XxxData>
    impl_payload_accessors!(element, text);
}

impl From<ElementData> for NodeData {
    fn from(data: ElementData) -> Self {
        NodeData::Element(data)
    }
}

impl From<TextData> for NodeData {
    fn from(data: TextData) -> Self {
        NodeData::Text(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_payload() {
        assert_eq!(NodeData::Root.kind(), NodeKind::Root);
        assert_eq!(NodeData::from(ElementData::new("div")).kind(), NodeKind::Element);
        assert_eq!(NodeData::from(TextData::paragraph("x")).kind(), NodeKind::Text);
    }

    #[test]
    fn test_generated_accessors() {
        let data = NodeData::from(TextData::paragraph("body"));
        assert!(data.is_text());
        assert!(!data.is_element());
        assert_eq!(data.as_text().map(|t| t.value()), Some("body"));
        assert!(data.as_element().is_none());
    }

    #[test]
    fn test_containers() {
        assert!(NodeKind::Root.is_container());
        assert!(NodeKind::Element.is_container());
        assert!(!NodeKind::Text.is_container());
    }
}
