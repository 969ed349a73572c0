//! Node types for the render tree.
//!
//! A [`Node`] is one position in the tree: a [`NodeData`] payload plus
//! structural links. Nodes live in the [`Tree`](crate::Tree) arena and refer
//! to each other by [`NodeId`]; the parent link is a plain index used for
//! navigation only, children are owned through the tree.

mod element;
mod text;
mod types;

pub use element::{Attrs, ElementData, TextStyle};
pub use text::{FontSize, TextData};
pub use types::{NodeData, NodeKind};

use smallvec::SmallVec;

use crate::error::{RenderTreeError, RenderTreeResult};
use crate::id::NodeId;

/// Type alias for children collection.
pub type Children = SmallVec<[NodeId; 4]>;

/// Structural state of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Created or detached; has no parent
    Unattached,
    /// Owned by a parent's children list
    Attached,
}

// =============================================================================
// Node
// =============================================================================

/// Render tree node
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) data: NodeData,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Children,
}

impl Node {
    /// Build a detached node, checking that the payload matches `kind`.
    pub(crate) fn new(id: NodeId, kind: NodeKind, data: NodeData) -> RenderTreeResult<Self> {
        if data.kind() != kind {
            return Err(RenderTreeError::invalid_payload(
                kind,
                format!("got a {} payload", data.kind()),
            ));
        }
        Ok(Self {
            id,
            data,
            parent: None,
            children: Children::new(),
        })
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }

    /// Payload, read-only
    #[inline]
    pub fn data(&self) -> &NodeData {
        &self.data
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in document order
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline]
    pub fn state(&self) -> NodeState {
        if self.parent.is_some() {
            NodeState::Attached
        } else {
            NodeState::Unattached
        }
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        self.data.is_text()
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        self.data.is_element()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.data.is_root()
    }

    /// Check if the node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn wrong_variant(&self, expected: NodeKind) -> RenderTreeError {
        RenderTreeError::WrongVariant {
            node: self.id,
            expected,
            found: self.kind(),
        }
    }
}
