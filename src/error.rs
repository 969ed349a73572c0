//! Error types for render-tree.
//!
//! Every fallible operation returns a [`RenderTreeError`] to the immediate
//! caller. Nothing is retried internally: all operations are deterministic.

use thiserror::Error;

use crate::id::NodeId;
use crate::node::NodeKind;

/// Errors that can occur while building, mutating or reading a render tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderTreeError {
    /// Payload does not match the declared kind, or carries invalid values
    #[error("invalid payload for {kind} node: {reason}")]
    InvalidPayload {
        /// Kind the caller asked for
        kind: NodeKind,
        /// What was wrong with the payload
        reason: String,
    },

    /// Attaching would make a node its own ancestor
    #[error("attaching {child} under {parent} would create a cycle")]
    CycleDetected {
        /// Intended parent
        parent: NodeId,
        /// Intended child
        child: NodeId,
    },

    /// Node already has a parent and must be detached first
    #[error("{0} is already attached")]
    AlreadyAttached(NodeId),

    /// Node has no parent to detach from
    #[error("{0} is not attached")]
    NotAttached(NodeId),

    /// Variant accessor used on a node of another kind
    #[error("{node} is a {found} node, expected a {expected} node")]
    WrongVariant {
        /// Node that was accessed
        node: NodeId,
        /// Kind the accessor reads
        expected: NodeKind,
        /// Kind the node actually has
        found: NodeKind,
    },

    /// Handle does not refer to a live node of this tree
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// The tree root can never become a child
    #[error("root node {0} cannot be attached or removed")]
    RootNotAttachable(NodeId),

    /// Text nodes are leaves
    #[error("{0} is a text node and cannot have children")]
    LeafParent(NodeId),

    /// Child insertion index past the end of the children list
    #[error("index {index} out of bounds for {parent} with {len} children")]
    IndexOutOfBounds {
        /// Parent node
        parent: NodeId,
        /// Requested position
        index: usize,
        /// Current number of children
        len: usize,
    },

    /// Structural validation found a broken invariant
    #[error("inconsistent tree: {0}")]
    Inconsistent(String),
}

/// Result type alias for render tree operations.
pub type RenderTreeResult<T> = Result<T, RenderTreeError>;

impl RenderTreeError {
    /// Create an invalid payload error with a reason.
    pub fn invalid_payload(kind: NodeKind, reason: impl Into<String>) -> Self {
        Self::InvalidPayload {
            kind,
            reason: reason.into(),
        }
    }

    /// Create an inconsistency error with a message.
    pub fn inconsistent(msg: impl Into<String>) -> Self {
        Self::Inconsistent(msg.into())
    }

    /// Whether this error is a caller contract violation rather than a
    /// rejected structural mutation.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::WrongVariant { .. } | Self::UnknownNode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RenderTreeError::WrongVariant {
            node: NodeId::new(3, 0),
            expected: NodeKind::Text,
            found: NodeKind::Element,
        };
        assert_eq!(err.to_string(), "#3v0 is a element node, expected a text node");

        let err = RenderTreeError::invalid_payload(NodeKind::Text, "font size is negative");
        assert_eq!(err.to_string(), "invalid payload for text node: font size is negative");
    }

    #[test]
    fn test_contract_violation_classification() {
        assert!(RenderTreeError::UnknownNode(NodeId::new(1, 1)).is_contract_violation());
        assert!(!RenderTreeError::NotAttached(NodeId::new(1, 0)).is_contract_violation());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RenderTreeError>();
    }
}
