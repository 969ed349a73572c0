//! render-tree - Render tree node model with checked variant accessors
//!
//! ## Core Concepts
//!
//! **Closed payload sum type**: every node carries exactly one [`NodeData`]
//! variant (root, element or text). The [`NodeKind`] tag is derived from the
//! payload, so kind and payload can never disagree.
//!
//! **Arena ownership**: a [`Tree`] owns all nodes. Children are owned
//! through the tree in document order; parent links are plain [`NodeId`]s
//! used for navigation only.
//!
//! **Checked accessors**: layout and paint read variant fields through
//! `text_value`, `text_font`, `text_font_size`, `text_bold` and friends,
//! which fail with [`RenderTreeError::WrongVariant`] on the wrong kind.
//!
//! ## Modules
//! - `node`: payload variants and the `Node` type
//! - `accessor`: checked variant accessors on `Node`
//! - `tree`: arena, mutation, traversal, builder, validation
//! - `font`: default font resolution policy for layout
//! - `display`: document-order text runs for paint
//! - `shared`: lock-wrapped tree for multi-writer hosts
//! - `render`: outline dumps for debugging
//!
//! ## Usage
//!
//! ```
//! use render_tree::{ElementData, TextData, TreeBuilder};
//!
//! let mut builder = TreeBuilder::new();
//! builder.open(ElementData::new("body")).unwrap();
//! let hello = builder.text(TextData::new("Hello", "Sans", 14.0, false).unwrap()).unwrap();
//! let tree = builder.finish();
//!
//! assert_eq!(tree.text_value(hello).unwrap(), "Hello");
//! assert_eq!(tree.text_font_size(hello).unwrap(), 14.0);
//! assert!(tree.element_tag(hello).is_err());
//! ```

#[macro_use]
mod macros;

/// Node types: NodeData, NodeKind, Node and payloads
pub mod node;

/// Checked variant accessors
pub mod accessor;

/// Tree arena, traversal and builder
pub mod tree;

/// Node identity
pub mod id;

/// Tree configuration
pub mod config;

/// Font default resolution
pub mod font;

/// Paint-facing display list
pub mod display;

/// Lock-wrapped shared tree
pub mod shared;

/// Outline rendering
pub mod render;

/// Deterministic hashing
pub mod hash;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{
    Attrs, Children, ElementData, FontSize, Node, NodeData, NodeKind, NodeState, TextData,
    TextStyle,
};

// Tree
pub use tree::{Ancestors, BreadthFirst, DepthFirst, Tree, TreeBuilder};

// Identity
pub use id::NodeId;

// Configuration
pub use config::{ContractPolicy, TreeConfig};

// Layout and paint collaborators
pub use display::{DisplayList, TextRun};
pub use font::{FontPolicy, ResolvedFont};

// Sharing
pub use shared::SharedTree;

// Error types
pub use error::{RenderTreeError, RenderTreeResult};

// =============================================================================
// Tests
// =============================================================================
