//! Prelude for common imports.
//!
//! ```
//! use render_tree::prelude::*;
//! ```

// Node types
pub use crate::node::{
    Attrs, ElementData, FontSize, Node, NodeData, NodeKind, NodeState, TextData, TextStyle,
};

// Tree
pub use crate::tree::{Tree, TreeBuilder};

// Identity
pub use crate::id::NodeId;

// Configuration
pub use crate::config::{ContractPolicy, TreeConfig};

// Layout and paint
pub use crate::display::{DisplayList, TextRun};
pub use crate::font::{FontPolicy, ResolvedFont};

// Sharing
pub use crate::shared::SharedTree;

// Render
pub use crate::render::{render_outline, OutlineConfig};

// Error
pub use crate::error::{RenderTreeError, RenderTreeResult};
