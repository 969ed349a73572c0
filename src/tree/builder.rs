//! Top-down tree assembly
//!
//! `TreeBuilder` keeps a stack of open elements, so a style-resolution pass
//! can emit nodes in document order without tracking parents itself.

use compact_str::CompactString;

use crate::config::TreeConfig;
use crate::error::RenderTreeResult;
use crate::id::NodeId;
use crate::node::{ElementData, TextData};

use super::Tree;

/// Builds a [`Tree`] in document order
#[derive(Debug)]
pub struct TreeBuilder {
    tree: Tree,
    open: Vec<NodeId>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    pub fn with_config(config: TreeConfig) -> Self {
        let tree = Tree::with_config(config);
        let open = vec![tree.root()];
        Self { tree, open }
    }

    /// Node that new children are appended to
    pub fn current(&self) -> NodeId {
        self.open.last().copied().unwrap_or(self.tree.root())
    }

    /// Append an element and make it current
    pub fn open(&mut self, element: ElementData) -> RenderTreeResult<NodeId> {
        let parent = self.current();
        let id = self.tree.create_element(element)?;
        self.tree.attach_child(parent, id)?;
        self.open.push(id);
        Ok(id)
    }

    /// Close the current element, returning it.
    ///
    /// The root is never closed; closing at the root returns `None`.
    pub fn close(&mut self) -> Option<NodeId> {
        if self.open.len() <= 1 {
            log::warn!("tree builder: close() with no open element");
            return None;
        }
        self.open.pop()
    }

    /// Append a text leaf to the current element
    pub fn text(&mut self, text: TextData) -> RenderTreeResult<NodeId> {
        let parent = self.current();
        let id = self.tree.create_text(text)?;
        self.tree.attach_child(parent, id)?;
        Ok(id)
    }

    /// Append a level 1 heading text leaf
    pub fn heading1(&mut self, value: impl Into<CompactString>) -> RenderTreeResult<NodeId> {
        self.text(TextData::heading1(value))
    }

    /// Append a paragraph text leaf
    pub fn paragraph(&mut self, value: impl Into<CompactString>) -> RenderTreeResult<NodeId> {
        self.text(TextData::paragraph(value))
    }

    /// Read access to the tree under construction
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Finish building; any still-open elements are simply left in place
    pub fn finish(self) -> Tree {
        log::debug!("tree builder finished with {} nodes", self.tree.node_count());
        self.tree
    }
}
