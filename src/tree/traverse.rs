//! Lazy traversal iterators
//!
//! Each iterator owns its own cursor (a stack or a queue) and only borrows
//! the tree, so any number of traversals can run side by side.

use std::collections::VecDeque;

use crate::error::RenderTreeResult;
use crate::id::NodeId;
use crate::node::Node;

use super::Tree;

impl Tree {
    /// Pre-order walk of the subtree at `start`: node before children,
    /// children in stored order
    pub fn traverse_depth_first(&self, start: NodeId) -> RenderTreeResult<DepthFirst<'_>> {
        self.node(start)?;
        Ok(DepthFirst {
            tree: self,
            stack: vec![start],
        })
    }

    /// Level-order walk of the subtree at `start`
    pub fn traverse_breadth_first(&self, start: NodeId) -> RenderTreeResult<BreadthFirst<'_>> {
        self.node(start)?;
        Ok(BreadthFirst {
            tree: self,
            queue: VecDeque::from([start]),
        })
    }

    /// Pre-order walk of the whole attached tree
    pub fn iter(&self) -> DepthFirst<'_> {
        DepthFirst {
            tree: self,
            stack: vec![self.root],
        }
    }
}

// =============================================================================
// DepthFirst
// =============================================================================

/// Depth-first (pre-order) iterator over nodes
#[derive(Debug, Clone)]
pub struct DepthFirst<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.get(self.stack.pop()?)?;
        // Push children in reverse order so they're visited left-to-right
        self.stack.extend(node.children.iter().rev().copied());
        Some(node)
    }
}

// =============================================================================
// BreadthFirst
// =============================================================================

/// Breadth-first (level-order) iterator over nodes
#[derive(Debug, Clone)]
pub struct BreadthFirst<'a> {
    tree: &'a Tree,
    queue: VecDeque<NodeId>,
}

impl<'a> Iterator for BreadthFirst<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.get(self.queue.pop_front()?)?;
        self.queue.extend(node.children.iter().copied());
        Some(node)
    }
}

// =============================================================================
// Ancestors
// =============================================================================

/// Walks parent links upward, nearest first
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl<'a> Ancestors<'a> {
    pub(super) fn new(tree: &'a Tree, start: Option<NodeId>) -> Self {
        Self { tree, next: start }
    }
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.tree.get(id).and_then(Node::parent);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use crate::node::{ElementData, TextData};
    use crate::tree::TreeBuilder;

    use super::*;

    //   root
    //   ├── body
    //   │   ├── h1 ── "Title"
    //   │   └── "intro"
    //   └── footer ── "end"
    fn sample() -> Tree {
        let mut b = TreeBuilder::new();
        b.open(ElementData::new("body")).unwrap();
        b.open(ElementData::new("h1")).unwrap();
        b.text(TextData::heading1("Title")).unwrap();
        b.close();
        b.text(TextData::paragraph("intro")).unwrap();
        b.close();
        b.open(ElementData::new("footer")).unwrap();
        b.text(TextData::paragraph("end")).unwrap();
        b.finish()
    }

    fn label(node: &Node) -> String {
        match node.data() {
            crate::NodeData::Root => "root".into(),
            crate::NodeData::Element(e) => e.tag().into(),
            crate::NodeData::Text(t) => t.value().into(),
        }
    }

    #[test]
    fn test_depth_first_pre_order() {
        let tree = sample();
        let order: Vec<String> =
            tree.traverse_depth_first(tree.root()).unwrap().map(label).collect();
        assert_eq!(order, vec!["root", "body", "h1", "Title", "intro", "footer", "end"]);
        assert_eq!(tree.iter().count(), 7);
    }

    #[test]
    fn test_breadth_first_level_order() {
        let tree = sample();
        let order: Vec<String> =
            tree.traverse_breadth_first(tree.root()).unwrap().map(label).collect();
        assert_eq!(order, vec!["root", "body", "footer", "h1", "intro", "end", "Title"]);
    }

    #[test]
    fn test_traversal_from_inner_node() {
        let tree = sample();
        let body = tree.children(tree.root()).unwrap()[0];
        let order: Vec<String> = tree.traverse_depth_first(body).unwrap().map(label).collect();
        assert_eq!(order, vec!["body", "h1", "Title", "intro"]);
    }

    #[test]
    fn test_traversals_are_independent() {
        let tree = sample();
        let mut first = tree.traverse_depth_first(tree.root()).unwrap();
        let mut second = tree.traverse_depth_first(tree.root()).unwrap();
        first.next();
        first.next();
        assert_eq!(second.next().map(Node::id), Some(tree.root()));
        assert_eq!(first.count(), 5);
        assert_eq!(second.count(), 6);
    }

    #[test]
    fn test_unknown_start() {
        let tree = sample();
        assert!(tree.traverse_depth_first(NodeId::new(99, 0)).is_err());
        assert!(tree.traverse_breadth_first(NodeId::new(99, 0)).is_err());
    }
}
