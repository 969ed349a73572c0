//! Structural invariant check
//!
//! The mutation API keeps these invariants on its own; `validate` exists for
//! tests and for hosts that want to assert them at a checkpoint.

use rustc_hash::FxHashSet;

use crate::error::{RenderTreeError, RenderTreeResult};
use crate::id::NodeId;

use super::Tree;

impl Tree {
    /// Check every structural invariant of the arena.
    ///
    /// - the root is live, of kind root, with no parent
    /// - no other node is a root
    /// - parent and children links agree, each child listed exactly once
    /// - text nodes have no children
    /// - every live node is reachable from exactly one unattached top, so no
    ///   node is its own ancestor
    pub fn validate(&self) -> RenderTreeResult<()> {
        let root = self
            .get(self.root)
            .ok_or_else(|| RenderTreeError::inconsistent("root node is missing"))?;
        if !root.is_root() || root.parent.is_some() {
            return Err(RenderTreeError::inconsistent(
                "root slot holds a non-root or attached node",
            ));
        }

        let mut live = 0usize;
        let mut tops = Vec::new();
        for (index, slot) in self.slots.iter().enumerate() {
            let Some(node) = &slot.node else { continue };
            live += 1;
            let id = node.id;
            if id != NodeId::new(index as u32, slot.generation) {
                return Err(RenderTreeError::inconsistent(format!(
                    "{id} stored in slot {index} generation {}",
                    slot.generation
                )));
            }
            if node.is_root() && id != self.root {
                return Err(RenderTreeError::inconsistent(format!("second root {id}")));
            }
            if !node.kind().is_container() && !node.children.is_empty() {
                return Err(RenderTreeError::inconsistent(format!("text node {id} has children")));
            }
            for &child in &node.children {
                let child_node = self.get(child).ok_or_else(|| {
                    RenderTreeError::inconsistent(format!("{id} lists dead child {child}"))
                })?;
                if child_node.parent != Some(id) {
                    return Err(RenderTreeError::inconsistent(format!(
                        "{child} is listed under {id} but its parent is {:?}",
                        child_node.parent
                    )));
                }
            }
            match node.parent {
                Some(parent) => {
                    let parent_node = self.get(parent).ok_or_else(|| {
                        RenderTreeError::inconsistent(format!("{id} has dead parent {parent}"))
                    })?;
                    let listed = parent_node.children.iter().filter(|&&c| c == id).count();
                    if listed != 1 {
                        return Err(RenderTreeError::inconsistent(format!(
                            "{id} appears {listed} times under its parent {parent}"
                        )));
                    }
                }
                None => tops.push(id),
            }
        }
        if live != self.len {
            return Err(RenderTreeError::inconsistent(format!(
                "node count says {} but {live} nodes are live",
                self.len
            )));
        }

        // Nodes caught in a parent cycle are never reached from a top.
        let mut seen = FxHashSet::default();
        for top in tops {
            for node in self.traverse_depth_first(top)? {
                if !seen.insert(node.id) {
                    return Err(RenderTreeError::inconsistent(format!("{} reached twice", node.id)));
                }
            }
        }
        if seen.len() != live {
            return Err(RenderTreeError::inconsistent(format!(
                "{} nodes unreachable from any top-level node",
                live - seen.len()
            )));
        }
        Ok(())
    }
}
