//! Lock-wrapped tree for hosts with more than one writer.
//!
//! The node model has no internal synchronization. A host that mutates a
//! tree from several threads wraps it in a [`SharedTree`], which serializes
//! writers behind a `parking_lot::RwLock`, or hands readers an immutable
//! [`Arc<Tree>`] snapshot.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::tree::Tree;

/// Thread-safe shared render tree.
///
/// Uses `parking_lot::RwLock` for better performance under contention.
#[derive(Debug)]
pub struct SharedTree {
    inner: Arc<RwLock<Tree>>,
}

impl Clone for SharedTree {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for SharedTree {
    fn default() -> Self {
        Self::new(Tree::new())
    }
}

impl From<Tree> for SharedTree {
    fn from(tree: Tree) -> Self {
        Self::new(tree)
    }
}

impl SharedTree {
    pub fn new(tree: Tree) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    /// Execute a closure with read access to the tree.
    pub fn with_read<R>(&self, f: impl FnOnce(&Tree) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Execute a closure with exclusive write access to the tree.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut Tree) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Clone the current tree into an immutable snapshot.
    ///
    /// Readers of the snapshot never contend with later writers.
    pub fn snapshot(&self) -> Arc<Tree> {
        let snapshot = self.with_read(|tree| Arc::new(tree.clone()));
        log::debug!("render tree snapshot taken: {} nodes", snapshot.node_count());
        snapshot
    }

    /// Take the tree back if this is the last handle.
    pub fn try_into_inner(self) -> Result<Tree, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}
