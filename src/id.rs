//! Node identity within a render tree arena
//!
//! A [`NodeId`] is an arena slot index paired with a generation counter.
//! When a subtree is removed its slots are recycled, and the generation is
//! bumped so that handles to the removed nodes never alias the new ones. A
//! slot whose generation would wrap is retired instead of recycled.

use std::fmt;

/// Handle to a node in a [`Tree`](crate::Tree)
///
/// # Memory Layout
///
/// - 8 bytes (two u32)
/// - Copy, no heap allocation
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// Create a NodeId from its raw parts.
    ///
    /// Mostly useful in tests; real ids come from [`Tree::create`](crate::Tree::create).
    #[inline]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Arena slot index
    #[inline]
    pub const fn index(&self) -> usize {
        self.index as usize
    }

    /// Slot generation this handle was issued for
    #[inline]
    pub const fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}v{})", self.index, self.generation)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts() {
        let id = NodeId::new(7, 2);
        assert_eq!(id.index(), 7);
        assert_eq!(id.generation(), 2);
    }

    #[test]
    fn test_generation_distinguishes_ids() {
        assert_ne!(NodeId::new(4, 0), NodeId::new(4, 1));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(format!("{}", NodeId::new(12, 3)), "#12v3");
        assert_eq!(format!("{:?}", NodeId::new(12, 3)), "NodeId(12v3)");
    }
}
