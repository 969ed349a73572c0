//! Render tree arena
//!
//! The [`Tree`] owns every node in a slot arena. Ownership runs strictly
//! top-down: a node lives until its subtree is removed or the tree is
//! destroyed, and parent links are plain ids used for upward navigation.
//!
//! Nodes are created `Unattached` and become `Attached` through
//! [`Tree::attach_child`]. Detaching keeps the subtree alive in the arena so
//! it can be attached elsewhere.

mod builder;
mod traverse;
mod validate;

pub use builder::TreeBuilder;
pub use traverse::{Ancestors, BreadthFirst, DepthFirst};

use crate::config::TreeConfig;
use crate::error::{RenderTreeError, RenderTreeResult};
use crate::hash::StableHasher;
use crate::id::NodeId;
use crate::node::{ElementData, Node, NodeData, NodeKind, NodeState, TextData, TextStyle};

// =============================================================================
// Slot
// =============================================================================

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

// =============================================================================
// Tree
// =============================================================================

/// Render tree: a root node plus every node created in it
#[derive(Debug, Clone)]
pub struct Tree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: NodeId,
    len: usize,
    config: TreeConfig,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create a tree holding only its root node
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    /// Create a tree with explicit configuration
    pub fn with_config(config: TreeConfig) -> Self {
        let root = NodeId::new(0, 0);
        let mut slots = Vec::with_capacity(config.expected_nodes.max(1));
        slots.push(Slot {
            generation: 0,
            node: Some(Node {
                id: root,
                data: NodeData::Root,
                parent: None,
                children: Default::default(),
            }),
        });
        Self {
            slots,
            free: Vec::new(),
            root,
            len: 1,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// The root node id
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, attached or not, including the root
    #[inline]
    pub fn node_count(&self) -> usize {
        self.len
    }

    /// Check if `id` refers to a live node
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Look up a node without applying the contract policy
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_ref())
    }

    /// Look up a node, failing with `UnknownNode` for stale or foreign ids
    pub fn node(&self, id: NodeId) -> RenderTreeResult<&Node> {
        self.config
            .check(self.get(id).ok_or(RenderTreeError::UnknownNode(id)))
    }

    fn node_mut(&mut self, id: NodeId) -> RenderTreeResult<&mut Node> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_mut())
            .ok_or(RenderTreeError::UnknownNode(id))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────

    /// Create an unattached node.
    ///
    /// Fails with `InvalidPayload` if `data` is not a `kind` payload, or if
    /// a second root is requested.
    pub fn create(
        &mut self,
        kind: NodeKind,
        data: impl Into<NodeData>,
    ) -> RenderTreeResult<NodeId> {
        let data = data.into();
        if kind == NodeKind::Root {
            return Err(RenderTreeError::invalid_payload(
                kind,
                "a tree has exactly one root",
            ));
        }

        let (index, generation) = match self.free.last() {
            Some(&index) => (index, self.slots[index as usize].generation),
            None => {
                let index = u32::try_from(self.slots.len())
                    .map_err(|_| RenderTreeError::inconsistent("node arena is full"))?;
                (index, 0)
            }
        };
        let id = NodeId::new(index, generation);
        let node = Node::new(id, kind, data)?;

        if self.free.pop().is_some() {
            self.slots[id.index()].node = Some(node);
        } else {
            self.slots.push(Slot {
                generation,
                node: Some(node),
            });
        }
        self.len += 1;
        log::trace!("created {kind} node {id}");
        Ok(id)
    }

    /// Create an unattached text node
    pub fn create_text(&mut self, text: TextData) -> RenderTreeResult<NodeId> {
        self.create(NodeKind::Text, text)
    }

    /// Create an unattached element node
    pub fn create_element(&mut self, element: ElementData) -> RenderTreeResult<NodeId> {
        self.create(NodeKind::Element, element)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Structural mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Append `child` as the last child of `parent`.
    ///
    /// On error the tree is left unchanged.
    pub fn attach_child(&mut self, parent: NodeId, child: NodeId) -> RenderTreeResult<()> {
        let len = self.node(parent)?.children.len();
        self.insert_child(parent, len, child)
    }

    /// Insert `child` at position `index` among `parent`'s children.
    ///
    /// On error the tree is left unchanged.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> RenderTreeResult<()> {
        let parent_node = self.node(parent)?;
        let child_node = self.node(child)?;

        if self.is_ancestor_or_self(child, parent) {
            return Err(RenderTreeError::CycleDetected { parent, child });
        }
        if !parent_node.kind().is_container() {
            return Err(RenderTreeError::LeafParent(parent));
        }
        if child_node.is_root() {
            return Err(RenderTreeError::RootNotAttachable(child));
        }
        if child_node.parent.is_some() {
            return Err(RenderTreeError::AlreadyAttached(child));
        }
        let len = parent_node.children.len();
        if index > len {
            return Err(RenderTreeError::IndexOutOfBounds { parent, index, len });
        }

        self.node_mut(parent)?.children.insert(index, child);
        self.node_mut(child)?.parent = Some(parent);
        log::trace!("attached {child} under {parent} at {index}");
        Ok(())
    }

    /// Remove `id` from its parent's children and clear its parent link.
    ///
    /// The node and its subtree stay alive, unattached.
    pub fn detach(&mut self, id: NodeId) -> RenderTreeResult<()> {
        let parent = self.node(id)?.parent.ok_or(RenderTreeError::NotAttached(id))?;
        let siblings = &mut self.node_mut(parent)?.children;
        let pos = siblings.iter().position(|&c| c == id).ok_or_else(|| {
            RenderTreeError::inconsistent(format!("{id} missing from children of {parent}"))
        })?;
        siblings.remove(pos);
        self.node_mut(id)?.parent = None;
        log::trace!("detached {id} from {parent}");
        Ok(())
    }

    /// Detach `id` if needed, then free it and every descendant.
    ///
    /// Returns the number of nodes released. Ids of released nodes become
    /// stale and fail with `UnknownNode`.
    pub fn remove_subtree(&mut self, id: NodeId) -> RenderTreeResult<usize> {
        if self.node(id)?.is_root() {
            return Err(RenderTreeError::RootNotAttachable(id));
        }
        if self.node(id)?.parent.is_some() {
            self.detach(id)?;
        }

        let doomed: Vec<NodeId> = self.traverse_depth_first(id)?.map(Node::id).collect();
        for &victim in &doomed {
            let slot = &mut self.slots[victim.index()];
            slot.node = None;
            // A slot whose generation is exhausted is retired, never reused
            match slot.generation.checked_add(1) {
                Some(next) => {
                    slot.generation = next;
                    self.free.push(victim.index() as u32);
                }
                None => log::debug!("retiring arena slot {}", victim.index()),
            }
        }
        self.len -= doomed.len();
        log::debug!("removed subtree {id}: {} nodes released", doomed.len());
        Ok(doomed.len())
    }

    /// Release the whole tree, returning how many nodes were freed.
    pub fn destroy(self) -> usize {
        let released = self.slots.iter().filter(|slot| slot.node.is_some()).count();
        log::debug!("destroying render tree: {released} nodes released");
        released
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    pub fn parent(&self, id: NodeId) -> RenderTreeResult<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    /// Children of `id` in document order
    pub fn children(&self, id: NodeId) -> RenderTreeResult<&[NodeId]> {
        Ok(self.node(id)?.children())
    }

    pub fn state(&self, id: NodeId) -> RenderTreeResult<NodeState> {
        Ok(self.node(id)?.state())
    }

    /// Strict ancestors of `id`, nearest first
    pub fn ancestors(&self, id: NodeId) -> RenderTreeResult<Ancestors<'_>> {
        let start = self.node(id)?.parent;
        Ok(Ancestors::new(self, start))
    }

    /// Number of links between `id` and the top of its subtree
    pub fn depth(&self, id: NodeId) -> RenderTreeResult<usize> {
        Ok(self.ancestors(id)?.count())
    }

    /// Check if `ancestor` is `node` or lies on its parent chain
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        if node == ancestor {
            return true;
        }
        let start = self.get(node).and_then(Node::parent);
        Ancestors::new(self, start).any(|a| a == ancestor)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Checked accessors
    // ─────────────────────────────────────────────────────────────────────────

    fn read<'a, T>(
        &'a self,
        id: NodeId,
        f: impl FnOnce(&'a Node) -> RenderTreeResult<T>,
    ) -> RenderTreeResult<T> {
        let node = self.get(id).ok_or(RenderTreeError::UnknownNode(id));
        self.config.check(node.and_then(f))
    }

    pub fn text_value(&self, id: NodeId) -> RenderTreeResult<&str> {
        self.read(id, Node::text_value)
    }

    pub fn text_font(&self, id: NodeId) -> RenderTreeResult<&str> {
        self.read(id, Node::text_font)
    }

    pub fn text_explicit_font(&self, id: NodeId) -> RenderTreeResult<Option<&str>> {
        self.read(id, Node::text_explicit_font)
    }

    pub fn text_font_size(&self, id: NodeId) -> RenderTreeResult<f32> {
        self.read(id, Node::text_font_size)
    }

    pub fn text_bold(&self, id: NodeId) -> RenderTreeResult<bool> {
        self.read(id, Node::text_bold)
    }

    pub fn element_tag(&self, id: NodeId) -> RenderTreeResult<&str> {
        self.read(id, Node::element_tag)
    }

    pub fn element_attr<'a>(&'a self, id: NodeId, name: &str) -> RenderTreeResult<Option<&'a str>> {
        self.read(id, |node| node.element_attr(name))
    }

    pub fn element_style(&self, id: NodeId) -> RenderTreeResult<&TextStyle> {
        self.read(id, Node::element_style)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Whole-subtree queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Concatenated text of the subtree at `id`, in document order
    pub fn text_content(&self, id: NodeId) -> RenderTreeResult<String> {
        let mut out = String::new();
        for node in self.traverse_depth_first(id)? {
            if let Some(text) = node.data.as_text() {
                out.push_str(text.value());
            }
        }
        Ok(out)
    }

    /// Deterministic content hash of the subtree at `id`.
    ///
    /// Covers payloads and shape, not ids, so equal subtrees built in
    /// different trees hash the same.
    pub fn fingerprint(&self, id: NodeId) -> RenderTreeResult<u64> {
        let mut hasher = StableHasher::new();
        for node in self.traverse_depth_first(id)? {
            hasher = hash_payload(hasher, &node.data).update_usize(node.children.len());
        }
        Ok(hasher.finish())
    }
}

fn hash_payload(hasher: StableHasher, data: &NodeData) -> StableHasher {
    match data {
        NodeData::Root => hasher.update_str("root"),
        NodeData::Element(e) => {
            let mut hasher = hasher.update_str("element").update_str(e.tag());
            hasher = hasher.update_usize(e.attrs().len());
            for (k, v) in e.attrs() {
                hasher = hasher.update_str(k).update_str(v);
            }
            let style = e.style();
            hasher
                .update_opt_str(style.font.as_deref())
                .update_bool(style.font_size.is_some())
                .update_f32(style.font_size.map_or(0.0, |s| s.get()))
                .update(&[match style.bold {
                    None => 0,
                    Some(false) => 1,
                    Some(true) => 2,
                }])
        }
        NodeData::Text(t) => hasher
            .update_str("text")
            .update_str(t.value())
            .update_opt_str(t.explicit_font())
            .update_f32(t.font_size())
            .update_bool(t.is_bold()),
    }
}
