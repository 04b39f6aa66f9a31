#![forbid(unsafe_code)]

//! Node arena and listener registry.
//!
//! Nodes live in slots with a free list, so removing a chip and adding
//! another reuses storage instead of growing forever. Subtree removal is the
//! only way a node dies, and it takes the node's listener registrations with
//! it: after `remove`, nothing can route an event to the dead subtree.

use std::collections::HashSet;
use std::fmt;

use chipfield_core::event::{EventKind, KeyEvent};

use crate::node::{ElementKind, Node, NodeId};

/// Errors for arena misuse.
///
/// These never cross the host boundary; controls only hold ids they created,
/// so hitting one of these indicates a bug in the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomError {
    /// The id does not name a live node.
    StaleNode(NodeId),
    /// An input operation was applied to a non-input node.
    NotAnInput(NodeId),
    /// A node cannot be attached to itself.
    SelfAttach(NodeId),
    /// The child is already attached to a parent.
    AlreadyAttached(NodeId),
    /// Attaching would make a node its own ancestor.
    WouldCycle(NodeId),
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleNode(id) => write!(f, "stale node id {}", id.index()),
            Self::NotAnInput(id) => write!(f, "node {} is not an input", id.index()),
            Self::SelfAttach(id) => write!(f, "node {} cannot be its own child", id.index()),
            Self::AlreadyAttached(id) => write!(f, "node {} already has a parent", id.index()),
            Self::WouldCycle(id) => write!(f, "attaching node {} would create a cycle", id.index()),
        }
    }
}

impl std::error::Error for DomError {}

/// Slot-allocated element tree with per-node event listeners.
#[derive(Debug, Default)]
pub struct NodeArena {
    slots: Vec<Option<Node>>,
    /// Indices of vacant slots, reused before the slot vector grows.
    free: Vec<u32>,
    listeners: HashSet<(NodeId, EventKind)>,
    live: usize,
}

impl NodeArena {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the arena holds no live nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Whether the id names a live node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    // --- Creation and structure ---

    /// Create a detached node of the given kind.
    pub fn create(&mut self, kind: ElementKind) -> NodeId {
        let node = Node::new(kind);
        let id = match self.free.pop() {
            Some(index) => {
                self.slots[index as usize] = Some(node);
                NodeId(index)
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Some(node));
                NodeId(index)
            }
        };
        self.live += 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(node = id.index(), ?kind, "create");
        id
    }

    /// Append a detached node as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if parent == child {
            return Err(DomError::SelfAttach(child));
        }
        if !self.contains(parent) {
            return Err(DomError::StaleNode(parent));
        }
        let child_node = self.node(child).ok_or(DomError::StaleNode(child))?;
        if child_node.parent.is_some() {
            return Err(DomError::AlreadyAttached(child));
        }
        if self.is_ancestor(child, parent) {
            return Err(DomError::WouldCycle(child));
        }

        if let Some(child_node) = self.node_mut(child) {
            child_node.parent = Some(parent);
        }
        if let Some(parent_node) = self.node_mut(parent) {
            parent_node.children.push(child);
        }
        Ok(())
    }

    /// Remove a node and its whole subtree, detaching it from its parent and
    /// dropping every listener registered inside the subtree.
    pub fn remove(&mut self, id: NodeId) -> Result<(), DomError> {
        if !self.contains(id) {
            return Err(DomError::StaleNode(id));
        }
        let parent = self.node(id).and_then(|n| n.parent);
        if let Some(parent) = parent
            && let Some(parent_node) = self.node_mut(parent)
        {
            parent_node.children.retain(|c| *c != id);
        }

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.slots[current.0 as usize].take() {
                stack.extend(node.children.iter().copied());
                self.listeners.retain(|(n, _)| *n != current);
                self.free.push(current.0);
                self.live -= 1;
            }
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(node = id.index(), "remove subtree");
        Ok(())
    }

    /// Remove every child subtree of `id`, leaving the node itself in place.
    pub fn clear_children(&mut self, id: NodeId) -> Result<(), DomError> {
        let children: Vec<NodeId> = self
            .node(id)
            .ok_or(DomError::StaleNode(id))?
            .children
            .to_vec();
        for child in children {
            self.remove(child)?;
        }
        Ok(())
    }

    /// The node's parent, if attached.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// The node's children, in order. Empty for stale ids.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Every live node under `id` (excluding `id`), depth-first.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    // --- Attributes ---

    /// The node's kind.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> Option<ElementKind> {
        self.node(id).map(|n| n.kind)
    }

    /// The node's class attribute.
    #[must_use]
    pub fn class(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(|n| n.class.as_deref())
    }

    /// Set the node's class attribute.
    pub fn set_class(&mut self, id: NodeId, class: impl Into<String>) -> Result<(), DomError> {
        self.node_mut(id).ok_or(DomError::StaleNode(id))?.class = Some(class.into());
        Ok(())
    }

    /// The node's own text (children's text not included).
    #[must_use]
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.text.as_str())
    }

    /// Set the node's own text.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> Result<(), DomError> {
        self.node_mut(id).ok_or(DomError::StaleNode(id))?.text = text.into();
        Ok(())
    }

    /// The node's text plus all descendant text, in tree order.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        if let Some(node) = self.node(id) {
            out.push_str(&node.text);
            for &child in &node.children {
                self.collect_text(child, out);
            }
        }
    }

    // --- Listeners ---

    /// Register interest in an event kind on a node.
    ///
    /// Registering the same pair twice is a no-op, matching listener
    /// semantics controls expect.
    pub fn add_listener(&mut self, id: NodeId, kind: EventKind) -> Result<(), DomError> {
        if !self.contains(id) {
            return Err(DomError::StaleNode(id));
        }
        self.listeners.insert((id, kind));
        Ok(())
    }

    /// Remove a registration. Returns whether it existed.
    pub fn remove_listener(&mut self, id: NodeId, kind: EventKind) -> bool {
        self.listeners.remove(&(id, kind))
    }

    /// Whether the node has a listener for the kind.
    #[must_use]
    pub fn has_listener(&self, id: NodeId, kind: EventKind) -> bool {
        self.listeners.contains(&(id, kind))
    }

    /// Total number of registrations, all nodes and kinds.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // --- Input nodes ---

    /// Current value of an input node.
    #[must_use]
    pub fn input_value(&self, id: NodeId) -> Option<&str> {
        self.node(id)?.edit.as_ref().map(|e| e.value())
    }

    /// Replace an input node's value, moving its cursor to the end.
    pub fn set_input_value(&mut self, id: NodeId, value: impl Into<String>) -> Result<(), DomError> {
        self.edit_mut(id)?.set_value(value);
        Ok(())
    }

    /// Clear an input node's value and cursor.
    pub fn clear_input(&mut self, id: NodeId) -> Result<(), DomError> {
        self.edit_mut(id)?.clear();
        Ok(())
    }

    /// An input node's placeholder text.
    #[must_use]
    pub fn placeholder(&self, id: NodeId) -> Option<&str> {
        self.node(id)?.edit.as_ref().map(|e| e.placeholder())
    }

    /// Set an input node's placeholder text.
    pub fn set_placeholder(&mut self, id: NodeId, text: impl Into<String>) -> Result<(), DomError> {
        self.edit_mut(id)?.set_placeholder(text);
        Ok(())
    }

    /// Apply a key event as the node's default editing action.
    ///
    /// Returns `true` if the input's value or cursor changed. Non-input and
    /// stale nodes change nothing.
    pub fn apply_default_key(&mut self, id: NodeId, key: &KeyEvent) -> bool {
        match self.node_mut(id).and_then(|n| n.edit.as_mut()) {
            Some(edit) => edit.handle_key(key),
            None => false,
        }
    }

    // --- Internal helpers ---

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0 as usize)?.as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.0 as usize)?.as_mut()
    }

    fn edit_mut(&mut self, id: NodeId) -> Result<&mut crate::input::InputEdit, DomError> {
        let node = self.node_mut(id).ok_or(DomError::StaleNode(id))?;
        node.edit.as_mut().ok_or(DomError::NotAnInput(id))
    }

    /// Whether `ancestor` is an ancestor of `id` (or `id` itself).
    fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }
}
