#![forbid(unsafe_code)]

//! Chip row: the removable tokens for selected records.
//!
//! Each selected item renders as one chip — a span carrying the display name
//! with an embedded remove button. The row keeps the binding from remove
//! button to item so a click can be mapped back to exactly one selection
//! entry. Chips keep their insertion position; removing one never reorders
//! the rest.

use chipfield_core::event::EventKind;
use chipfield_dom::arena::DomError;
use chipfield_dom::{ElementKind, NodeArena, NodeId};

use crate::provider::LookupItem;

/// One rendered chip and the item it is bound to.
#[derive(Debug, Clone)]
struct ChipSlot {
    item: LookupItem,
    root: NodeId,
    remove: NodeId,
}

/// The chip container and its chips, in selection order.
#[derive(Debug)]
pub struct ChipRow {
    container: NodeId,
    chips: Vec<ChipSlot>,
}

impl ChipRow {
    /// Build an empty chip container under `parent`.
    pub fn mount(arena: &mut NodeArena, parent: NodeId) -> Result<Self, DomError> {
        let container = arena.create(ElementKind::Division);
        arena.set_class(container, "chipfield-chip-row")?;
        arena.append_child(parent, container)?;
        Ok(Self {
            container,
            chips: Vec::new(),
        })
    }

    /// The container node.
    #[must_use]
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Number of chips.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chips.len()
    }

    /// Whether the row holds no chips.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    /// Ids of the chips, in row order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.chips.iter().map(|chip| chip.item.id.as_str())
    }

    /// Whether a chip for the id exists.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.chips.iter().any(|chip| chip.item.id == id)
    }

    /// Append a chip for `item` and register its remove listener.
    pub fn push(&mut self, arena: &mut NodeArena, item: LookupItem) -> Result<(), DomError> {
        let root = arena.create(ElementKind::Span);
        arena.set_class(root, "chipfield-chip")?;
        arena.set_text(root, item.name.clone())?;

        let remove = arena.create(ElementKind::Button);
        arena.set_class(remove, "chipfield-chip-remove")?;
        arena.set_text(remove, "×")?;
        arena.append_child(root, remove)?;
        arena.add_listener(remove, EventKind::Click)?;

        arena.append_child(self.container, root)?;
        self.chips.push(ChipSlot { item, root, remove });
        Ok(())
    }

    /// Map a clicked node back to its chip; if it is one of our remove
    /// buttons, drop the chip subtree and return the item it was bound to.
    pub fn remove_for_target(&mut self, arena: &mut NodeArena, target: NodeId) -> Option<LookupItem> {
        let position = self.chips.iter().position(|chip| chip.remove == target)?;
        let slot = self.chips.remove(position);
        let _ = arena.remove(slot.root);
        Some(slot.item)
    }

    /// Drop every chip subtree, leaving the container in place.
    pub fn clear(&mut self, arena: &mut NodeArena) {
        for slot in self.chips.drain(..) {
            let _ = arena.remove(slot.root);
        }
    }
}
