//! Structural integration tests for the node arena.

use chipfield_core::event::EventKind;
use chipfield_dom::{ElementKind, NodeArena, NodeId};

fn build_chip(arena: &mut NodeArena, row: NodeId, name: &str) -> NodeId {
    let chip = arena.create(ElementKind::Span);
    arena.set_text(chip, name).unwrap();
    let remove = arena.create(ElementKind::Button);
    arena.set_text(remove, "×").unwrap();
    arena.append_child(chip, remove).unwrap();
    arena.add_listener(remove, EventKind::Click).unwrap();
    arena.append_child(row, chip).unwrap();
    chip
}

#[test]
fn chip_row_lifecycle_leaves_arena_clean() {
    let mut arena = NodeArena::new();
    let mount = arena.create(ElementKind::Division);
    let row = arena.create(ElementKind::Division);
    arena.append_child(mount, row).unwrap();

    let chips: Vec<NodeId> = ["Contoso", "Fabrikam", "Northwind"]
        .iter()
        .map(|name| build_chip(&mut arena, row, name))
        .collect();
    assert_eq!(arena.listener_count(), 3);
    assert_eq!(arena.children(row).len(), 3);

    // Removing the middle chip preserves the order of the rest.
    arena.remove(chips[1]).unwrap();
    assert_eq!(arena.children(row), &[chips[0], chips[2]]);
    assert_eq!(arena.listener_count(), 2);

    // Tearing down the mount's children drops everything the control built.
    arena.clear_children(mount).unwrap();
    assert_eq!(arena.len(), 1);
    assert_eq!(arena.listener_count(), 0);
}

#[test]
fn slot_reuse_does_not_confuse_structure() {
    let mut arena = NodeArena::new();
    let root = arena.create(ElementKind::Division);
    let first = build_chip(&mut arena, root, "a");
    arena.remove(first).unwrap();
    let second = build_chip(&mut arena, root, "b");
    assert_eq!(arena.children(root), &[second]);
    assert_eq!(arena.text(second), Some("b"));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any interleaving of chip creation and removal keeps parent/child
        /// links consistent and never strands a listener.
        #[test]
        fn structure_stays_consistent(ops in proptest::collection::vec((any::<bool>(), 0usize..8), 1..64)) {
            let mut arena = NodeArena::new();
            let root = arena.create(ElementKind::Division);
            let mut live: Vec<NodeId> = Vec::new();

            for (create, index) in ops {
                if create || live.is_empty() {
                    live.push(build_chip(&mut arena, root, "chip"));
                } else {
                    let chip = live.remove(index % live.len());
                    arena.remove(chip).unwrap();
                }

                prop_assert_eq!(arena.children(root).len(), live.len());
                // One click listener per chip's remove button, nothing else.
                prop_assert_eq!(arena.listener_count(), live.len());
                for &chip in &live {
                    prop_assert_eq!(arena.parent(chip), Some(root));
                    prop_assert_eq!(arena.children(chip).len(), 1);
                }
                // root + (chip + button) per live chip
                prop_assert_eq!(arena.len(), 1 + live.len() * 2);
            }
        }
    }
}
