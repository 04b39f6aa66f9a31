#![forbid(unsafe_code)]

//! Element nodes.

use smallvec::SmallVec;

use crate::input::InputEdit;

/// Compact handle to a node in a [`NodeArena`](crate::arena::NodeArena).
///
/// Ids are arena-scoped. A removed node's id goes stale; arena accessors
/// return `None` (or [`DomError::StaleNode`](crate::arena::DomError)) for
/// stale ids rather than panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The raw slot index, for diagnostics.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// What an element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Block container.
    Division,
    /// Inline container.
    Span,
    /// Single-line text input. Carries native editing state.
    Input,
    /// Clickable button.
    Button,
}

impl ElementKind {
    /// Whether nodes of this kind carry editing state.
    #[must_use]
    pub const fn is_input(self) -> bool {
        matches!(self, Self::Input)
    }
}

/// One element in the tree.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) kind: ElementKind,
    pub(crate) class: Option<String>,
    /// The node's own text, before any children's text.
    pub(crate) text: String,
    /// Editing state; `Some` exactly when `kind` is `Input`.
    pub(crate) edit: Option<InputEdit>,
    pub(crate) children: SmallVec<[NodeId; 4]>,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            class: None,
            text: String::new(),
            edit: kind.is_input().then(InputEdit::new),
            children: SmallVec::new(),
            parent: None,
        }
    }
}
