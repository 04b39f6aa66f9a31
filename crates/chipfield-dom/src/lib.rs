#![forbid(unsafe_code)]

//! Retained element tree for chipfield controls.
//!
//! The host hands a control one node — the mount point — inside a
//! [`NodeArena`]. Everything the control renders lives in the subtree under
//! that node, and the control alone creates and tears those nodes down
//! between `init` and `destroy`.
//!
//! The arena also keeps the listener registry: a control registers interest
//! in an event kind on a node, the host consults the registry when routing,
//! and removing a subtree drops its registrations so teardown cannot leave a
//! listener behind.

pub mod arena;
mod input;
pub mod node;

pub use arena::{DomError, NodeArena};
pub use node::{ElementKind, NodeId};
