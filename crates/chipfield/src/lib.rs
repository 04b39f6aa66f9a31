#![forbid(unsafe_code)]

//! Chipfield public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a small
//! prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use chipfield_core::event::{
    ClickEvent, Event, EventKind, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton,
};
pub use chipfield_core::host::{
    Context, Mode, NotifyOutputChanged, OutputSet, Parameters, StateDictionary, StringProperty,
};

// --- Dom re-exports --------------------------------------------------------

pub use chipfield_dom::arena::DomError;
pub use chipfield_dom::{ElementKind, NodeArena, NodeId};

// --- Widget re-exports -----------------------------------------------------

pub use chipfield_widgets::{
    ChipRow, Control, LookupItem, LookupProvider, MultiSelectLookup, RenderMode, StaticCatalog,
};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Context, Control, Event, KeyCode, KeyEvent, LookupItem, LookupProvider, MultiSelectLookup,
        NodeArena, NodeId, OutputSet, StaticCatalog,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use chipfield_harness::Host;

    #[test]
    fn facade_wires_the_whole_stack() {
        let mut host = Host::new(MultiSelectLookup::new());
        host.init_editable();
        host.type_str("cont");
        host.press_enter();
        assert_eq!(host.outputs().value, "1");
    }
}
