#![forbid(unsafe_code)]

//! Field controls for chipfield.
//!
//! A control is a plain struct satisfying the host lifecycle contract: the
//! host calls [`Control::init`] once with a context snapshot, a notify
//! callback, and a mount node; calls [`Control::update_view`] whenever bound
//! data changes; routes UI events through [`Control::handle_event`] per the
//! arena's listener registry; reads [`Control::get_outputs`]; and finally
//! calls [`Control::destroy`].

pub mod chip;
pub mod lookup;
pub mod provider;
pub mod raw;

pub use chip::ChipRow;
pub use lookup::{MultiSelectLookup, RenderMode};
pub use provider::{LookupItem, LookupProvider, StaticCatalog};

use chipfield_core::event::Event;
use chipfield_core::host::{Context, NotifyOutputChanged, OutputSet, StateDictionary};
use chipfield_dom::{NodeArena, NodeId};

/// A field control hosted by a component framework.
///
/// Lifecycle: `init` once, `update_view` any number of times, `get_outputs`
/// whenever the host wants the committed value, `destroy` exactly once at
/// the end. All calls are synchronous and run to completion; the control
/// exclusively owns the subtree under its mount node between `init` and
/// `destroy`.
pub trait Control {
    /// Initialize the control.
    ///
    /// The control decides its rendering mode here, permanently, from the
    /// context's read-only flag, and builds whatever elements that mode
    /// needs under `mount`. `state` is host-managed storage reserved by the
    /// contract.
    fn init(
        &mut self,
        context: &Context,
        notify: NotifyOutputChanged,
        state: &mut StateDictionary,
        arena: &mut NodeArena,
        mount: NodeId,
    );

    /// React to a fresh context snapshot.
    ///
    /// Re-entrant; the host calls this whenever bound data may have changed,
    /// including immediately after `init`.
    fn update_view(&mut self, context: &Context, arena: &mut NodeArena);

    /// Read the control's committed outputs. Pure; no side effects.
    fn get_outputs(&self) -> OutputSet;

    /// Handle a UI event routed to `target`.
    ///
    /// The host routes an event here when the target node has a matching
    /// listener registration. Returns `true` if control state changed.
    fn handle_event(&mut self, arena: &mut NodeArena, target: NodeId, event: &Event) -> bool {
        let _ = (arena, target, event);
        false
    }

    /// Tear down everything built since `init`.
    ///
    /// Must be safe to call at any time after `init`, including after a
    /// partial build, and must leave no listener registrations behind.
    fn destroy(&mut self, arena: &mut NodeArena);
}
