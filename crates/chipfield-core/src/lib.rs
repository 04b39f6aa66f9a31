#![forbid(unsafe_code)]

//! Host-contract and input types for chipfield controls.
//!
//! This crate defines the data a component host hands to a control (context
//! snapshots, bound parameters, the notify callback) and the canonical input
//! event types routed to it. It carries no behavior of its own; the element
//! tree lives in `chipfield-dom` and the controls in `chipfield-widgets`.

pub mod event;
pub mod host;

pub use event::{
    ClickEvent, Event, EventKind, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton,
};
pub use host::{
    Context, Mode, NotifyOutputChanged, OutputSet, Parameters, StateDictionary, StringProperty,
};
