#![forbid(unsafe_code)]

//! Host-contract data types.
//!
//! A component host constructs a control once, then talks to it through a
//! small, fixed surface: a [`Context`] snapshot describing the bound field
//! and the rendering mode, a [`NotifyOutputChanged`] callback the control
//! invokes when its committed value changes, a [`StateDictionary`] reserved
//! by the contract, and an [`OutputSet`] the host reads back.
//!
//! Context values are snapshots: the host passes a fresh one on every view
//! update and the control must not assume a snapshot outlives the call.

use std::collections::HashMap;

/// Callback the control invokes after a user interaction changed its
/// committed value. The host typically responds by calling back into
/// `get_outputs`.
pub type NotifyOutputChanged = Box<dyn FnMut()>;

/// Host-managed key/value state handed to `init`.
///
/// Reserved by the contract; the lookup control accepts and ignores it.
pub type StateDictionary = HashMap<String, String>;

/// Rendering mode granted by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mode {
    /// When set, the control must render a read-only representation and
    /// build no interactive elements.
    pub is_read_only: bool,
}

/// A single bound string parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringProperty {
    /// The serialized field value, if the field has one. Absent on first
    /// render of an empty field; controls treat `None` as the empty string.
    pub raw: Option<String>,
}

/// The control's bound parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parameters {
    /// The delimited-string field this control edits.
    pub value: StringProperty,
}

/// Snapshot of everything the host exposes to a control for one call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Context {
    /// Rendering mode for this instance.
    pub mode: Mode,
    /// Data-bound parameter values.
    pub parameters: Parameters,
}

impl Context {
    /// Create an editable context with no bound value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the read-only flag (builder).
    #[must_use]
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.mode.is_read_only = read_only;
        self
    }

    /// Set the raw bound value (builder).
    #[must_use]
    pub fn with_raw_value(mut self, raw: impl Into<String>) -> Self {
        self.parameters.value.raw = Some(raw.into());
        self
    }

    /// The bound raw value, with an absent value read as empty.
    #[must_use]
    pub fn raw_value(&self) -> &str {
        self.parameters.value.raw.as_deref().unwrap_or("")
    }
}

/// Values a control reports back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputSet {
    /// The serialized field value, semicolon-delimited.
    pub value: String,
}
