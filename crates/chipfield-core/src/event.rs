#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! The host delivers discrete input events to a control; this module defines
//! the event vocabulary. All events derive `Clone`, `PartialEq`, and `Eq`
//! for use in tests and pattern matching.
//!
//! # Design Notes
//!
//! - `KeyEventKind` defaults to `Press` when the host has no better signal
//! - `Modifiers` use bitflags for easy combination
//! - `EventKind` is the registration key for element listeners: a control
//!   subscribes to a kind on a node, and the host routes matching events

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A pointer click on an element.
    Click(ClickEvent),
}

impl Event {
    /// The listener kind this event is routed under.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Key(_) => EventKind::KeyDown,
            Self::Click(_) => EventKind::Click,
        }
    }
}

/// Listener registration categories.
///
/// A control registers interest in a kind on a specific node; the host only
/// routes an event to the control when the target node has a matching
/// listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Key pressed while the node has focus.
    KeyDown,
    /// Pointer click on the node.
    Click,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Check if Alt modifier is held.
    #[must_use]
    pub const fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    /// Check if Shift modifier is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,

    /// Backspace key.
    Backspace,

    /// Delete key.
    Delete,

    /// Tab key.
    Tab,

    /// Left arrow.
    Left,

    /// Right arrow.
    Right,

    /// Home key.
    Home,

    /// End key.
    End,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyEventKind {
    /// Key was pressed.
    #[default]
    Press,
    /// Key is repeating (held down).
    Repeat,
    /// Key was released.
    Release,
}

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE = 0;
        /// Shift key.
        const SHIFT = 1 << 0;
        /// Control key.
        const CTRL = 1 << 1;
        /// Alt/Option key.
        const ALT = 1 << 2;
        /// Super/Meta/Cmd key.
        const SUPER = 1 << 3;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A pointer click on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// Which button produced the click.
    pub button: MouseButton,
}

impl ClickEvent {
    /// A primary-button click.
    #[must_use]
    pub const fn primary() -> Self {
        Self {
            button: MouseButton::Left,
        }
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left/primary button.
    Left,
    /// Right/secondary button.
    Right,
    /// Middle button.
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_builders() {
        let ev = KeyEvent::new(KeyCode::Enter)
            .with_modifiers(Modifiers::CTRL | Modifiers::SHIFT)
            .with_kind(KeyEventKind::Repeat);
        assert_eq!(ev.code, KeyCode::Enter);
        assert!(ev.ctrl());
        assert!(ev.shift());
        assert!(!ev.alt());
        assert_eq!(ev.kind, KeyEventKind::Repeat);
    }

    #[test]
    fn is_char_matches_only_that_char() {
        let ev = KeyEvent::new(KeyCode::Char('x'));
        assert!(ev.is_char('x'));
        assert!(!ev.is_char('y'));
        assert!(!KeyEvent::new(KeyCode::Enter).is_char('x'));
    }

    #[test]
    fn event_kind_routing() {
        assert_eq!(
            Event::Key(KeyEvent::new(KeyCode::Char('a'))).kind(),
            EventKind::KeyDown
        );
        assert_eq!(Event::Click(ClickEvent::primary()).kind(), EventKind::Click);
    }

    #[test]
    fn modifiers_default_to_none() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
        assert_eq!(KeyEvent::new(KeyCode::Tab).modifiers, Modifiers::NONE);
    }
}
