#![forbid(unsafe_code)]

//! Scripted host for exercising controls in tests.
//!
//! [`Host`] plays the component framework's part of the lifecycle contract:
//! it owns the arena and the mount node, initializes a control with a
//! context snapshot and a notify callback, calls `update_view` after init
//! and on demand, routes key and click events through the arena's listener
//! registry (control listener first, then the input's native editing, the
//! order a control written against a browser expects), and exposes the
//! notify count and rendered tree for assertions.

use std::cell::Cell;
use std::rc::Rc;

use chipfield_core::event::{ClickEvent, Event, EventKind, KeyCode, KeyEvent};
use chipfield_core::host::{Context, NotifyOutputChanged, OutputSet, StateDictionary};
use chipfield_dom::{ElementKind, NodeArena, NodeId};
use chipfield_widgets::Control;

/// A scripted component host driving one control instance.
pub struct Host<C: Control> {
    arena: NodeArena,
    mount: NodeId,
    control: C,
    notifications: Rc<Cell<usize>>,
    state: StateDictionary,
    read_only: bool,
}

impl<C: Control> Host<C> {
    /// Create a host with an empty mount node and an uninitialized control.
    pub fn new(control: C) -> Self {
        let mut arena = NodeArena::new();
        let mount = arena.create(ElementKind::Division);
        Self {
            arena,
            mount,
            control,
            notifications: Rc::new(Cell::new(0)),
            state: StateDictionary::new(),
            read_only: false,
        }
    }

    /// Initialize the control with a context snapshot, then call
    /// `update_view` once, as the framework does immediately after init.
    pub fn init(&mut self, context: &Context) {
        self.read_only = context.mode.is_read_only;
        let counter = Rc::clone(&self.notifications);
        let notify: NotifyOutputChanged = Box::new(move || counter.set(counter.get() + 1));
        self.control
            .init(context, notify, &mut self.state, &mut self.arena, self.mount);
        self.control.update_view(context, &mut self.arena);
    }

    /// Initialize editable with no bound value.
    pub fn init_editable(&mut self) {
        self.init(&Context::new());
    }

    /// Initialize read-only with the given bound value.
    pub fn init_read_only(&mut self, raw: &str) {
        self.init(&Context::new().with_read_only(true).with_raw_value(raw));
    }

    /// Deliver a fresh context snapshot.
    pub fn update_view(&mut self, context: &Context) {
        self.control.update_view(context, &mut self.arena);
    }

    /// Deliver a new bound value under the mode chosen at init.
    pub fn update_raw(&mut self, raw: &str) {
        let context = Context::new()
            .with_read_only(self.read_only)
            .with_raw_value(raw);
        self.update_view(&context);
    }

    // --- Event routing ---

    /// Route one key press to the focused input.
    ///
    /// The control's listener sees the event first; the input's native
    /// editing then applies the key as the default action. Keys are dropped
    /// when nothing focusable exists (view mode, destroyed control).
    pub fn key(&mut self, code: KeyCode) -> bool {
        let Some(target) = self.focused_input() else {
            return false;
        };
        let key = KeyEvent::new(code);
        let mut changed = false;
        if self.arena.has_listener(target, EventKind::KeyDown) {
            changed = self
                .control
                .handle_event(&mut self.arena, target, &Event::Key(key));
        }
        self.arena.apply_default_key(target, &key) || changed
    }

    /// Type a string, one character event at a time.
    pub fn type_str(&mut self, text: &str) {
        for c in text.chars() {
            self.key(KeyCode::Char(c));
        }
    }

    /// Press Enter on the focused input.
    pub fn press_enter(&mut self) -> bool {
        self.key(KeyCode::Enter)
    }

    /// Route a primary-button click to a node, honoring the listener
    /// registry.
    pub fn click(&mut self, target: NodeId) -> bool {
        if !self.arena.has_listener(target, EventKind::Click) {
            return false;
        }
        self.control
            .handle_event(&mut self.arena, target, &Event::Click(ClickEvent::primary()))
    }

    /// Click the remove control of the chip displaying `name`.
    ///
    /// Returns false when no such chip exists.
    pub fn click_remove(&mut self, name: &str) -> bool {
        let Some(button) = self.remove_button_for(name) else {
            return false;
        };
        self.click(button)
    }

    /// Tear the control down.
    pub fn destroy(&mut self) {
        self.control.destroy(&mut self.arena);
    }

    // --- Inspection ---

    /// The control's committed outputs.
    pub fn outputs(&self) -> OutputSet {
        self.control.get_outputs()
    }

    /// How many times the control has notified an output change.
    #[must_use]
    pub fn notifications(&self) -> usize {
        self.notifications.get()
    }

    /// All text under the mount, in tree order.
    #[must_use]
    pub fn view_text(&self) -> String {
        self.arena.text_content(self.mount)
    }

    /// Display names of the chips currently rendered, in row order.
    #[must_use]
    pub fn chip_names(&self) -> Vec<String> {
        self.arena
            .descendants(self.mount)
            .into_iter()
            .filter(|&id| self.is_chip(id))
            .filter_map(|id| self.arena.text(id).map(str::to_string))
            .collect()
    }

    /// The arena, for structural assertions.
    #[must_use]
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// The mount node handed to the control.
    #[must_use]
    pub fn mount(&self) -> NodeId {
        self.mount
    }

    /// The hosted control.
    #[must_use]
    pub fn control(&self) -> &C {
        &self.control
    }

    // --- Internal helpers ---

    /// The node key events go to: the first input under the mount.
    fn focused_input(&self) -> Option<NodeId> {
        self.arena
            .descendants(self.mount)
            .into_iter()
            .find(|&id| self.arena.kind(id) == Some(ElementKind::Input))
    }

    /// A chip is a span with an embedded clickable button.
    fn is_chip(&self, id: NodeId) -> bool {
        self.arena.kind(id) == Some(ElementKind::Span)
            && self.arena.children(id).iter().any(|&child| {
                self.arena.kind(child) == Some(ElementKind::Button)
                    && self.arena.has_listener(child, EventKind::Click)
            })
    }

    fn remove_button_for(&self, name: &str) -> Option<NodeId> {
        self.arena
            .descendants(self.mount)
            .into_iter()
            .filter(|&id| self.is_chip(id))
            .find(|&id| self.arena.text(id) == Some(name))
            .and_then(|chip| {
                self.arena
                    .children(chip)
                    .iter()
                    .copied()
                    .find(|&child| self.arena.has_listener(child, EventKind::Click))
            })
    }
}
