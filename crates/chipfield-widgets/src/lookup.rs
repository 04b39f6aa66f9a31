#![forbid(unsafe_code)]

//! Multi-select lookup control.
//!
//! Edit mode owns a search input and a chip row: Enter looks the query up
//! through the provider, a hit becomes a chip, a chip's remove button drops
//! it again, and every selection change notifies the host. View mode renders
//! the host-supplied raw value as comma-joined text and never mutates
//! selection state.

use chipfield_core::event::{Event, EventKind, KeyCode, KeyEvent, KeyEventKind};
use chipfield_core::host::{Context, NotifyOutputChanged, OutputSet, StateDictionary};
use chipfield_dom::arena::DomError;
use chipfield_dom::{ElementKind, NodeArena, NodeId};

use crate::chip::ChipRow;
use crate::provider::{LookupItem, LookupProvider, StaticCatalog};
use crate::raw;
use crate::Control;

/// Rendering mode, decided once at init from the context's read-only flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Interactive: search input plus chip row.
    Edit,
    /// Read-only text rendering of the raw value.
    View,
}

/// Lifecycle phase.
#[derive(Debug)]
enum Phase {
    Uninitialized,
    Ready(RenderMode),
    Destroyed,
}

/// The multi-select lookup field control.
pub struct MultiSelectLookup {
    provider: Box<dyn LookupProvider>,
    placeholder: String,
    phase: Phase,
    /// Selected records, insertion-ordered, unique by id.
    selection: Vec<LookupItem>,
    notify: Option<NotifyOutputChanged>,
    mount: Option<NodeId>,
    chips: Option<ChipRow>,
    input: Option<NodeId>,
}

impl Default for MultiSelectLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiSelectLookup {
    /// Create a control over the built-in sample catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            provider: Box::new(StaticCatalog::sample()),
            placeholder: "Search...".to_string(),
            phase: Phase::Uninitialized,
            selection: Vec::new(),
            notify: None,
            mount: None,
            chips: None,
            input: None,
        }
    }

    /// Swap the lookup provider (builder).
    #[must_use]
    pub fn with_provider(mut self, provider: impl LookupProvider + 'static) -> Self {
        self.provider = Box::new(provider);
        self
    }

    /// Set the search input's placeholder text (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// The selected records, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[LookupItem] {
        &self.selection
    }

    /// The rendering mode, once initialized.
    #[must_use]
    pub fn render_mode(&self) -> Option<RenderMode> {
        match self.phase {
            Phase::Ready(mode) => Some(mode),
            _ => None,
        }
    }

    /// The search input node, in edit mode.
    #[must_use]
    pub fn input_node(&self) -> Option<NodeId> {
        self.input
    }

    /// The chip row, in edit mode.
    #[must_use]
    pub fn chip_row(&self) -> Option<&ChipRow> {
        self.chips.as_ref()
    }

    // --- Edit-mode internals ---

    fn build_edit_ui(&mut self, arena: &mut NodeArena, mount: NodeId) -> Result<(), DomError> {
        let chips = ChipRow::mount(arena, mount)?;
        let input = arena.create(ElementKind::Input);
        arena.set_class(input, "chipfield-input")?;
        arena.set_placeholder(input, self.placeholder.clone())?;
        arena.append_child(mount, input)?;
        arena.add_listener(input, EventKind::KeyDown)?;
        self.chips = Some(chips);
        self.input = Some(input);
        Ok(())
    }

    fn on_input_key(&mut self, arena: &mut NodeArena, key: &KeyEvent) -> bool {
        if key.code != KeyCode::Enter || key.kind == KeyEventKind::Release {
            return false;
        }
        let Some(input) = self.input else {
            return false;
        };
        let term = arena.input_value(input).unwrap_or("").to_string();
        if term.is_empty() {
            return false;
        }

        if let Some(item) = self.provider.search(&term)
            && !self.selection.iter().any(|s| s.id == item.id)
        {
            let pushed = match self.chips.as_mut() {
                Some(chips) => chips.push(arena, item.clone()).is_ok(),
                None => false,
            };
            if pushed {
                #[cfg(feature = "tracing")]
                tracing::debug!(id = %item.id, name = %item.name, "select");
                self.selection.push(item);
                self.notify_host();
            }
        }
        // Match or not, a committed search consumes the input.
        let _ = arena.clear_input(input);
        true
    }

    fn on_click(&mut self, arena: &mut NodeArena, target: NodeId) -> bool {
        let removed = match self.chips.as_mut() {
            Some(chips) => chips.remove_for_target(arena, target),
            None => None,
        };
        match removed {
            Some(item) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(id = %item.id, "remove chip");
                self.selection.retain(|s| s.id != item.id);
                self.notify_host();
                true
            }
            None => false,
        }
    }

    /// Reconcile edit-mode state against a host-supplied raw value.
    ///
    /// The host echoes the control's own output back after every notify;
    /// that echo must not rebuild anything. Only a genuinely external change
    /// (different token sequence) replaces the selection and chips, and a
    /// host-initiated rebuild does not notify.
    fn reconcile(&mut self, raw_value: &str, arena: &mut NodeArena) {
        let incoming = raw::tokens(raw_value);
        if incoming
            .iter()
            .copied()
            .eq(self.selection.iter().map(|item| item.id.as_str()))
        {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(tokens = incoming.len(), "external value change, rebuilding");

        let items: Vec<LookupItem> = incoming
            .iter()
            .map(|token| {
                self.provider
                    .resolve(token)
                    .unwrap_or_else(|| LookupItem::new(*token, *token))
            })
            .collect();

        self.selection.clear();
        match self.chips.as_mut() {
            Some(chips) => {
                chips.clear(arena);
                for item in items {
                    if chips.push(arena, item.clone()).is_ok() {
                        self.selection.push(item);
                    }
                }
            }
            None => self.selection = items,
        }
    }

    fn notify_host(&mut self) {
        if let Some(notify) = self.notify.as_mut() {
            notify();
        }
    }
}

impl Control for MultiSelectLookup {
    fn init(
        &mut self,
        context: &Context,
        notify: NotifyOutputChanged,
        _state: &mut StateDictionary,
        arena: &mut NodeArena,
        mount: NodeId,
    ) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("control_init", read_only = context.mode.is_read_only).entered();

        self.mount = Some(mount);
        self.notify = Some(notify);

        let mode = if context.mode.is_read_only {
            RenderMode::View
        } else {
            RenderMode::Edit
        };
        self.phase = Phase::Ready(mode);

        if mode == RenderMode::Edit {
            // A failed build leaves a partial subtree behind; destroy()
            // still tears it down.
            let _ = self.build_edit_ui(arena, mount);
        }
    }

    fn update_view(&mut self, context: &Context, arena: &mut NodeArena) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("control_update_view").entered();

        let raw_value = context.raw_value();
        match self.phase {
            Phase::Ready(RenderMode::View) => {
                if let Some(mount) = self.mount {
                    let _ = arena.set_text(mount, raw::display_text(raw_value));
                }
            }
            Phase::Ready(RenderMode::Edit) => self.reconcile(raw_value, arena),
            Phase::Uninitialized | Phase::Destroyed => {}
        }
    }

    fn get_outputs(&self) -> OutputSet {
        OutputSet {
            value: raw::join_ids(self.selection.iter().map(|item| item.id.as_str())),
        }
    }

    fn handle_event(&mut self, arena: &mut NodeArena, target: NodeId, event: &Event) -> bool {
        if !matches!(self.phase, Phase::Ready(RenderMode::Edit)) {
            return false;
        }
        match event {
            Event::Key(key) if self.input == Some(target) => self.on_input_key(arena, key),
            Event::Click(_) => self.on_click(arena, target),
            Event::Key(_) => false,
        }
    }

    fn destroy(&mut self, arena: &mut NodeArena) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("control_destroy").entered();

        if let Some(input) = self.input.take() {
            arena.remove_listener(input, EventKind::KeyDown);
        }
        if let Some(mut chips) = self.chips.take() {
            chips.clear(arena);
        }
        if let Some(mount) = self.mount.take() {
            let _ = arena.set_text(mount, "");
            let _ = arena.clear_children(mount);
        }
        self.selection.clear();
        self.notify = None;
        self.phase = Phase::Destroyed;
    }
}
