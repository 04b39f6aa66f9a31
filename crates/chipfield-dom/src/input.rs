#![forbid(unsafe_code)]

//! Native editing state for input nodes.
//!
//! Input elements edit themselves: when the host routes a key event to an
//! input node, the arena applies the key here as the node's default action
//! (after any control listener has seen the event). Editing is
//! grapheme-cluster aware so multi-codepoint text behaves correctly.

use chipfield_core::event::{KeyCode, KeyEvent, KeyEventKind};
use unicode_segmentation::UnicodeSegmentation;

/// Single-line editing state: a value plus a cursor at a grapheme index.
#[derive(Debug, Clone, Default)]
pub(crate) struct InputEdit {
    value: String,
    /// Cursor position (grapheme index).
    cursor: usize,
    /// Placeholder text shown by a renderer while the value is empty.
    placeholder: String,
}

impl InputEdit {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value and move the cursor to the end.
    pub(crate) fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.grapheme_count();
    }

    pub(crate) fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub(crate) fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Apply a key as the input's default action.
    ///
    /// Returns `true` if the value or cursor changed. Enter deliberately
    /// does nothing here; committing is a control concern, not an editing
    /// one.
    pub(crate) fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        match key.code {
            KeyCode::Char(c) if !key.ctrl() && !key.alt() => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => self.delete_char_back(),
            KeyCode::Delete => self.delete_char_forward(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => {
                let moved = self.cursor != 0;
                self.cursor = 0;
                moved
            }
            KeyCode::End => {
                let end = self.grapheme_count();
                let moved = self.cursor != end;
                self.cursor = end;
                moved
            }
            _ => false,
        }
    }

    // --- Editing operations ---

    fn insert_char(&mut self, c: char) {
        let byte_offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert(byte_offset, c);
        self.cursor += 1;
    }

    fn delete_char_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_start = self.grapheme_byte_offset(self.cursor - 1);
        let byte_end = self.grapheme_byte_offset(self.cursor);
        self.value.drain(byte_start..byte_end);
        self.cursor -= 1;
        true
    }

    fn delete_char_forward(&mut self) -> bool {
        if self.cursor >= self.grapheme_count() {
            return false;
        }
        let byte_start = self.grapheme_byte_offset(self.cursor);
        let byte_end = self.grapheme_byte_offset(self.cursor + 1);
        self.value.drain(byte_start..byte_end);
        true
    }

    fn move_cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    fn move_cursor_right(&mut self) -> bool {
        if self.cursor >= self.grapheme_count() {
            return false;
        }
        self.cursor += 1;
        true
    }

    // --- Internal helpers ---

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn grapheme_byte_offset(&self, grapheme_idx: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}
