//! Single-line text input with cursor management
//!
//! The cursor is a character index, not a byte offset, so multi-byte input
//! (accents, CJK) edits correctly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Reusable text input state with cursor management
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputState {
    input: String,
    /// Cursor position in characters
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial value, cursor at the end
    pub fn with_value(value: &str) -> Self {
        let mut state = Self::new();
        state.set(value);
        state
    }

    /// Set the input value and move cursor to end
    pub fn set(&mut self, value: &str) {
        self.input = value.to_string();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Byte offset of a character index
    fn byte_at(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn char_at(&self, char_idx: usize) -> Option<char> {
        self.input.chars().nth(char_idx)
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
    }

    /// Insert pasted text; newlines become spaces
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '\r' => {}
                '\n' | '\t' => self.insert_char(' '),
                c => self.insert_char(c),
            }
        }
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_at(self.cursor);
            self.input.remove(at);
        }
    }

    /// Delete character at cursor (delete)
    pub fn delete_forward(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_at(self.cursor);
            self.input.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Delete from cursor to start of line (Ctrl+U)
    pub fn delete_to_start(&mut self) {
        let at = self.byte_at(self.cursor);
        self.input.drain(..at);
        self.cursor = 0;
    }

    /// Delete from cursor to end of line (Ctrl+K)
    pub fn delete_to_end(&mut self) {
        let at = self.byte_at(self.cursor);
        self.input.truncate(at);
    }

    /// Move cursor to previous word boundary (Alt+B)
    pub fn move_word_left(&mut self) {
        while self.cursor > 0 && self.char_at(self.cursor - 1) == Some(' ') {
            self.cursor -= 1;
        }
        while self.cursor > 0 && self.char_at(self.cursor - 1) != Some(' ') {
            self.cursor -= 1;
        }
    }

    /// Move cursor to next word boundary (Alt+F)
    pub fn move_word_right(&mut self) {
        let len = self.char_count();
        while self.cursor < len && self.char_at(self.cursor) != Some(' ') {
            self.cursor += 1;
        }
        while self.cursor < len && self.char_at(self.cursor) == Some(' ') {
            self.cursor += 1;
        }
    }

    /// Delete word before cursor (Ctrl+W)
    pub fn delete_word(&mut self) {
        let end = self.byte_at(self.cursor);
        self.move_word_left();
        let start = self.byte_at(self.cursor);
        self.input.drain(start..end);
    }

    /// Render the value, or the placeholder when empty. With `focused`, the
    /// cell under the cursor is reversed and the text scrolls to keep the
    /// cursor visible.
    pub fn render(
        &self,
        area: Rect,
        buf: &mut Buffer,
        style: Style,
        placeholder: (&str, Style),
        focused: bool,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.input.is_empty() {
            Paragraph::new(placeholder.0)
                .style(placeholder.1)
                .render(area, buf);
        } else {
            let before: String = self.input.chars().take(self.cursor).collect();
            let cursor_col = before.width() as u16;
            let scroll = cursor_col.saturating_sub(area.width.saturating_sub(1));
            Paragraph::new(self.input.as_str())
                .style(style)
                .scroll((0, scroll))
                .render(area, buf);
        }

        if focused {
            let before: String = self.input.chars().take(self.cursor).collect();
            let col = (before.width() as u16).min(area.width.saturating_sub(1));
            buf[(area.x + col, area.y)].set_style(Style::default().add_modifier(Modifier::REVERSED));
        }
    }
}
