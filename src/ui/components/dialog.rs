//! Reusable dialog frame and instruction bar components

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Widget},
};

use super::key_hints::{HintBar, KeyHints};
use super::theme::ACCENT_PRIMARY;

/// A centered dialog frame with title and border
pub struct DialogFrame<'a> {
    title: &'a str,
    width: u16,
    height: u16,
    border_color: Color,
}

impl<'a> DialogFrame<'a> {
    pub fn new(title: &'a str, width: u16, height: u16) -> Self {
        Self {
            title,
            width,
            height,
            border_color: ACCENT_PRIMARY,
        }
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Centered area the frame occupies, capped to the screen
    pub fn area(&self, area: Rect) -> Rect {
        let width = self.width.min(area.width.saturating_sub(4));
        let height = self.height.min(area.height.saturating_sub(2));
        Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    /// Render the dialog frame and return the inner area for content
    pub fn render(&self, area: Rect, buf: &mut Buffer) -> Rect {
        let dialog_area = self.area(area);

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color));

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        inner
    }
}

/// An instruction bar showing keyboard shortcuts
pub struct InstructionBar<'a> {
    instructions: Vec<(String, &'a str)>,
}

impl<'a> InstructionBar<'a> {
    pub fn new(instructions: Vec<(String, &'a str)>) -> Self {
        Self { instructions }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        KeyHints::new(&self.instructions, HintBar::Dialog).render(area, buf);
    }
}
