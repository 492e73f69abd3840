//! Live resume preview
//!
//! Renders the flattened preview lines with one style per line kind.
//! Placeholder text is dimmed so the user can tell it apart from input.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::export::wrap_text;
use crate::preview::{LineKind, Preview, PreviewLine};

use super::theme::{ACCENT_PRIMARY, BORDER_DEFAULT, TEXT_FAINT, TEXT_MUTED, TEXT_PRIMARY};

pub struct PreviewPane<'a> {
    preview: &'a Preview,
    scroll: u16,
}

impl<'a> PreviewPane<'a> {
    pub fn new(preview: &'a Preview, scroll: u16) -> Self {
        Self { preview, scroll }
    }

    fn block() -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DEFAULT))
            .title(Span::styled(" Preview ", Style::default().fg(TEXT_MUTED)))
    }

    fn style_for(line: &PreviewLine) -> Style {
        let style = match line.kind {
            LineKind::Name => Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
            LineKind::Heading => Style::default()
                .fg(ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            LineKind::EntryTitle => Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
            LineKind::EntrySubtitle | LineKind::Body => Style::default().fg(TEXT_PRIMARY),
            LineKind::Contact | LineKind::Meta => Style::default().fg(TEXT_MUTED),
            LineKind::Blank => Style::default(),
        };
        if line.placeholder {
            style.fg(TEXT_FAINT).add_modifier(Modifier::ITALIC)
        } else {
            style
        }
    }

    /// Wrapped display lines for a content width
    fn display_lines(preview: &Preview, width: u16) -> Vec<Line<'static>> {
        let mut out = Vec::new();
        for line in preview.lines() {
            let style = Self::style_for(&line);
            let centered = matches!(line.kind, LineKind::Name | LineKind::Contact);
            if line.text.is_empty() {
                out.push(Line::default());
                continue;
            }
            for piece in wrap_text(&line.text, width as usize) {
                let mut display = Line::from(Span::styled(piece, style));
                if centered {
                    display = display.alignment(Alignment::Center);
                }
                out.push(display);
            }
        }
        out
    }

    /// Largest useful scroll offset for a pane of this size
    pub fn max_scroll(preview: &Preview, area: Rect) -> u16 {
        let inner = Self::block().inner(area);
        let total = Self::display_lines(preview, inner.width.saturating_sub(2)).len();
        total.saturating_sub(inner.height as usize) as u16
    }
}

impl Widget for PreviewPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Self::block();
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 3 || inner.height == 0 {
            return;
        }

        let content = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            ..inner
        };
        let lines = Self::display_lines(self.preview, content.width);
        Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .render(content, buf);
    }
}
