//! Key hint rows for the footer and dialog instruction bars

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{
    ACCENT_PRIMARY, FOOTER_BG, KEY_HINT_BG, TEXT_FAINT, TEXT_MUTED, TEXT_SECONDARY,
};

/// Where a hint row is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintBar {
    /// Bottom of the screen: boxed keys on the footer background
    Footer,
    /// Bottom of a dialog: centered, separated by bars
    Dialog,
}

impl HintBar {
    fn key_span(self, key: &str) -> Span<'static> {
        match self {
            HintBar::Footer => Span::styled(
                format!(" {} ", key),
                Style::default().fg(TEXT_SECONDARY).bg(KEY_HINT_BG),
            ),
            HintBar::Dialog => Span::styled(key.to_string(), Style::default().fg(ACCENT_PRIMARY)),
        }
    }

    fn action_span(self, action: &str) -> Span<'static> {
        let fg = match self {
            HintBar::Footer => TEXT_MUTED,
            HintBar::Dialog => TEXT_SECONDARY,
        };
        Span::styled(format!(" {}", action), Style::default().fg(fg))
    }

    fn gap(self) -> Span<'static> {
        match self {
            HintBar::Footer => Span::raw("  "),
            HintBar::Dialog => Span::styled(" │ ", Style::default().fg(TEXT_FAINT)),
        }
    }
}

/// A row of `key action` pairs
pub struct KeyHints<'a> {
    hints: &'a [(String, &'a str)],
    bar: HintBar,
}

impl<'a> KeyHints<'a> {
    pub fn new(hints: &'a [(String, &'a str)], bar: HintBar) -> Self {
        Self { hints, bar }
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.hints.len() * 3 + 1);
        if self.bar == HintBar::Footer {
            spans.push(Span::raw(" "));
        }
        for (i, (key, action)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(self.bar.gap());
            }
            spans.push(self.bar.key_span(key));
            spans.push(self.bar.action_span(action));
        }
        Line::from(spans)
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(self.line());
        let paragraph = match self.bar {
            HintBar::Footer => paragraph.style(Style::default().bg(FOOTER_BG)),
            HintBar::Dialog => paragraph.alignment(Alignment::Center),
        };
        paragraph.render(area, buf);
    }
}
