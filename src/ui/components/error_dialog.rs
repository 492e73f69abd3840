//! Error dialog component for displaying errors to users

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::export::wrap_text;

use super::dialog::{DialogFrame, InstructionBar};
use super::theme::{ACCENT_ERROR, TEXT_MUTED, TEXT_PRIMARY};

const DIALOG_WIDTH: u16 = 56;

/// State for the error dialog
#[derive(Debug, Clone, Default)]
pub struct ErrorDialogState {
    /// Whether the dialog is visible
    pub visible: bool,
    /// Dialog title
    pub title: String,
    /// Main error message
    pub message: String,
    /// Optional technical details
    pub details: Option<String>,
    /// Whether details section is expanded
    pub details_expanded: bool,
}

impl ErrorDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the dialog with a simple error message
    pub fn show(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.visible = true;
        self.title = title.into();
        self.message = message.into();
        self.details = None;
        self.details_expanded = false;
    }

    /// Show the dialog with technical details
    pub fn show_with_details(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) {
        self.show(title, message);
        self.details = Some(details.into());
    }

    /// Hide the dialog and reset state
    pub fn hide(&mut self) {
        self.visible = false;
        self.details_expanded = false;
    }

    pub fn toggle_details(&mut self) {
        if self.details.is_some() {
            self.details_expanded = !self.details_expanded;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_details(&self) -> bool {
        self.details.is_some()
    }
}

/// Error dialog widget
pub struct ErrorDialog<'a> {
    state: &'a ErrorDialogState,
    dismiss_key: String,
    details_key: String,
}

impl<'a> ErrorDialog<'a> {
    pub fn new(state: &'a ErrorDialogState) -> Self {
        Self {
            state,
            dismiss_key: "Esc".to_string(),
            details_key: "d".to_string(),
        }
    }

    /// Key labels shown in the instruction bar
    pub fn keys(mut self, dismiss: impl Into<String>, details: impl Into<String>) -> Self {
        self.dismiss_key = dismiss.into();
        self.details_key = details.into();
        self
    }

    fn wrapped(text: &str, width: u16) -> Vec<String> {
        text.lines()
            .flat_map(|line| wrap_text(line, width.max(1) as usize))
            .collect()
    }
}

impl Widget for ErrorDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.visible {
            return;
        }

        // Inner width less two columns of padding on each side
        let text_width = DIALOG_WIDTH.saturating_sub(6);
        let message = Self::wrapped(&self.state.message, text_width);
        let details = match (&self.state.details, self.state.details_expanded) {
            (Some(details), true) => Self::wrapped(details, text_width),
            _ => Vec::new(),
        };
        let toggle_height = u16::from(self.state.details.is_some());

        // Borders, padding, OK button and instructions
        let height = 8 + message.len() as u16 + toggle_height + details.len() as u16;
        let frame = DialogFrame::new(&self.state.title, DIALOG_WIDTH, height)
            .border_color(ACCENT_ERROR);
        let inner = frame.render(area, buf);

        if inner.height < 4 {
            return;
        }

        let mut lines: Vec<Line> = vec![Line::default()];
        lines.extend(
            message
                .into_iter()
                .map(|l| Line::from(Span::styled(l, Style::default().fg(TEXT_PRIMARY)))),
        );
        lines.push(Line::default());

        if self.state.details.is_some() {
            let toggle = if self.state.details_expanded {
                "▼ Details".to_string()
            } else {
                format!("▶ Details (press '{}' to show)", self.details_key)
            };
            lines.push(Line::from(Span::styled(
                toggle,
                Style::default().fg(TEXT_MUTED),
            )));
            lines.extend(
                details
                    .into_iter()
                    .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::DarkGray)))),
            );
        }

        let body = Rect {
            height: inner.height.saturating_sub(3),
            ..inner
        };
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(body, buf);

        let button_style = Style::default()
            .fg(Color::Black)
            .bg(ACCENT_ERROR)
            .add_modifier(Modifier::BOLD);
        Paragraph::new(Line::from(Span::styled("  OK  ", button_style)))
            .alignment(Alignment::Center)
            .render(
                Rect {
                    y: inner.y + inner.height.saturating_sub(2),
                    height: 1,
                    ..inner
                },
                buf,
            );

        let mut instructions = vec![(self.dismiss_key.clone(), "Dismiss")];
        if self.state.has_details() {
            instructions.push((self.details_key.clone(), "Details"));
        }
        InstructionBar::new(instructions).render(
            Rect {
                y: inner.y + inner.height.saturating_sub(1),
                height: 1,
                ..inner
            },
            buf,
        );
    }
}
