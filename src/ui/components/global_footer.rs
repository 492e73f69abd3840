use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::{KeyContext, KeybindingConfig};
use crate::ui::action::Action;
use crate::ui::components::{HintBar, KeyHints};
use crate::ui::events::InputMode;
use crate::wizard::StepContent;

use super::theme::{ACCENT_ERROR, ACCENT_SUCCESS, FOOTER_BG, KEY_HINT_BG};

/// Context for determining which footer hints to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FooterContext {
    /// Editing a step with plain inputs
    #[default]
    Form,
    /// Editing a list step
    List,
    /// Moving an entry
    Dragging,
    /// A dialog is open
    Dialog,
}

impl FooterContext {
    pub fn from_state(input_mode: InputMode, content: StepContent) -> Self {
        match input_mode {
            InputMode::Dragging => FooterContext::Dragging,
            InputMode::ShowingHelp | InputMode::ShowingError => FooterContext::Dialog,
            InputMode::Editing => match content {
                StepContent::List(_) => FooterContext::List,
                _ => FooterContext::Form,
            },
        }
    }

    fn actions(&self) -> (KeyContext, &'static [Action]) {
        match self {
            FooterContext::Form => (
                KeyContext::Form,
                &[
                    Action::NextField,
                    Action::NextStep,
                    Action::PrevStep,
                    Action::ShowHelp,
                    Action::Quit,
                ],
            ),
            FooterContext::List => (
                KeyContext::Form,
                &[
                    Action::NextField,
                    Action::AddEntry,
                    Action::RemoveEntry,
                    Action::StartDrag,
                    Action::NextStep,
                    Action::PrevStep,
                    Action::Quit,
                ],
            ),
            FooterContext::Dragging => (
                KeyContext::Dragging,
                &[
                    Action::DragUp,
                    Action::DragDown,
                    Action::Drop,
                    Action::CancelDrag,
                ],
            ),
            FooterContext::Dialog => (
                KeyContext::Dialog,
                &[Action::CloseDialog, Action::ScrollPreviewDown],
            ),
        }
    }
}

/// A transient message shown at the right of the footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

/// Global footer: key hints on the left, export trigger (or a status
/// message) on the right
pub struct GlobalFooter<'a> {
    hints: Vec<(String, &'static str)>,
    export_key: Option<String>,
    status: Option<&'a StatusMessage>,
}

impl<'a> GlobalFooter<'a> {
    /// Create footer from app state, showing the keys currently bound
    pub fn from_state(
        keybindings: &KeybindingConfig,
        input_mode: InputMode,
        content: StepContent,
    ) -> Self {
        let context = FooterContext::from_state(input_mode, content);
        let (key_context, actions) = context.actions();
        let hints = actions
            .iter()
            .filter_map(|action| {
                keybindings
                    .key_for(*action, key_context)
                    .map(|key| (key.to_string(), action.description()))
            })
            .collect();
        let export_key = keybindings
            .key_for(Action::Export, KeyContext::Form)
            .map(|k| k.to_string());
        Self {
            hints,
            export_key,
            status: None,
        }
    }

    pub fn status(mut self, status: Option<&'a StatusMessage>) -> Self {
        self.status = status;
        self
    }

    pub fn hints(&self) -> &[(String, &'static str)] {
        &self.hints
    }

    fn right_side(&self) -> Option<Span<'static>> {
        match self.status {
            Some(StatusMessage::Success(msg)) => Some(Span::styled(
                format!(" {} ", msg),
                Style::default().fg(ACCENT_SUCCESS),
            )),
            Some(StatusMessage::Error(msg)) => Some(Span::styled(
                format!(" {} ", msg),
                Style::default().fg(ACCENT_ERROR),
            )),
            None => self.export_key.as_ref().map(|key| {
                Span::styled(
                    format!(" Export as PDF ({}) ", key),
                    Style::default()
                        .fg(ACCENT_SUCCESS)
                        .bg(KEY_HINT_BG)
                        .add_modifier(Modifier::BOLD),
                )
            }),
        }
    }
}

impl Widget for GlobalFooter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        KeyHints::new(&self.hints, HintBar::Footer).render(area, buf);

        if let Some(right) = self.right_side() {
            let width = (right.width() as u16).min(area.width);
            let rect = Rect {
                x: area.x + area.width - width,
                width,
                ..area
            };
            Paragraph::new(Line::from(right))
                .style(Style::default().bg(FOOTER_BG))
                .render(rect, buf);
        }
    }
}
