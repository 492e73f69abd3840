//! Help dialog showing the keybindings and a short description of the app
//!
//! Keybindings are grouped by the context they apply in. The dialog scrolls
//! when the list is taller than the screen.

use std::collections::HashMap;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::{KeyContext, KeybindingConfig};
use crate::export::wrap_text;
use crate::ui::action::Action;

use super::dialog::{DialogFrame, InstructionBar};
use super::theme::{ACCENT_PRIMARY, ACCENT_WARNING, TEXT_PRIMARY, TEXT_SECONDARY};

pub const APP_NAME: &str = "ResumeForge";

pub const ABOUT_TEXT: &str = "ResumeForge is a cutting-edge resume builder that combines modern \
design with intuitive user experience to help you create professional, eye-catching resumes \
effortlessly.";

/// A keybinding entry for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeybindingEntry {
    pub action_description: String,
    pub key_display: String,
}

/// Category for grouping keybindings in the help dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelpCategory {
    Global,
    Readline,
    Form,
    MovingEntries,
    Dialog,
}

impl HelpCategory {
    pub fn title(&self) -> &'static str {
        match self {
            HelpCategory::Global => "GLOBAL",
            HelpCategory::Readline => "TEXT EDITING",
            HelpCategory::Form => "FORM",
            HelpCategory::MovingEntries => "MOVING ENTRIES",
            HelpCategory::Dialog => "DIALOG",
        }
    }

    fn order(&self) -> usize {
        match self {
            HelpCategory::Global => 0,
            HelpCategory::Form => 1,
            HelpCategory::Readline => 2,
            HelpCategory::MovingEntries => 3,
            HelpCategory::Dialog => 4,
        }
    }

    fn for_context(context: KeyContext, action: Action) -> Self {
        if is_readline_action(action) {
            return HelpCategory::Readline;
        }
        match context {
            KeyContext::Global => HelpCategory::Global,
            KeyContext::Form => HelpCategory::Form,
            KeyContext::Dragging => HelpCategory::MovingEntries,
            KeyContext::Dialog => HelpCategory::Dialog,
        }
    }
}

fn is_readline_action(action: Action) -> bool {
    matches!(
        action,
        Action::MoveCursorLeft
            | Action::MoveCursorRight
            | Action::MoveCursorStart
            | Action::MoveCursorEnd
            | Action::MoveWordLeft
            | Action::MoveWordRight
            | Action::Backspace
            | Action::Delete
            | Action::DeleteWordBack
            | Action::DeleteToStart
            | Action::DeleteToEnd
    )
}

/// State for the help dialog
#[derive(Debug, Clone)]
pub struct HelpDialogState {
    pub visible: bool,
    /// Keybindings organized by category, in display order
    entries: Vec<(HelpCategory, Vec<KeybindingEntry>)>,
    pub scroll_offset: usize,
    /// Visible height (set during render)
    visible_height: usize,
}

impl Default for HelpDialogState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpDialogState {
    pub fn new() -> Self {
        Self {
            visible: false,
            entries: Vec::new(),
            scroll_offset: 0,
            visible_height: 20,
        }
    }

    /// Show the dialog and populate with keybindings
    pub fn show(&mut self, config: &KeybindingConfig) {
        self.visible = true;
        self.scroll_offset = 0;
        self.populate_entries(config);
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn entries(&self) -> &[(HelpCategory, Vec<KeybindingEntry>)] {
        &self.entries
    }

    fn populate_entries(&mut self, config: &KeybindingConfig) {
        let mut categories: HashMap<HelpCategory, Vec<KeybindingEntry>> = HashMap::new();

        let bindings = config
            .global
            .iter()
            .map(|(combo, action)| (KeyContext::Global, combo, action))
            .chain(config.context.iter().flat_map(|(ctx, bindings)| {
                bindings.iter().map(move |(combo, action)| (*ctx, combo, action))
            }));

        for (context, combo, action) in bindings {
            categories
                .entry(HelpCategory::for_context(context, *action))
                .or_default()
                .push(KeybindingEntry {
                    action_description: action.description().to_string(),
                    key_display: combo.to_string(),
                });
        }

        let mut entries: Vec<_> = categories.into_iter().collect();
        entries.sort_by_key(|(cat, _)| cat.order());

        // One row per action; alternative keys are joined
        for (_, items) in &mut entries {
            items.sort_by(|a, b| {
                (&a.action_description, a.key_display.len(), &a.key_display).cmp(&(
                    &b.action_description,
                    b.key_display.len(),
                    &b.key_display,
                ))
            });
            let mut merged: Vec<KeybindingEntry> = Vec::new();
            for item in items.drain(..) {
                match merged.last_mut() {
                    Some(last) if last.action_description == item.action_description => {
                        if !last.key_display.split(", ").any(|k| k == item.key_display) {
                            last.key_display.push_str(", ");
                            last.key_display.push_str(&item.key_display);
                        }
                    }
                    _ => merged.push(item),
                }
            }
            *items = merged;
        }

        self.entries = entries;
    }

    /// All rows of the dialog body for a given width
    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let header = Style::default()
            .fg(ACCENT_WARNING)
            .add_modifier(Modifier::BOLD);
        let mut lines = vec![Line::from(Span::styled("ABOUT", header))];
        lines.extend(
            wrap_text(ABOUT_TEXT, width as usize)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, Style::default().fg(TEXT_SECONDARY)))),
        );

        let key_width = self
            .entries
            .iter()
            .flat_map(|(_, items)| items.iter())
            .map(|e| e.key_display.chars().count())
            .max()
            .unwrap_or(8)
            .clamp(8, 24);

        for (category, items) in &self.entries {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(category.title(), header)));
            for entry in items {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:>width$}", entry.key_display, width = key_width),
                        Style::default().fg(ACCENT_PRIMARY),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        entry.action_description.clone(),
                        Style::default().fg(TEXT_PRIMARY),
                    ),
                ]));
            }
        }
        lines
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    /// Scroll down; the bound is applied at render time when the height is known
    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(amount);
    }
}

/// Help dialog widget
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, state: &mut HelpDialogState) {
        if !state.visible {
            return;
        }

        let dialog_width = (area.width * 70 / 100).clamp(50, 80);
        let dialog_height = (area.height * 80 / 100).clamp(15, 35);

        let title = format!("{} - Help", APP_NAME);
        let frame = DialogFrame::new(&title, dialog_width, dialog_height);
        let inner = frame.render(area, buf);

        if inner.height < 3 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let content = Rect {
            x: chunks[0].x + 1,
            width: chunks[0].width.saturating_sub(2),
            ..chunks[0]
        };
        let lines = state.lines(content.width);
        state.visible_height = content.height as usize;
        let max_scroll = lines.len().saturating_sub(state.visible_height);
        state.scroll_offset = state.scroll_offset.min(max_scroll);

        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .scroll((state.scroll_offset as u16, 0))
            .render(content, buf);

        InstructionBar::new(vec![
            ("Esc/q".to_string(), "Close"),
            ("↑↓/jk".to_string(), "Scroll"),
        ])
        .render(chunks[1], buf);
    }
}

impl Default for HelpDialog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_keybindings;

    #[test]
    fn test_entries_grouped_by_context() {
        let mut state = HelpDialogState::new();
        state.show(&default_keybindings());

        let categories: Vec<_> = state.entries().iter().map(|(c, _)| *c).collect();
        assert_eq!(categories[0], HelpCategory::Global);
        assert!(categories.contains(&HelpCategory::MovingEntries));

        let (_, dragging) = state
            .entries()
            .iter()
            .find(|(c, _)| *c == HelpCategory::MovingEntries)
            .unwrap();
        let drop = dragging
            .iter()
            .find(|e| e.action_description == "Drop")
            .unwrap();
        assert_eq!(drop.key_display, "<CR>, <Space>");
    }

    #[test]
    fn test_scroll_is_clamped_on_render() {
        let mut state = HelpDialogState::new();
        state.show(&default_keybindings());
        state.scroll_down(10_000);

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        HelpDialog::new().render(area, &mut buf, &mut state);
        assert!(state.scroll_offset < 10_000);

        state.scroll_up(usize::MAX);
        assert_eq!(state.scroll_offset, 0);
    }
}
