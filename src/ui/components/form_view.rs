//! The wizard form: inputs for the current step and its navigation buttons

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::data::{EntryField, PersonalField, Section};
use crate::ui::session::{FocusTarget, WizardSession};
use crate::wizard::{PrimaryAction, StepContent};

use super::theme::{
    ACCENT_PRIMARY, ACCENT_SUCCESS, BORDER_DEFAULT, BORDER_FOCUSED, DROP_TARGET_BG, SELECTED_BG,
    TEXT_FAINT, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

pub const REVIEW_MESSAGE: &str = "Great job! You've completed all steps. Review your resume \
below and click the \"Export as PDF\" button when you're ready to download.";

const LABEL_WIDTH: u16 = 17;

/// Key labels shown inside the form
#[derive(Debug, Clone, Default)]
pub struct FormKeys {
    pub add_entry: String,
    pub remove_entry: String,
    pub start_drag: String,
    pub export: String,
}

pub struct FormView<'a> {
    session: &'a WizardSession,
    keys: &'a FormKeys,
}

impl<'a> FormView<'a> {
    pub fn new(session: &'a WizardSession, keys: &'a FormKeys) -> Self {
        Self { session, keys }
    }

    fn input_style() -> Style {
        Style::default().fg(TEXT_PRIMARY)
    }

    fn placeholder_style() -> Style {
        Style::default().fg(TEXT_FAINT)
    }

    /// A bordered input titled with its label
    fn render_boxed_input(
        &self,
        area: Rect,
        buf: &mut Buffer,
        label: &str,
        value: &str,
        focused: bool,
    ) {
        let border = if focused { BORDER_FOCUSED } else { BORDER_DEFAULT };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                format!(" {} ", label),
                Style::default().fg(TEXT_SECONDARY),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        if focused {
            self.session.input().render(
                inner,
                buf,
                Self::input_style(),
                (label, Self::placeholder_style()),
                true,
            );
        } else if value.is_empty() {
            Paragraph::new(label)
                .style(Self::placeholder_style())
                .render(inner, buf);
        } else {
            Paragraph::new(value)
                .style(Self::input_style())
                .render(inner, buf);
        }
    }

    fn render_fields(&self, area: Rect, buf: &mut Buffer, fields: &[PersonalField]) {
        let focus = self.session.focus();
        let mut y = area.y;
        for field in fields {
            if y + 3 > area.y + area.height {
                break;
            }
            let row = Rect::new(area.x, y, area.width, 3);
            let focused = focus == FocusTarget::Personal(*field);
            let value = self.session.document().personal(*field);
            self.render_boxed_input(row, buf, field.input_hint(), value, focused);
            y += 3;
        }
    }

    fn render_skills(&self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 {
            return;
        }
        let row = Rect::new(area.x, area.y, area.width, 3);
        let label = "Skills (comma-separated)";
        let focused = self.session.focus() == FocusTarget::Skills;
        let text = self.session.store().skills_text();
        self.render_boxed_input(row, buf, label, &text, focused);

        let skills = &self.session.document().skills;
        if skills.is_empty() || area.height < 5 {
            return;
        }
        let mut spans = vec![Span::styled("Parsed: ", Style::default().fg(TEXT_MUTED))];
        for (i, skill) in skills.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", Style::default().fg(TEXT_FAINT)));
            }
            spans.push(Span::styled(
                skill.clone(),
                Style::default().fg(ACCENT_PRIMARY),
            ));
        }
        Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .render(
                Rect::new(area.x + 1, area.y + 4, area.width.saturating_sub(2), area.height - 4),
                buf,
            );
    }

    fn entry_label(section: Section) -> &'static str {
        match section {
            Section::Experience => "Experience",
            Section::Education => "Education",
        }
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer, section: Section) {
        let len = self.session.document().section_len(section);
        if len == 0 {
            let msg = format!(
                "No entries. Press {} to add one.",
                self.keys.add_entry
            );
            Paragraph::new(msg)
                .style(Style::default().fg(TEXT_MUTED))
                .render(area, buf);
            return;
        }

        let fields = EntryField::all(section);
        let entry_height = fields.len() as u16 + 2;
        let selected = self.session.selected_entry();
        let drag = self.session.drag();

        // Keep the selected entry (or drop target) on screen
        let anchor = drag.map(|d| d.target).unwrap_or(selected);
        let per_screen = (area.height / entry_height).max(1) as usize;
        let first = (anchor + 1).saturating_sub(per_screen);

        let mut y = area.y;
        for index in first..len {
            if y + entry_height > area.y + area.height {
                break;
            }
            let rect = Rect::new(area.x, y, area.width, entry_height);
            self.render_entry(rect, buf, section, index, &fields);
            y += entry_height;
        }

        if len > per_screen {
            let more = format!("{} of {}", selected + 1, len);
            let width = more.len() as u16;
            if area.width > width {
                Paragraph::new(more)
                    .style(Style::default().fg(TEXT_FAINT))
                    .render(
                        Rect::new(
                            area.x + area.width - width,
                            area.y + area.height.saturating_sub(1),
                            width,
                            1,
                        ),
                        buf,
                    );
            }
        }
    }

    fn render_entry(
        &self,
        area: Rect,
        buf: &mut Buffer,
        section: Section,
        index: usize,
        fields: &[EntryField],
    ) {
        let selected = index == self.session.selected_entry();
        let drag = self.session.drag();
        let is_source = drag.is_some_and(|d| d.source == index);
        let is_target = drag.is_some_and(|d| d.target == index);

        let mut title = format!(" {} {} ", Self::entry_label(section), index + 1);
        if is_source {
            title.push_str("(moving) ");
        }
        let border = if selected || is_target {
            BORDER_FOCUSED
        } else {
            BORDER_DEFAULT
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(title, Style::default().fg(TEXT_SECONDARY)));
        if is_target && !is_source {
            block = block.style(Style::default().bg(DROP_TARGET_BG));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        let focus = self.session.focus();
        for (row, field) in fields.iter().enumerate() {
            let y = inner.y + row as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let focused = drag.is_none() && focus == FocusTarget::Entry { index, field: *field };
            let label_style = if focused {
                Style::default().fg(ACCENT_PRIMARY).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_MUTED)
            };
            Paragraph::new(field.input_hint())
                .style(label_style)
                .render(Rect::new(inner.x, y, LABEL_WIDTH.min(inner.width), 1), buf);

            let value_area = Rect::new(
                inner.x + LABEL_WIDTH.min(inner.width),
                y,
                inner.width.saturating_sub(LABEL_WIDTH),
                1,
            );
            if focused {
                self.session.input().render(
                    value_area,
                    buf,
                    Self::input_style(),
                    ("", Self::placeholder_style()),
                    true,
                );
            } else {
                let value = self
                    .session
                    .store()
                    .entry_field(index, *field)
                    .unwrap_or_default();
                let style = if selected {
                    Self::input_style().bg(SELECTED_BG)
                } else {
                    Self::input_style()
                };
                Paragraph::new(value).style(style).render(value_area, buf);
            }
        }
    }

    fn render_review(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                REVIEW_MESSAGE,
                Style::default().fg(TEXT_PRIMARY),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(TEXT_MUTED)),
                Span::styled(
                    self.keys.export.clone(),
                    Style::default().fg(ACCENT_SUCCESS).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    " or Enter to export as PDF.",
                    Style::default().fg(TEXT_MUTED),
                ),
            ]),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_buttons(&self, area: Rect, buf: &mut Buffer) {
        let steps = self.session.steps();
        let back_style = if steps.can_go_back() {
            Style::default().fg(TEXT_SECONDARY)
        } else {
            Style::default().fg(TEXT_FAINT)
        };
        let (primary, primary_style) = match steps.primary_action() {
            PrimaryAction::Next => (
                "[ Next → ]",
                Style::default().fg(ACCENT_PRIMARY).add_modifier(Modifier::BOLD),
            ),
            PrimaryAction::Export => (
                "[ Export as PDF ]",
                Style::default().fg(ACCENT_SUCCESS).add_modifier(Modifier::BOLD),
            ),
        };

        let back = "[ ← Previous ]";
        let gap = area
            .width
            .saturating_sub((back.chars().count() + primary.chars().count()) as u16);
        let line = Line::from(vec![
            Span::styled(back, back_style),
            Span::raw(" ".repeat(gap as usize)),
            Span::styled(primary, primary_style),
        ]);
        Paragraph::new(line).render(area, buf);
    }

    fn render_list_hints(&self, area: Rect, buf: &mut Buffer) {
        let hint = if self.session.drag().is_some() {
            "Moving entry: ↑/↓ choose position, Enter drop, Esc cancel".to_string()
        } else {
            format!(
                "{} add · {} remove · {} move",
                self.keys.add_entry, self.keys.remove_entry, self.keys.start_drag
            )
        };
        Paragraph::new(hint)
            .style(Style::default().fg(TEXT_FAINT))
            .render(area, buf);
    }
}

impl Widget for FormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 4 || area.width < 10 {
            return;
        }

        let step = self.session.current_step();
        let content = step.content();
        let list_hint_height = u16::from(matches!(content, StepContent::List(_)));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(list_hint_height),
                Constraint::Length(1),
            ])
            .split(area);

        Paragraph::new(Line::from(Span::styled(
            step.section_heading(),
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )))
        .render(chunks[0], buf);

        match content {
            StepContent::Fields(fields) => self.render_fields(chunks[1], buf, fields),
            StepContent::List(section) => {
                self.render_list(chunks[1], buf, section);
                self.render_list_hints(chunks[2], buf);
            }
            StepContent::Skills => self.render_skills(chunks[1], buf),
            StepContent::Review => self.render_review(chunks[1], buf),
        }

        self.render_buttons(chunks[3], buf);
    }
}
