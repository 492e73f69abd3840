//! Header with the brand and wizard progress

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::wizard::{Step, StepController};

use super::help_dialog::APP_NAME;
use super::theme::{ACCENT_PRIMARY, ACCENT_SUCCESS, HEADER_BG, TEXT_FAINT, TEXT_MUTED};

pub struct StepHeader<'a> {
    steps: &'a StepController,
}

impl<'a> StepHeader<'a> {
    pub fn new(steps: &'a StepController) -> Self {
        Self { steps }
    }

    /// "Step 3 of 6"
    pub fn progress_label(steps: &StepController) -> String {
        format!("Step {} of {}", steps.index() + 1, steps.step_count())
    }
}

impl Widget for StepHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let bg = Style::default().bg(HEADER_BG);
        buf.set_style(area, bg);

        let current = self.steps.current();
        let progress = Self::progress_label(self.steps);
        let brand = Span::styled(
            format!(" {} ", APP_NAME),
            Style::default()
                .fg(ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        );
        let title = format!("{} · {} ", progress, current.title());
        let gap = area
            .width
            .saturating_sub((brand.width() + title.chars().count()) as u16);
        Paragraph::new(Line::from(vec![
            brand,
            Span::raw(" ".repeat(gap as usize)),
            Span::styled(title, Style::default().fg(TEXT_MUTED)),
        ]))
        .style(bg)
        .render(Rect { height: 1, ..area }, buf);

        if area.height < 2 {
            return;
        }

        // Step trail: done steps in green, current highlighted, the rest faint
        let mut spans = vec![Span::raw(" ")];
        for (i, step) in Step::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" › ", Style::default().fg(TEXT_FAINT)));
            }
            let style = if *step == current {
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else if i < self.steps.index() {
                Style::default().fg(ACCENT_SUCCESS)
            } else {
                Style::default().fg(TEXT_FAINT)
            };
            spans.push(Span::styled(format!("{} {}", i + 1, step.title()), style));
        }
        Paragraph::new(Line::from(spans)).style(bg).render(
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
            buf,
        );
    }
}
