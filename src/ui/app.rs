use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};

use crate::config::{Config, KeyCombo, KeyContext};
use crate::data::ResumeDocument;
use crate::export::PdfExporter;
use crate::ui::action::Action;
use crate::ui::components::{
    ErrorDialog, ErrorDialogState, FormKeys, FormView, GlobalFooter, HelpDialog,
    HelpDialogState, PreviewPane, StatusMessage, StepHeader,
};
use crate::ui::events::{AppEvent, InputMode};
use crate::ui::session::{ConfirmOutcome, WizardSession};
use crate::ui::terminal_guard::TerminalGuard;

/// How long a status message stays in the footer
const STATUS_TIMEOUT: Duration = Duration::from_secs(6);

/// Below this width the preview is stacked under the form
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 100;

/// Main application state
pub struct App {
    /// Application configuration
    config: Config,
    /// Whether the app should quit
    should_quit: bool,
    /// The resume being built
    session: WizardSession,
    exporter: PdfExporter,
    /// Current input mode
    input_mode: InputMode,
    help_dialog: HelpDialogState,
    error_dialog: ErrorDialogState,
    status: Option<(StatusMessage, Instant)>,
    preview_scroll: u16,
    /// Preview area from the last draw, for clamping scroll
    preview_area: Rect,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_document(config, ResumeDocument::default())
    }

    /// Start the wizard from an existing document
    pub fn with_document(config: Config, document: ResumeDocument) -> Self {
        let exporter = PdfExporter::new(config.page);
        Self {
            config,
            should_quit: false,
            session: WizardSession::with_document(document),
            exporter,
            input_mode: InputMode::Editing,
            help_dialog: HelpDialogState::new(),
            error_dialog: ErrorDialogState::new(),
            status: None,
            preview_scroll: 0,
            preview_area: Rect::default(),
        }
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref().map(|(msg, _)| msg)
    }

    pub fn error_dialog(&self) -> &ErrorDialogState {
        &self.error_dialog
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        guard.cleanup()?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut ticker = tokio::time::interval(Duration::from_millis(250));
        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    // Drain everything queued so fast typing doesn't lag a frame per key
                    while event::poll(Duration::from_millis(0))? {
                        self.handle_app_event(AppEvent::Input(event::read()?));
                    }
                }
                _ = ticker.tick() => {
                    self.handle_app_event(AppEvent::Tick);
                }
            }

            if self.should_quit {
                break;
            }
        }

        tracing::info!("Wizard closed");
        Ok(())
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(Event::Key(key)) => self.handle_key_event(key),
            AppEvent::Input(Event::Paste(text)) => self.handle_paste(&text),
            AppEvent::Input(_) => {}
            AppEvent::Tick => {
                if self
                    .status
                    .as_ref()
                    .is_some_and(|(_, at)| at.elapsed() >= STATUS_TIMEOUT)
                {
                    self.status = None;
                }
            }
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        let context = self.input_mode.key_context();
        let combo = KeyCombo::from_key_event(&key);
        if let Some(action) = self.config.keybindings.get_action(&combo, context) {
            self.execute_action(action);
            return;
        }

        // Unbound printable keys are text for the focused input
        if context == KeyContext::Form {
            if let event::KeyCode::Char(c) = key.code {
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    self.session.insert_char(c);
                }
            }
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        if self.input_mode == InputMode::Editing {
            self.session.paste(text);
        }
    }

    pub fn execute_action(&mut self, action: Action) {
        tracing::trace!(?action, mode = ?self.input_mode, "Executing action");
        match action {
            Action::Quit => self.should_quit = true,
            Action::Export => self.export(),
            Action::NextStep => {
                self.session.next_step();
            }
            Action::PrevStep => {
                self.session.prev_step();
            }
            Action::ShowHelp => {
                self.help_dialog.show(&self.config.keybindings);
                self.input_mode = InputMode::ShowingHelp;
            }
            Action::ScrollPreviewUp => {
                if self.input_mode == InputMode::ShowingHelp {
                    self.help_dialog.scroll_up(1);
                } else {
                    self.preview_scroll = self.preview_scroll.saturating_sub(1);
                }
            }
            Action::ScrollPreviewDown => {
                if self.input_mode == InputMode::ShowingHelp {
                    self.help_dialog.scroll_down(1);
                } else {
                    let max = PreviewPane::max_scroll(
                        self.session.preview(),
                        self.preview_area,
                    );
                    self.preview_scroll = (self.preview_scroll + 1).min(max);
                }
            }

            Action::NextField => {
                self.session.next_field();
            }
            Action::PrevField => {
                self.session.prev_field();
            }
            Action::Confirm => {
                if self.session.confirm() == ConfirmOutcome::Export {
                    self.export();
                }
            }

            Action::Backspace => {
                self.session.edit(|input| input.delete_char());
            }
            Action::Delete => {
                self.session.edit(|input| input.delete_forward());
            }
            Action::DeleteWordBack => {
                self.session.edit(|input| input.delete_word());
            }
            Action::DeleteToStart => {
                self.session.edit(|input| input.delete_to_start());
            }
            Action::DeleteToEnd => {
                self.session.edit(|input| input.delete_to_end());
            }
            Action::MoveCursorLeft => {
                self.session.edit(|input| input.move_left());
            }
            Action::MoveCursorRight => {
                self.session.edit(|input| input.move_right());
            }
            Action::MoveCursorStart => {
                self.session.edit(|input| input.move_start());
            }
            Action::MoveCursorEnd => {
                self.session.edit(|input| input.move_end());
            }
            Action::MoveWordLeft => {
                self.session.edit(|input| input.move_word_left());
            }
            Action::MoveWordRight => {
                self.session.edit(|input| input.move_word_right());
            }

            Action::AddEntry => {
                self.session.add_entry();
            }
            Action::RemoveEntry => {
                self.session.remove_entry();
            }
            Action::SelectNextEntry => {
                self.session.select_next_entry();
            }
            Action::SelectPrevEntry => {
                self.session.select_prev_entry();
            }
            Action::StartDrag => {
                if self.session.start_drag() {
                    self.input_mode = InputMode::Dragging;
                }
            }

            Action::DragUp => self.session.drag_up(),
            Action::DragDown => self.session.drag_down(),
            Action::Drop => {
                self.session.drop_entry();
                self.input_mode = InputMode::Editing;
            }
            Action::CancelDrag => {
                self.session.cancel_drag();
                self.input_mode = InputMode::Editing;
            }

            Action::CloseDialog => {
                self.help_dialog.hide();
                self.error_dialog.hide();
                self.input_mode = InputMode::Editing;
            }
            Action::ToggleDetails => self.error_dialog.toggle_details(),
        }
    }

    /// Write resume.pdf; failures open the error dialog
    fn export(&mut self) {
        match self.session.export(&self.exporter, &self.config.output_dir) {
            Ok(path) => {
                let msg = format!("Saved {}", path.display());
                self.status = Some((StatusMessage::Success(msg), Instant::now()));
            }
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                self.error_dialog.show_with_details(
                    "Export Failed",
                    "Your resume could not be saved as a PDF.",
                    e.to_string(),
                );
                self.status = Some((
                    StatusMessage::Error("Export failed".to_string()),
                    Instant::now(),
                ));
                self.input_mode = InputMode::ShowingError;
            }
        }
    }

    fn key_label(&self, action: Action) -> String {
        self.config
            .keybindings
            .key_for(action, KeyContext::Form)
            .map(|k| k.to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let area = f.area();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        f.render_widget(StepHeader::new(self.session.steps()), rows[0]);

        let direction = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };
        let body = Layout::default()
            .direction(direction)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        let form_area = Rect {
            x: body[0].x + 1,
            width: body[0].width.saturating_sub(2),
            ..body[0]
        };
        let keys = FormKeys {
            add_entry: self.key_label(Action::AddEntry),
            remove_entry: self.key_label(Action::RemoveEntry),
            start_drag: self.key_label(Action::StartDrag),
            export: self.key_label(Action::Export),
        };
        f.render_widget(FormView::new(&self.session, &keys), form_area);

        self.preview_area = body[1];
        let max_scroll = PreviewPane::max_scroll(self.session.preview(), body[1]);
        self.preview_scroll = self.preview_scroll.min(max_scroll);
        f.render_widget(
            PreviewPane::new(self.session.preview(), self.preview_scroll),
            body[1],
        );

        let footer = GlobalFooter::from_state(
            &self.config.keybindings,
            self.input_mode,
            self.session.current_step().content(),
        )
        .status(self.status.as_ref().map(|(msg, _)| msg));
        f.render_widget(footer, rows[2]);

        match self.input_mode {
            InputMode::ShowingHelp => {
                HelpDialog::new().render(area, f.buffer_mut(), &mut self.help_dialog);
            }
            InputMode::ShowingError => {
                let dismiss = self
                    .config
                    .keybindings
                    .key_for(Action::CloseDialog, KeyContext::Dialog)
                    .map(|k| k.to_string())
                    .unwrap_or_default();
                let details = self
                    .config
                    .keybindings
                    .key_for(Action::ToggleDetails, KeyContext::Dialog)
                    .map(|k| k.to_string())
                    .unwrap_or_default();
                f.render_widget(
                    ErrorDialog::new(&self.error_dialog).keys(dismiss, details),
                    area,
                );
            }
            InputMode::Editing | InputMode::Dragging => {}
        }
    }
}
