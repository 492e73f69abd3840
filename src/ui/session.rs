//! Wizard session: the store, the current step and form focus
//!
//! The session owns everything the form needs between key presses. The
//! focused field is mirrored in a [`TextInputState`]; every edit writes the
//! input's value straight back into the store, so the preview always reflects
//! what is on screen.

use std::path::{Path, PathBuf};

use crate::data::{EntryField, PersonalField, ResumeDocument, ResumeStore, Section};
use crate::export::{ExportError, Exporter};
use crate::preview::{Preview, PreviewCache};
use crate::ui::components::TextInputState;
use crate::wizard::{PrimaryAction, Step, StepContent, StepController};

/// The input that currently receives typed text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Personal(PersonalField),
    Entry { index: usize, field: EntryField },
    Skills,
    /// Review step, or a list step with no entries
    Nothing,
}

/// An entry that has been picked up and is being moved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub source: usize,
    pub target: usize,
}

/// What Confirm did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Focus moved to the next input
    FocusMoved,
    /// The step's primary action advanced the wizard
    Advanced,
    /// The step's primary action is export; the caller performs it
    Export,
}

/// State of one resume-building session
#[derive(Debug, Clone)]
pub struct WizardSession {
    store: ResumeStore,
    steps: StepController,
    /// Field index within the focused entry (or within the step's fields)
    field: usize,
    /// Selected entry on list steps
    entry: usize,
    input: TextInputState,
    drag: Option<DragState>,
    preview: PreviewCache,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    pub fn new() -> Self {
        Self::with_document(ResumeDocument::default())
    }

    pub fn with_document(document: ResumeDocument) -> Self {
        let store = ResumeStore::with_document(document);
        let preview = PreviewCache::new(store.document(), store.revision());
        let mut session = Self {
            store,
            steps: StepController::new(),
            field: 0,
            entry: 0,
            input: TextInputState::new(),
            drag: None,
            preview,
        };
        session.load_input();
        session
    }

    pub fn store(&self) -> &ResumeStore {
        &self.store
    }

    pub fn document(&self) -> &ResumeDocument {
        self.store.document()
    }

    pub fn steps(&self) -> &StepController {
        &self.steps
    }

    pub fn current_step(&self) -> Step {
        self.steps.current()
    }

    pub fn input(&self) -> &TextInputState {
        &self.input
    }

    pub fn field_index(&self) -> usize {
        self.field
    }

    pub fn selected_entry(&self) -> usize {
        self.entry
    }

    pub fn drag(&self) -> Option<DragState> {
        self.drag
    }

    /// List section edited on the current step, if any
    pub fn current_section(&self) -> Option<Section> {
        match self.current_step().content() {
            StepContent::List(section) => Some(section),
            _ => None,
        }
    }

    fn section_len(&self) -> usize {
        self.current_section()
            .map(|s| self.document().section_len(s))
            .unwrap_or(0)
    }

    /// Number of inputs per form unit (per entry on list steps)
    fn field_count(&self) -> usize {
        match self.current_step().content() {
            StepContent::Fields(fields) => fields.len(),
            StepContent::List(section) if self.document().section_len(section) > 0 => {
                EntryField::all(section).len()
            }
            StepContent::List(_) => 0,
            StepContent::Skills => 1,
            StepContent::Review => 0,
        }
    }

    pub fn focus(&self) -> FocusTarget {
        match self.current_step().content() {
            StepContent::Fields(fields) => fields
                .get(self.field)
                .map(|f| FocusTarget::Personal(*f))
                .unwrap_or(FocusTarget::Nothing),
            StepContent::List(section) => {
                if self.entry >= self.document().section_len(section) {
                    return FocusTarget::Nothing;
                }
                EntryField::all(section)
                    .get(self.field)
                    .map(|field| FocusTarget::Entry {
                        index: self.entry,
                        field: *field,
                    })
                    .unwrap_or(FocusTarget::Nothing)
            }
            StepContent::Skills => FocusTarget::Skills,
            StepContent::Review => FocusTarget::Nothing,
        }
    }

    /// Load the focused field's value into the input buffer
    fn load_input(&mut self) {
        let value = match self.focus() {
            FocusTarget::Personal(field) => self.document().personal(field).to_string(),
            FocusTarget::Entry { index, field } => self
                .store
                .entry_field(index, field)
                .unwrap_or_default()
                .to_string(),
            FocusTarget::Skills => self.store.skills_text(),
            FocusTarget::Nothing => String::new(),
        };
        self.input.set(&value);
    }

    /// Write the input buffer into the focused field
    fn commit_input(&mut self) -> bool {
        let value = self.input.value();
        match self.focus() {
            FocusTarget::Personal(field) => self.store.set_personal(field, value),
            FocusTarget::Entry { index, field } => self.store.set_entry_field(index, field, value),
            // The raw text stays in the input; only the parsed list is stored
            FocusTarget::Skills => self.store.set_skills_text(value),
            FocusTarget::Nothing => false,
        }
    }

    /// Apply an edit to the focused input. Returns whether the document changed.
    pub fn edit<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut TextInputState),
    {
        if self.focus() == FocusTarget::Nothing {
            return false;
        }
        let before = self.input.value().to_string();
        f(&mut self.input);
        // Cursor movement leaves the text alone and must not touch the store
        if self.input.value() == before {
            return false;
        }
        self.commit_input()
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        self.edit(|input| input.insert_char(c))
    }

    pub fn paste(&mut self, text: &str) -> bool {
        self.edit(|input| input.insert_str(text))
    }

    /// Focus the next input; on list steps this continues into the next entry
    pub fn next_field(&mut self) -> bool {
        let count = self.field_count();
        if count == 0 {
            return false;
        }
        if self.field + 1 < count {
            self.field += 1;
        } else if self.entry + 1 < self.section_len() {
            self.entry += 1;
            self.field = 0;
        } else {
            return false;
        }
        self.load_input();
        true
    }

    pub fn prev_field(&mut self) -> bool {
        let count = self.field_count();
        if count == 0 {
            return false;
        }
        if self.field > 0 {
            self.field -= 1;
        } else if self.current_section().is_some() && self.entry > 0 {
            self.entry -= 1;
            self.field = count - 1;
        } else {
            return false;
        }
        self.load_input();
        true
    }

    /// Enter: next input, or the step's primary action from the last one
    pub fn confirm(&mut self) -> ConfirmOutcome {
        if self.next_field() {
            return ConfirmOutcome::FocusMoved;
        }
        match self.steps.primary_action() {
            PrimaryAction::Next => {
                self.next_step();
                ConfirmOutcome::Advanced
            }
            PrimaryAction::Export => ConfirmOutcome::Export,
        }
    }

    pub fn next_step(&mut self) -> bool {
        let moved = self.steps.next();
        if moved {
            self.reset_focus();
        }
        moved
    }

    pub fn prev_step(&mut self) -> bool {
        let moved = self.steps.previous();
        if moved {
            self.reset_focus();
        }
        moved
    }

    fn reset_focus(&mut self) {
        self.field = 0;
        self.entry = 0;
        self.drag = None;
        self.load_input();
        tracing::debug!(step = self.current_step().title(), "Entered step");
    }

    /// Append a blank entry to the current list and focus it
    pub fn add_entry(&mut self) -> bool {
        let Some(section) = self.current_section() else {
            return false;
        };
        if !self.store.append(section) {
            return false;
        }
        self.entry = self.document().section_len(section) - 1;
        self.field = 0;
        self.load_input();
        true
    }

    /// Remove the selected entry; the selection stays at the same position
    pub fn remove_entry(&mut self) -> bool {
        let Some(section) = self.current_section() else {
            return false;
        };
        if !self.store.remove(section, self.entry) {
            return false;
        }
        let len = self.document().section_len(section);
        self.entry = self.entry.min(len.saturating_sub(1));
        if len == 0 {
            self.field = 0;
        }
        self.load_input();
        true
    }

    pub fn select_next_entry(&mut self) -> bool {
        if self.entry + 1 >= self.section_len() {
            return false;
        }
        self.entry += 1;
        self.load_input();
        true
    }

    pub fn select_prev_entry(&mut self) -> bool {
        if self.current_section().is_none() || self.entry == 0 {
            return false;
        }
        self.entry -= 1;
        self.load_input();
        true
    }

    /// Pick up the selected entry
    pub fn start_drag(&mut self) -> bool {
        if self.entry >= self.section_len() {
            return false;
        }
        self.drag = Some(DragState {
            source: self.entry,
            target: self.entry,
        });
        true
    }

    pub fn drag_up(&mut self) {
        if let Some(drag) = self.drag.as_mut() {
            drag.target = drag.target.saturating_sub(1);
        }
    }

    pub fn drag_down(&mut self) {
        let last = self.section_len().saturating_sub(1);
        if let Some(drag) = self.drag.as_mut() {
            drag.target = (drag.target + 1).min(last);
        }
    }

    /// Drop the dragged entry at its target and keep it selected
    pub fn drop_entry(&mut self) -> bool {
        let (Some(drag), Some(section)) = (self.drag.take(), self.current_section()) else {
            return false;
        };
        let moved = self.store.reorder(section, drag.source, Some(drag.target));
        if moved {
            self.entry = drag.target.min(self.section_len().saturating_sub(1));
            self.load_input();
        }
        moved
    }

    /// Abandon the drag; the list is untouched
    pub fn cancel_drag(&mut self) -> bool {
        let (Some(drag), Some(section)) = (self.drag.take(), self.current_section()) else {
            return false;
        };
        self.store.reorder(section, drag.source, None)
    }

    /// Preview of the current document, re-projected if it changed
    pub fn preview(&mut self) -> &Preview {
        self.preview
            .refresh(self.store.document(), self.store.revision())
    }

    /// Export the current preview through `exporter`
    pub fn export<E: Exporter>(
        &mut self,
        exporter: &E,
        output_dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        let preview = self.preview();
        exporter.export(preview, output_dir)
    }
}
