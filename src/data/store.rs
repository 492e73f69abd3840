//! Session store owning the single resume document
//!
//! All mutation goes through [`ResumeStore`]. Each operation computes a new
//! document from the current one and swaps it in whole, bumping the revision
//! only when something changed. Readers (the preview) compare revisions to
//! decide whether to re-project.

use std::str::FromStr;

use super::list_editor;
use super::model::{
    EducationField, ExperienceField, FieldParseError, PersonalField, ResumeDocument, Section,
};
use super::skills::{join_skills, parse_skills};

/// A field of an entry in either list section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    Experience(ExperienceField),
    Education(EducationField),
}

impl EntryField {
    pub fn section(&self) -> Section {
        match self {
            EntryField::Experience(_) => Section::Experience,
            EntryField::Education(_) => Section::Education,
        }
    }

    /// Resolve a field name within a section
    pub fn parse(section: Section, name: &str) -> Result<Self, FieldParseError> {
        match section {
            Section::Experience => ExperienceField::from_str(name).map(EntryField::Experience),
            Section::Education => EducationField::from_str(name).map(EntryField::Education),
        }
    }

    pub fn input_hint(&self) -> &'static str {
        match self {
            EntryField::Experience(f) => f.input_hint(),
            EntryField::Education(f) => f.input_hint(),
        }
    }

    /// All fields of a section in form order
    pub fn all(section: Section) -> Vec<EntryField> {
        match section {
            Section::Experience => ExperienceField::ALL
                .into_iter()
                .map(EntryField::Experience)
                .collect(),
            Section::Education => EducationField::ALL
                .into_iter()
                .map(EntryField::Education)
                .collect(),
        }
    }
}

/// Owner of the session's resume document
#[derive(Debug, Clone, Default)]
pub struct ResumeStore {
    document: ResumeDocument,
    revision: u64,
}

impl ResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document
    pub fn with_document(document: ResumeDocument) -> Self {
        Self {
            document,
            revision: 0,
        }
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    /// Incremented on every change to the document
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Copy-on-write update: `f` edits a copy, which replaces the current
    /// document only if `f` reports a change.
    fn apply<F>(&mut self, op: &'static str, f: F) -> bool
    where
        F: FnOnce(&mut ResumeDocument) -> bool,
    {
        let mut next = self.document.clone();
        if !f(&mut next) {
            tracing::trace!(op, "Store operation left document unchanged");
            return false;
        }
        self.document = next;
        self.revision += 1;
        tracing::debug!(op, revision = self.revision, "Resume document updated");
        true
    }

    pub fn set_personal(&mut self, field: PersonalField, value: &str) -> bool {
        self.apply("set_personal", |doc| {
            let slot = doc.personal_mut(field);
            if slot == value {
                return false;
            }
            *slot = value.to_string();
            true
        })
    }

    /// Replace the skill list from free text
    pub fn set_skills_text(&mut self, text: &str) -> bool {
        let skills = parse_skills(text);
        self.apply("set_skills", |doc| {
            if doc.skills == skills {
                return false;
            }
            doc.skills = skills;
            true
        })
    }

    /// Skills as the comma-and-space joined string
    pub fn skills_text(&self) -> String {
        join_skills(&self.document.skills)
    }

    pub fn append(&mut self, section: Section) -> bool {
        self.apply("append", |doc| match section {
            Section::Experience => list_editor::append(&mut doc.experience_entries),
            Section::Education => list_editor::append(&mut doc.education_entries),
        })
    }

    pub fn remove(&mut self, section: Section, index: usize) -> bool {
        self.apply("remove", |doc| match section {
            Section::Experience => list_editor::remove(&mut doc.experience_entries, index),
            Section::Education => list_editor::remove(&mut doc.education_entries, index),
        })
    }

    /// Move an entry; `to == None` is a cancelled drag
    pub fn reorder(&mut self, section: Section, from: usize, to: Option<usize>) -> bool {
        self.apply("reorder", |doc| match section {
            Section::Experience => list_editor::reorder(&mut doc.experience_entries, from, to),
            Section::Education => list_editor::reorder(&mut doc.education_entries, from, to),
        })
    }

    pub fn set_entry_field(&mut self, index: usize, field: EntryField, value: &str) -> bool {
        self.apply("set_entry_field", |doc| match field {
            EntryField::Experience(f) => {
                list_editor::set_field(&mut doc.experience_entries, index, f, value)
            }
            EntryField::Education(f) => {
                list_editor::set_field(&mut doc.education_entries, index, f, value)
            }
        })
    }

    /// Set an entry field by its name, e.g. `("experience", 1, "title")`
    pub fn set_field(
        &mut self,
        section: Section,
        index: usize,
        field_name: &str,
        value: &str,
    ) -> Result<bool, FieldParseError> {
        let field = EntryField::parse(section, field_name)?;
        Ok(self.set_entry_field(index, field, value))
    }

    /// Current value of an entry field, if the entry exists
    pub fn entry_field(&self, index: usize, field: EntryField) -> Option<&str> {
        use super::list_editor::Entry;
        match field {
            EntryField::Experience(f) => self
                .document
                .experience_entries
                .get(index)
                .map(|e| e.field(f)),
            EntryField::Education(f) => self
                .document
                .education_entries
                .get(index)
                .map(|e| e.field(f)),
        }
    }
}
