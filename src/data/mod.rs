//! Resume data layer
//!
//! Typed resume records, the generic list editor shared by the experience and
//! education sections, the skills text boundary, and the session store.

pub mod list_editor;
mod model;
mod skills;
mod store;

pub use list_editor::Entry;
pub use model::{
    EducationEntry, EducationField, ExperienceEntry, ExperienceField, FieldParseError,
    PersonalField, ResumeDocument, Section,
};
pub use skills::{join_skills, parse_skills, SKILL_SEPARATOR};
pub use store::{EntryField, ResumeStore};
