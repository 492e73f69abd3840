//! Resume preview projection
//!
//! [`render_preview`] is a pure function of the document. Every empty field
//! is replaced with a placeholder so the preview is always fully populated.
//! The same projection feeds the on-screen preview pane and the exporter.

use serde::Serialize;

use crate::data::{join_skills, EducationEntry, ExperienceEntry, ResumeDocument};

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const EMAIL_PLACEHOLDER: &str = "email@example.com";
pub const PHONE_PLACEHOLDER: &str = "(123) 456-7890";
pub const SUMMARY_PLACEHOLDER: &str = "A brief summary of your professional background and goals.";
pub const TITLE_PLACEHOLDER: &str = "Job Title";
pub const COMPANY_PLACEHOLDER: &str = "Company Name";
pub const START_DATE_PLACEHOLDER: &str = "Start Date";
pub const END_DATE_PLACEHOLDER: &str = "End Date";
pub const DESCRIPTION_PLACEHOLDER: &str = "Job description and achievements.";
pub const DEGREE_PLACEHOLDER: &str = "Degree";
pub const FIELD_PLACEHOLDER: &str = "Field of Study";
pub const SCHOOL_PLACEHOLDER: &str = "School Name";
pub const GRADUATION_YEAR_PLACEHOLDER: &str = "Graduation Year";
pub const SKILLS_PLACEHOLDER: &str = "List your key skills here.";

pub const SUMMARY_HEADING: &str = "Professional Summary";
pub const EXPERIENCE_HEADING: &str = "Work Experience";
pub const EDUCATION_HEADING: &str = "Education";
pub const SKILLS_HEADING: &str = "Skills";

/// A displayed value and whether it came from a placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewText {
    pub text: String,
    pub placeholder: bool,
}

impl PreviewText {
    fn or_placeholder(value: &str, placeholder: &str) -> Self {
        if value.is_empty() {
            Self {
                text: placeholder.to_string(),
                placeholder: true,
            }
        } else {
            Self {
                text: value.to_string(),
                placeholder: false,
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewExperience {
    pub title: PreviewText,
    pub company: PreviewText,
    pub start_date: PreviewText,
    pub end_date: PreviewText,
    pub description: PreviewText,
}

impl PreviewExperience {
    fn project(entry: &ExperienceEntry) -> Self {
        Self {
            title: PreviewText::or_placeholder(&entry.title, TITLE_PLACEHOLDER),
            company: PreviewText::or_placeholder(&entry.company, COMPANY_PLACEHOLDER),
            start_date: PreviewText::or_placeholder(&entry.start_date, START_DATE_PLACEHOLDER),
            end_date: PreviewText::or_placeholder(&entry.end_date, END_DATE_PLACEHOLDER),
            description: PreviewText::or_placeholder(&entry.description, DESCRIPTION_PLACEHOLDER),
        }
    }

    pub fn date_range(&self) -> String {
        format!("{} - {}", self.start_date.text, self.end_date.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewEducation {
    pub degree: PreviewText,
    pub field: PreviewText,
    pub school: PreviewText,
    pub graduation_year: PreviewText,
}

impl PreviewEducation {
    fn project(entry: &EducationEntry) -> Self {
        Self {
            degree: PreviewText::or_placeholder(&entry.degree, DEGREE_PLACEHOLDER),
            field: PreviewText::or_placeholder(&entry.field, FIELD_PLACEHOLDER),
            school: PreviewText::or_placeholder(&entry.school, SCHOOL_PLACEHOLDER),
            graduation_year: PreviewText::or_placeholder(
                &entry.graduation_year,
                GRADUATION_YEAR_PLACEHOLDER,
            ),
        }
    }

    /// "Degree in Field of Study"
    pub fn heading(&self) -> String {
        format!("{} in {}", self.degree.text, self.field.text)
    }
}

/// Fully populated display form of a resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub name: PreviewText,
    pub email: PreviewText,
    pub phone: PreviewText,
    pub summary: PreviewText,
    pub experience: Vec<PreviewExperience>,
    pub education: Vec<PreviewEducation>,
    pub skills: PreviewText,
}

/// Visual role of a flattened preview line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineKind {
    Name,
    Contact,
    Heading,
    EntryTitle,
    EntrySubtitle,
    Meta,
    Body,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewLine {
    pub kind: LineKind,
    pub text: String,
    pub placeholder: bool,
}

impl PreviewLine {
    fn new(kind: LineKind, text: impl Into<String>, placeholder: bool) -> Self {
        Self {
            kind,
            text: text.into(),
            placeholder,
        }
    }

    fn from_text(kind: LineKind, text: &PreviewText) -> Self {
        Self::new(kind, text.text.clone(), text.placeholder)
    }

    fn blank() -> Self {
        Self::new(LineKind::Blank, "", false)
    }
}

/// Project the document into its display form
pub fn render_preview(doc: &ResumeDocument) -> Preview {
    Preview {
        name: PreviewText::or_placeholder(&doc.name, NAME_PLACEHOLDER),
        email: PreviewText::or_placeholder(&doc.email, EMAIL_PLACEHOLDER),
        phone: PreviewText::or_placeholder(&doc.phone, PHONE_PLACEHOLDER),
        summary: PreviewText::or_placeholder(&doc.summary, SUMMARY_PLACEHOLDER),
        experience: doc
            .experience_entries
            .iter()
            .map(PreviewExperience::project)
            .collect(),
        education: doc
            .education_entries
            .iter()
            .map(PreviewEducation::project)
            .collect(),
        skills: PreviewText::or_placeholder(&join_skills(&doc.skills), SKILLS_PLACEHOLDER),
    }
}

impl Preview {
    /// "email | phone"
    pub fn contact_line(&self) -> String {
        format!("{} | {}", self.email.text, self.phone.text)
    }

    /// Flatten into display lines in reading order
    pub fn lines(&self) -> Vec<PreviewLine> {
        let mut lines = vec![
            PreviewLine::from_text(LineKind::Name, &self.name),
            PreviewLine::new(
                LineKind::Contact,
                self.contact_line(),
                self.email.placeholder && self.phone.placeholder,
            ),
            PreviewLine::blank(),
            PreviewLine::new(LineKind::Heading, SUMMARY_HEADING, false),
            PreviewLine::from_text(LineKind::Body, &self.summary),
            PreviewLine::blank(),
            PreviewLine::new(LineKind::Heading, EXPERIENCE_HEADING, false),
        ];

        for exp in &self.experience {
            lines.push(PreviewLine::from_text(LineKind::EntryTitle, &exp.title));
            lines.push(PreviewLine::from_text(LineKind::EntrySubtitle, &exp.company));
            lines.push(PreviewLine::new(
                LineKind::Meta,
                exp.date_range(),
                exp.start_date.placeholder && exp.end_date.placeholder,
            ));
            lines.push(PreviewLine::from_text(LineKind::Body, &exp.description));
            lines.push(PreviewLine::blank());
        }
        if self.experience.is_empty() {
            lines.push(PreviewLine::blank());
        }

        lines.push(PreviewLine::new(LineKind::Heading, EDUCATION_HEADING, false));
        for edu in &self.education {
            lines.push(PreviewLine::new(
                LineKind::EntryTitle,
                edu.heading(),
                edu.degree.placeholder && edu.field.placeholder,
            ));
            lines.push(PreviewLine::from_text(LineKind::EntrySubtitle, &edu.school));
            lines.push(PreviewLine::from_text(LineKind::Meta, &edu.graduation_year));
            lines.push(PreviewLine::blank());
        }
        if self.education.is_empty() {
            lines.push(PreviewLine::blank());
        }

        lines.push(PreviewLine::new(LineKind::Heading, SKILLS_HEADING, false));
        lines.push(PreviewLine::from_text(LineKind::Body, &self.skills));

        lines
    }

    /// Plain text rendering, one preview line per output line
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }
}

/// Caches the projection of a store revision
#[derive(Debug, Clone)]
pub struct PreviewCache {
    revision: Option<u64>,
    preview: Preview,
}

impl PreviewCache {
    pub fn new(doc: &ResumeDocument, revision: u64) -> Self {
        Self {
            revision: Some(revision),
            preview: render_preview(doc),
        }
    }

    /// Re-project if the document changed since the last call
    pub fn refresh(&mut self, doc: &ResumeDocument, revision: u64) -> &Preview {
        if self.revision != Some(revision) {
            self.preview = render_preview(doc);
            self.revision = Some(revision);
        }
        &self.preview
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ResumeStore, Section};

    #[test]
    fn test_blank_document_is_fully_populated() {
        let preview = render_preview(&ResumeDocument::default());
        assert_eq!(preview.name.text, "Your Name");
        assert!(preview.name.placeholder);
        assert_eq!(preview.contact_line(), "email@example.com | (123) 456-7890");
        assert_eq!(preview.experience.len(), 1);
        assert_eq!(preview.experience[0].title.text, "Job Title");
        assert_eq!(preview.experience[0].date_range(), "Start Date - End Date");
        assert_eq!(preview.education[0].heading(), "Degree in Field of Study");
        assert_eq!(preview.skills.text, "List your key skills here.");
    }

    #[test]
    fn test_filled_values_replace_placeholders() {
        let mut store = ResumeStore::new();
        store.set_personal(crate::data::PersonalField::Name, "Ada Lovelace");
        store
            .set_field(Section::Experience, 0, "company", "Analytical Engines")
            .unwrap();
        store.set_skills_text("Math,Poetry");

        let preview = render_preview(store.document());
        assert_eq!(preview.name.text, "Ada Lovelace");
        assert!(!preview.name.placeholder);
        assert_eq!(preview.experience[0].company.text, "Analytical Engines");
        assert_eq!(preview.experience[0].title.text, "Job Title");
        assert_eq!(preview.skills.text, "Math, Poetry");
    }

    #[test]
    fn test_empty_lists_keep_headings() {
        let mut doc = ResumeDocument::default();
        doc.experience_entries.clear();
        doc.education_entries.clear();

        let text = render_preview(&doc).to_plain_text();
        assert!(text.contains("Work Experience"));
        assert!(text.contains("Education"));
        assert!(!text.contains("Job Title"));
        assert!(!text.contains("School Name"));
    }

    #[test]
    fn test_lines_follow_reading_order() {
        let preview = render_preview(&ResumeDocument::default());
        let headings: Vec<String> = preview
            .lines()
            .into_iter()
            .filter(|l| l.kind == LineKind::Heading)
            .map(|l| l.text)
            .collect();
        assert_eq!(
            headings,
            vec!["Professional Summary", "Work Experience", "Education", "Skills"]
        );
    }

    #[test]
    fn test_cache_refreshes_on_new_revision() {
        let mut store = ResumeStore::new();
        let mut cache = PreviewCache::new(store.document(), store.revision());
        assert_eq!(cache.preview().name.text, "Your Name");

        store.set_personal(crate::data::PersonalField::Name, "Grace");
        let preview = cache.refresh(store.document(), store.revision());
        assert_eq!(preview.name.text, "Grace");
    }
}
