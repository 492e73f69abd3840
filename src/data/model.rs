//! Resume data model
//!
//! A single [`ResumeDocument`] describes everything the wizard collects.
//! Entries in the experience and education lists have no identity beyond
//! their position.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a field name does not belong to the requested record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {record} field: {name}")]
pub struct FieldParseError {
    pub record: &'static str,
    pub name: String,
}

impl FieldParseError {
    fn new(record: &'static str, name: &str) -> Self {
        Self {
            record,
            name: name.to_string(),
        }
    }
}

/// The two ordered list fields of a resume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Experience,
    Education,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "experience" => Ok(Section::Experience),
            "education" => Ok(Section::Education),
            _ => Err(FieldParseError::new("section", s)),
        }
    }
}

/// Top-level string fields edited directly on the Personal and Summary steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Summary,
}

impl PersonalField {
    pub fn name(&self) -> &'static str {
        match self {
            PersonalField::Name => "name",
            PersonalField::Email => "email",
            PersonalField::Phone => "phone",
            PersonalField::Summary => "summary",
        }
    }

    /// Hint shown in an empty form input
    pub fn input_hint(&self) -> &'static str {
        match self {
            PersonalField::Name => "Full Name",
            PersonalField::Email => "Email",
            PersonalField::Phone => "Phone",
            PersonalField::Summary => "Write a brief summary of your professional background",
        }
    }
}

impl FromStr for PersonalField {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(PersonalField::Name),
            "email" => Ok(PersonalField::Email),
            "phone" => Ok(PersonalField::Phone),
            "summary" => Ok(PersonalField::Summary),
            _ => Err(FieldParseError::new("personal", s)),
        }
    }
}

/// Fields of an [`ExperienceEntry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceField {
    Title,
    Company,
    StartDate,
    EndDate,
    Description,
}

impl ExperienceField {
    pub const ALL: [ExperienceField; 5] = [
        ExperienceField::Title,
        ExperienceField::Company,
        ExperienceField::StartDate,
        ExperienceField::EndDate,
        ExperienceField::Description,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExperienceField::Title => "title",
            ExperienceField::Company => "company",
            ExperienceField::StartDate => "startDate",
            ExperienceField::EndDate => "endDate",
            ExperienceField::Description => "description",
        }
    }

    pub fn input_hint(&self) -> &'static str {
        match self {
            ExperienceField::Title => "Job Title",
            ExperienceField::Company => "Company",
            ExperienceField::StartDate => "Start Date",
            ExperienceField::EndDate => "End Date",
            ExperienceField::Description => "Job Description",
        }
    }
}

impl FromStr for ExperienceField {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExperienceField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FieldParseError::new("experience", s))
    }
}

/// Fields of an [`EducationEntry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EducationField {
    Degree,
    Field,
    School,
    GraduationYear,
}

impl EducationField {
    pub const ALL: [EducationField; 4] = [
        EducationField::Degree,
        EducationField::Field,
        EducationField::School,
        EducationField::GraduationYear,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EducationField::Degree => "degree",
            EducationField::Field => "field",
            EducationField::School => "school",
            EducationField::GraduationYear => "graduationYear",
        }
    }

    pub fn input_hint(&self) -> &'static str {
        match self {
            EducationField::Degree => "Degree",
            EducationField::Field => "Field of Study",
            EducationField::School => "School Name",
            EducationField::GraduationYear => "Graduation Year",
        }
    }
}

impl FromStr for EducationField {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EducationField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FieldParseError::new("education", s))
    }
}

/// One job in the work history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// One degree in the education history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub degree: String,
    pub field: String,
    pub school: String,
    pub graduation_year: String,
}

/// The complete resume collected by the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub summary: String,
    pub experience_entries: Vec<ExperienceEntry>,
    pub education_entries: Vec<EducationEntry>,
    pub skills: Vec<String>,
}

impl Default for ResumeDocument {
    /// A fresh session starts with one blank entry in each list
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            summary: String::new(),
            experience_entries: vec![ExperienceEntry::default()],
            education_entries: vec![EducationEntry::default()],
            skills: Vec::new(),
        }
    }
}

impl ResumeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn personal(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::Name => &self.name,
            PersonalField::Email => &self.email,
            PersonalField::Phone => &self.phone,
            PersonalField::Summary => &self.summary,
        }
    }

    pub fn personal_mut(&mut self, field: PersonalField) -> &mut String {
        match field {
            PersonalField::Name => &mut self.name,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::Summary => &mut self.summary,
        }
    }

    /// Number of entries in a list section
    pub fn section_len(&self, section: Section) -> usize {
        match section {
            Section::Experience => self.experience_entries.len(),
            Section::Education => self.education_entries.len(),
        }
    }
}
