//! Sample resume documents

use resumeforge::data::{EducationEntry, ExperienceEntry, ResumeDocument};

/// A filled-in resume with two jobs and one degree
pub fn sample_document() -> ResumeDocument {
    ResumeDocument {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "555-0100".to_string(),
        summary: "Mathematician and first programmer.".to_string(),
        experience_entries: vec![
            ExperienceEntry {
                title: "Analyst".to_string(),
                company: "Analytical Engine Co".to_string(),
                start_date: "1842".to_string(),
                end_date: "1843".to_string(),
                description: "Wrote the first published algorithm.".to_string(),
            },
            ExperienceEntry {
                title: "Translator".to_string(),
                company: "Scientific Memoirs".to_string(),
                start_date: "1840".to_string(),
                end_date: "1842".to_string(),
                description: "Translated Menabrea's article.".to_string(),
            },
        ],
        education_entries: vec![EducationEntry {
            degree: "Private tutoring".to_string(),
            field: "Mathematics".to_string(),
            school: "Home".to_string(),
            graduation_year: "1835".to_string(),
        }],
        skills: vec!["Mathematics".to_string(), "Algorithms".to_string()],
    }
}
