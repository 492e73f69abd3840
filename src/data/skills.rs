//! Skills text boundary
//!
//! The skills input is free text. Text becomes a list by splitting on commas
//! and trimming each piece; a list becomes text by joining with ", ".
//! Empty pieces are kept, so `"Go,,Rust"` holds an empty skill between the
//! two names and the pair is not a strict round trip.

/// Separator used when displaying a skill list as text
pub const SKILL_SEPARATOR: &str = ", ";

/// Split free text into skill names
pub fn parse_skills(text: &str) -> Vec<String> {
    text.split(',').map(|s| s.trim().to_string()).collect()
}

/// Join skill names into a single display string
pub fn join_skills(skills: &[String]) -> String {
    skills.join(SKILL_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_each_entry() {
        assert_eq!(
            parse_skills("Go, Rust,  TypeScript"),
            vec!["Go", "Rust", "TypeScript"]
        );
    }

    #[test]
    fn test_join_uses_comma_space() {
        let skills = parse_skills("Go, Rust,  TypeScript");
        assert_eq!(join_skills(&skills), "Go, Rust, TypeScript");
    }

    #[test]
    fn test_edge_separators_produce_empty_entries() {
        assert_eq!(parse_skills(",Go,"), vec!["", "Go", ""]);
        assert_eq!(parse_skills("Go,,Rust"), vec!["Go", "", "Rust"]);
        assert_eq!(join_skills(&parse_skills(" ,Go")), ", Go");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(parse_skills(""), vec![""]);
        assert_eq!(join_skills(&[]), "");
        assert_eq!(join_skills(&parse_skills("")), "");
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        assert_eq!(
            parse_skills("  Visual Studio Code ,Rust"),
            vec!["Visual Studio Code", "Rust"]
        );
    }
}
