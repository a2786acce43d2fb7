//! Skill categorization over the Skills section body.
//!
//! Each category is introduced by a label such as `Programming Languages & Tools:`
//! and followed by a comma-separated run that ends at a bullet glyph or line break.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::SkillSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkillCategory {
    ProgrammingLanguages,
    DataScience,
    MachineLearning,
    Frameworks,
}

impl SkillCategory {
    /// Scan order. Also the order tokens are appended to `SkillSet::all`.
    const ALL: [SkillCategory; 4] = [
        SkillCategory::ProgrammingLanguages,
        SkillCategory::DataScience,
        SkillCategory::MachineLearning,
        SkillCategory::Frameworks,
    ];

    fn label_pattern(self) -> &'static str {
        match self {
            SkillCategory::ProgrammingLanguages => r"Programming\s*Languages?\s*&?\s*Tools?",
            SkillCategory::DataScience => r"Data\s*Science\s*&?\s*Analytics?",
            SkillCategory::MachineLearning => r"Machine\s*Learning\s*&?\s*AI?",
            SkillCategory::Frameworks => r"Frameworks?\s*&?\s*Libraries?",
        }
    }

    fn bucket(self, skills: &mut SkillSet) -> &mut Vec<String> {
        match self {
            SkillCategory::ProgrammingLanguages => &mut skills.programming_languages,
            SkillCategory::DataScience => &mut skills.data_science,
            SkillCategory::MachineLearning => &mut skills.machine_learning,
            SkillCategory::Frameworks => &mut skills.frameworks,
        }
    }
}

// Indexed by `SkillCategory as usize`. The run stops at any character of the
// mis-decoded bullet, the same way the glyph is matched elsewhere.
static CATEGORY_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SkillCategory::ALL
        .iter()
        .map(|category| {
            Regex::new(&format!(r"(?i){}:?\s*([^‚Ä¢\n]+)", category.label_pattern()))
                .expect("valid skill category regex")
        })
        .collect()
});

/// Buckets the tokens listed under each known category label.
///
/// Tokens keep source order and are not de-duplicated. `tools` is never filled.
pub fn categorize_skills(skills_body: &str) -> SkillSet {
    let mut skills = SkillSet::default();

    for category in SkillCategory::ALL {
        let Some(caps) = CATEGORY_RES[category as usize].captures(skills_body) else {
            continue;
        };
        let tokens: Vec<String> = caps[1].split(',').map(|s| s.trim().to_string()).collect();
        skills.all.extend(tokens.iter().cloned());
        *category.bucket(&mut skills) = tokens;
    }

    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_category_ended_by_bullet() {
        let skills = categorize_skills("Programming Languages & Tools: Python, Go ‚Ä¢");
        assert_eq!(skills.programming_languages, vec!["Python", "Go"]);
        assert_eq!(skills.all, vec!["Python", "Go"]);
        assert!(skills.data_science.is_empty());
    }

    #[test]
    fn test_all_categories_in_scan_order() {
        let body = "Frameworks & Libraries: Django, React\n\
                    Machine Learning & AI: PyTorch\n\
                    Data Science & Analytics: Pandas, NumPy\n\
                    Programming Languages & Tools: Rust";
        let skills = categorize_skills(body);
        assert_eq!(skills.frameworks, vec!["Django", "React"]);
        assert_eq!(skills.machine_learning, vec!["PyTorch"]);
        assert_eq!(skills.data_science, vec!["Pandas", "NumPy"]);
        assert_eq!(skills.programming_languages, vec!["Rust"]);
        assert_eq!(
            skills.all,
            vec!["Rust", "Pandas", "NumPy", "PyTorch", "Django", "React"]
        );
        assert!(skills.tools.is_empty());
    }

    #[test]
    fn test_labels_are_case_and_spacing_insensitive() {
        let skills = categorize_skills("programming language tools Java, Kotlin\n");
        assert_eq!(skills.programming_languages, vec!["Java", "Kotlin"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let body = "Programming Languages & Tools: SQL\nData Science & Analytics: SQL";
        let skills = categorize_skills(body);
        assert_eq!(skills.all, vec!["SQL", "SQL"]);
    }

    #[test]
    fn test_unlabelled_body_yields_nothing() {
        assert_eq!(categorize_skills("Rust, Go, Python"), SkillSet::default());
        assert_eq!(categorize_skills(""), SkillSet::default());
    }
}
