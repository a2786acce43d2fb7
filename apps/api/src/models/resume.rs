use serde::{Deserialize, Serialize};

/// Number of leading characters of the source text kept on the record for auditing.
pub const RAW_TEXT_PREVIEW_CHARS: usize = 1000;

/// Link presence markers. Values are fixed placeholder strings, never URLs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeLinks {
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    /// Part of the output shape only. Nothing populates it.
    pub other: Vec<String>,
}

/// Skill tokens bucketed by the category label they were listed under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    pub programming_languages: Vec<String>,
    /// Part of the output shape only. Nothing populates it.
    pub tools: Vec<String>,
    pub data_science: Vec<String>,
    pub machine_learning: Vec<String>,
    pub frameworks: Vec<String>,
    /// Every recognized token, in category scan order. Duplicates are kept.
    pub all: Vec<String>,
}

/// Structured record recovered from one résumé's text.
///
/// Every field is always present: a field the extractors could not find is an
/// empty string or an empty list, never a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: String,
    pub profession: String,
    pub email: String,
    pub phone: String,
    pub links: ResumeLinks,
    pub summary: String,
    pub skills: SkillSet,
    pub work_experience: Vec<String>,
    pub projects: Vec<String>,
    pub certifications: Vec<String>,
    pub education: Vec<String>,
    /// First characters of the unmodified input. Dropped from the export form.
    #[serde(default)]
    pub raw_text: String,
}

impl ParsedResume {
    /// An all-empty record carrying the audit preview of `raw_text`.
    pub fn empty(raw_text: &str) -> Self {
        Self {
            raw_text: raw_text.chars().take(RAW_TEXT_PREVIEW_CHARS).collect(),
            ..Self::default()
        }
    }
}
