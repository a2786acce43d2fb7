//! Export form of a parsed résumé: indented JSON without the `raw_text` audit field.

use serde::Serialize;

use crate::models::resume::{ParsedResume, ResumeLinks, SkillSet};

/// Used when the record has no name to build a filename from.
pub const FALLBACK_EXPORT_FILENAME: &str = "parsed_resume.json";

/// Borrowed view of [`ParsedResume`] that serializes every field except `raw_text`,
/// in the record's own key order.
#[derive(Debug, Serialize)]
struct ExportView<'a> {
    name: &'a str,
    profession: &'a str,
    email: &'a str,
    phone: &'a str,
    links: &'a ResumeLinks,
    summary: &'a str,
    skills: &'a SkillSet,
    work_experience: &'a [String],
    projects: &'a [String],
    certifications: &'a [String],
    education: &'a [String],
}

impl<'a> From<&'a ParsedResume> for ExportView<'a> {
    fn from(resume: &'a ParsedResume) -> Self {
        Self {
            name: &resume.name,
            profession: &resume.profession,
            email: &resume.email,
            phone: &resume.phone,
            links: &resume.links,
            summary: &resume.summary,
            skills: &resume.skills,
            work_experience: &resume.work_experience,
            projects: &resume.projects,
            certifications: &resume.certifications,
            education: &resume.education,
        }
    }
}

/// Serializes the export form as two-space indented JSON.
pub fn to_export_json(resume: &ParsedResume) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ExportView::from(resume))
}

/// Reads an export back. `raw_text` comes back empty.
#[cfg(test)]
pub fn from_export_json(json: &str) -> serde_json::Result<ParsedResume> {
    serde_json::from_str(json)
}

/// `jane_doe_resume.json` for "Jane Doe", or the fallback name for an unnamed record.
pub fn export_filename(resume: &ParsedResume) -> String {
    if resume.name.is_empty() {
        return FALLBACK_EXPORT_FILENAME.to_string();
    }
    format!("{}_resume.json", resume.name.replace(' ', "_").to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::pipeline::parse_resume;

    fn sample() -> ParsedResume {
        parse_resume(
            "MARIA GARCIA | Data Engineer + maria@example.com 14155550123\n\
             SKILLS\nData Science & Analytics: Spark, Airflow\n\
             EXPERIENCE\n2022 Stripe\n2019 Shopify\n\
             CERTIFICATIONS\nGCP Data Engineer",
        )
    }

    #[test]
    fn test_export_omits_raw_text() {
        let json = to_export_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("raw_text").is_none());
        assert_eq!(value["name"], "Maria Garcia");
    }

    #[test]
    fn test_export_is_indented_in_record_key_order() {
        let json = to_export_json(&ParsedResume::default()).unwrap();
        assert!(json.starts_with("{\n  \"name\": \"\",\n  \"profession\""));
        let keys = [
            "\"name\"",
            "\"profession\"",
            "\"email\"",
            "\"phone\"",
            "\"links\"",
            "\"summary\"",
            "\"skills\"",
            "\"work_experience\"",
            "\"projects\"",
            "\"certifications\"",
            "\"education\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_round_trip_restores_everything_but_raw_text() {
        let original = sample();
        assert!(!original.raw_text.is_empty());
        let restored = from_export_json(&to_export_json(&original).unwrap()).unwrap();
        assert_eq!(
            restored,
            ParsedResume {
                raw_text: String::new(),
                ..original
            }
        );
    }

    #[test]
    fn test_filename_from_name() {
        assert_eq!(export_filename(&sample()), "maria_garcia_resume.json");
    }

    #[test]
    fn test_filename_fallback() {
        assert_eq!(export_filename(&ParsedResume::default()), FALLBACK_EXPORT_FILENAME);
    }
}
