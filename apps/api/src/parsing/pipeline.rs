//! The extraction pass: raw text in, `ParsedResume` out.
//!
//! Strictly linear. Every extractor either matches or leaves its field at the empty
//! default, so parsing never fails.

use tracing::debug;

use crate::models::resume::ParsedResume;
use crate::parsing::contact::{detect_links, extract_email, extract_phone};
use crate::parsing::header::extract_header;
use crate::parsing::lists::{itemize, ListKind};
use crate::parsing::normalize::normalize_text;
use crate::parsing::sections::{section_body, Section};
use crate::parsing::skills::categorize_skills;

/// Parses résumé text into a best-effort structured record.
pub fn parse_resume(raw_text: &str) -> ParsedResume {
    let mut resume = ParsedResume::empty(raw_text);
    if raw_text.is_empty() {
        return resume;
    }

    let text = normalize_text(raw_text);

    let header = extract_header(&text);
    resume.name = header.name;
    resume.profession = header.profession;

    resume.email = extract_email(&text);
    resume.phone = extract_phone(&text);
    resume.links = detect_links(&text);

    resume.summary = section_body(&text, Section::Summary);
    resume.skills = categorize_skills(&section_body(&text, Section::Skills));
    resume.work_experience = itemize(
        &section_body(&text, Section::Experience),
        ListKind::Experience,
    );
    resume.education = itemize(&section_body(&text, Section::Education), ListKind::Education);
    resume.projects = itemize(&section_body(&text, Section::Projects), ListKind::Projects);
    resume.certifications = itemize(
        &section_body(&text, Section::Certifications),
        ListKind::Certifications,
    );

    debug!(
        has_name = !resume.name.is_empty(),
        has_summary = !resume.summary.is_empty(),
        skills = resume.skills.all.len(),
        experience = resume.work_experience.len(),
        education = resume.education.len(),
        projects = resume.projects.len(),
        certifications = resume.certifications.len(),
        "Resume parsed"
    );

    resume
}
