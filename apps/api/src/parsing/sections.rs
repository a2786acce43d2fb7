//! Section segmentation.
//!
//! A section body runs from the end of its header to the start of the nearest
//! following header of any *other* section, or to the end of the text. Headers are
//! matched case-insensitively and may appear in any order. Only the first
//! occurrence of a header is used.

use std::sync::LazyLock;

use regex::Regex;

/// The résumé sections the segmenter knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Summary,
    Skills,
    Experience,
    Education,
    Projects,
    Certifications,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Summary,
        Section::Skills,
        Section::Experience,
        Section::Education,
        Section::Projects,
        Section::Certifications,
    ];

    /// Pattern for this section's own header.
    ///
    /// Looser than [`Section::keyword`]: extraction sometimes splits the last letter of
    /// `SUMMARY`, experience may be labelled `WORK EXPERIENCE`, and the plural is
    /// optional for projects and certifications.
    fn header_pattern(self) -> &'static str {
        match self {
            Section::Summary => r"SUMMAR\s*Y",
            Section::Skills => "SKILLS",
            Section::Experience => r"(?:WORK\s*)?EXPERIENCE",
            Section::Education => "EDUCATION",
            Section::Projects => "PROJECTS?",
            Section::Certifications => "CERTIFICATIONS?",
        }
    }

    /// Pattern that ends *another* section's body when this header follows it.
    fn keyword(self) -> &'static str {
        match self {
            Section::Summary => r"SUMMAR\s*Y",
            Section::Skills => "SKILLS",
            Section::Experience => "EXPERIENCE",
            Section::Education => "EDUCATION",
            Section::Projects => "PROJECTS",
            Section::Certifications => "CERTIFICATIONS",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

struct SectionMatcher {
    header: Regex,
    boundary: Regex,
}

static MATCHERS: LazyLock<Vec<SectionMatcher>> = LazyLock::new(|| {
    Section::ALL
        .iter()
        .map(|&section| {
            let others = Section::ALL
                .iter()
                .filter(|&&other| other != section)
                .map(|other| other.keyword())
                .collect::<Vec<_>>()
                .join("|");
            SectionMatcher {
                header: Regex::new(&format!(r"(?i){}\s*", section.header_pattern()))
                    .expect("valid section header regex"),
                boundary: Regex::new(&format!("(?i){others}")).expect("valid section boundary regex"),
            }
        })
        .collect()
});

/// Returns the trimmed body of `section`, or `None` when its header does not occur.
pub fn find_section<'a>(text: &'a str, section: Section) -> Option<&'a str> {
    let matcher = &MATCHERS[section.index()];
    let header = matcher.header.find(text)?;
    let rest = &text[header.end()..];
    let end = matcher
        .boundary
        .find(rest)
        .map(|m| m.start())
        .unwrap_or(rest.len());
    Some(rest[..end].trim())
}

/// Like [`find_section`], with a missing header read as an empty body.
pub fn section_body(text: &str, section: Section) -> String {
    find_section(text, section).unwrap_or_default().to_string()
}
