//! Contact details and link presence, scanned over the whole text regardless of sections.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::ResumeLinks;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?[0-9]{10,13}").expect("valid phone regex"));

pub const LINKEDIN_MARKER: &str = "LinkedIn profile found";
pub const GITHUB_MARKER: &str = "GitHub profile found";
pub const PORTFOLIO_MARKER: &str = "Portfolio found";

/// First email-shaped substring, verbatim.
pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First run of 10 to 13 digits, always returned with exactly one leading `+`.
pub fn extract_phone(text: &str) -> String {
    PHONE_RE
        .find(text)
        .map(|m| format!("+{}", m.as_str().trim_start_matches('+')))
        .unwrap_or_default()
}

/// Sets a fixed marker for each link category whose keyword is mentioned anywhere.
pub fn detect_links(text: &str) -> ResumeLinks {
    let lowered = text.to_lowercase();
    let marker = |keyword: &str, value: &str| {
        if lowered.contains(keyword) {
            value.to_string()
        } else {
            String::new()
        }
    };

    ResumeLinks {
        linkedin: marker("linkedin", LINKEDIN_MARKER),
        github: marker("github", GITHUB_MARKER),
        portfolio: marker("portfolio", PORTFOLIO_MARKER),
        other: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_email_wins() {
        let text = "contact: first.last@mail.example.org, backup: other@example.com";
        assert_eq!(extract_email(text), "first.last@mail.example.org");
    }

    #[test]
    fn test_email_with_upper_case_tld() {
        assert_eq!(extract_email("Mail ME@EXAMPLE.COM today"), "ME@EXAMPLE.COM");
    }

    #[test]
    fn test_no_email() {
        assert_eq!(extract_email("name at example dot com"), "");
        assert_eq!(extract_email("broken@host.c"), "");
    }

    #[test]
    fn test_phone_gains_plus() {
        assert_eq!(extract_phone("call 9876543210 now"), "+9876543210");
    }

    #[test]
    fn test_phone_keeps_single_plus() {
        assert_eq!(extract_phone("+919876543210"), "+919876543210");
    }

    #[test]
    fn test_short_digit_runs_are_not_phones() {
        assert_eq!(extract_phone("2019 - 2021, zip 560001"), "");
    }

    #[test]
    fn test_phone_takes_at_most_thirteen_digits() {
        assert_eq!(extract_phone("12345678901234567"), "+1234567890123");
    }

    #[test]
    fn test_links_detected_case_insensitively() {
        let links = detect_links("LINKEDIN: /in/jd | github.com/jd | My Portfolio");
        assert_eq!(links.linkedin, LINKEDIN_MARKER);
        assert_eq!(links.github, GITHUB_MARKER);
        assert_eq!(links.portfolio, PORTFOLIO_MARKER);
        assert!(links.other.is_empty());
    }

    #[test]
    fn test_links_absent() {
        assert_eq!(detect_links("plain text"), ResumeLinks::default());
    }
}
