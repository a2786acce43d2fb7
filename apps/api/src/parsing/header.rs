//! Name and profession from the leading line, for layouts of the form
//! `NAME SURNAME | Profession + contact ...`.
//!
//! One pattern, one attempt. Anything else leaves both fields empty.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::normalize::normalize_name;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z\s]+)([A-Z][a-z]+)?.*?[|/](.+?)(?:\+|‚Ä¢|\n?$)").expect("valid header regex")
});

static PROFESSION_TAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+‚Ä¢].*").expect("valid profession tail regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFields {
    pub name: String,
    pub profession: String,
}

/// Matches the header layout against the start of the normalized text.
pub fn extract_header(text: &str) -> HeaderFields {
    let Some(caps) = HEADER_RE.captures(text) else {
        return HeaderFields::default();
    };

    let mut name = caps[1].trim().to_string();
    if let Some(continuation) = caps.get(2) {
        name.push_str(continuation.as_str());
    }

    let profession = PROFESSION_TAIL_RE
        .replace(&caps[3], "")
        .trim()
        .to_string();

    HeaderFields {
        name: normalize_name(&name),
        profession,
    }
}
