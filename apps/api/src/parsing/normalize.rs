//! Text and name normalization.
//!
//! Upstream PDF extraction drops the space at many word boundaries and mangles the
//! bullet glyph, so every extractor downstream runs on the output of [`normalize_text`].

use std::sync::LazyLock;

use regex::Regex;

static CAMEL_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid camel boundary regex"));

// `‚Ä¢` is a UTF-8 bullet read back as Mac Roman. One optional space is absorbed on
// each side so padding twice is a no-op.
static DELIMITER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ?(‚Ä¢|\|) ?").expect("valid delimiter regex"));

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Names longer than this that are entirely upper-case get the camel-boundary pass.
const CONCATENATED_NAME_MIN_CHARS: usize = 10;

/// Repairs extraction artifacts: splits `lowerUpper` joins, then pads bullets and pipes.
///
/// The camel split is lossy. It also splits genuine camel-case tokens (`JavaScript`
/// becomes `Java Script`), and is not idempotent on text that already had them split.
pub fn normalize_text(raw: &str) -> String {
    let spaced = split_camel_boundaries(raw);
    pad_delimiters(&spaced)
}

/// Inserts one space between an ASCII lower-case letter and the upper-case letter after it.
pub fn split_camel_boundaries(text: &str) -> String {
    CAMEL_BOUNDARY_RE.replace_all(text, "$1 $2").into_owned()
}

/// Surrounds every bullet glyph and pipe with exactly one space on each side.
pub fn pad_delimiters(text: &str) -> String {
    DELIMITER_RE.replace_all(text, " $1 ").into_owned()
}

/// Turns a raw name candidate into display form: single spaces, then title case.
pub fn normalize_name(candidate: &str) -> String {
    let mut name = WHITESPACE_RUN_RE.replace_all(candidate, " ").into_owned();
    if is_all_upper(&name) && name.chars().count() > CONCATENATED_NAME_MIN_CHARS {
        // No-op on a pure all-caps run: there is no lower/upper boundary to split on.
        name = split_camel_boundaries(&name);
    }
    title_case(&name)
}

/// True when the text has at least one cased letter and none of them are lower-case.
fn is_all_upper(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_dropped_word_boundary() {
        assert_eq!(normalize_text("SoftwareEngineer"), "Software Engineer");
    }

    #[test]
    fn test_camel_split_is_lossy_on_real_camel_case() {
        assert_eq!(normalize_text("JavaScript"), "Java Script");
    }

    #[test]
    fn test_pads_bullet_and_pipe() {
        assert_eq!(
            normalize_text("Python‚Ä¢Go|Rust"),
            "Python ‚Ä¢ Go | Rust"
        );
    }

    #[test]
    fn test_padding_is_idempotent() {
        let once = pad_delimiters("a‚Ä¢b | c|d");
        let twice = pad_delimiters(&once);
        assert_eq!(once, twice);
        assert_eq!(once, "a ‚Ä¢ b | c | d");
    }

    #[test]
    fn test_padding_keeps_line_breaks() {
        assert_eq!(pad_delimiters("one\n‚Ä¢ two"), "one\n ‚Ä¢ two");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_name_title_cased() {
        assert_eq!(normalize_name("JOHN SMITH"), "John Smith");
    }

    #[test]
    fn test_name_whitespace_collapsed() {
        assert_eq!(normalize_name("JOHN \n  SMITH"), "John Smith");
    }

    #[test]
    fn test_long_all_caps_name_left_as_one_word() {
        assert_eq!(normalize_name("SREEKESHMAI"), "Sreekeshmai");
    }

    #[test]
    fn test_title_case_restarts_after_non_letters() {
        assert_eq!(title_case("o'neil mary-jane"), "O'Neil Mary-Jane");
        assert_eq!(title_case("3d ART"), "3D Art");
    }
}
