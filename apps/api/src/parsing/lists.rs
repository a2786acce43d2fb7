//! Splitting section bodies into list items.
//!
//! Each list kind has a boundary rule saying which lines open a new item. Lines that
//! don't open an item are continuation lines of the current one.

use std::sync::LazyLock;

use regex::Regex;

const MONTH: &str = r"(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)";

/// Which list a body belongs to, and so which boundary rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// A year, or a month name followed by a year.
    Experience,
    /// A degree keyword or a year.
    Education,
    /// A capitalized word.
    Projects,
    /// Every non-empty line.
    Certifications,
}

static EXPERIENCE_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?m)^(?:[0-9]{{4}}|{MONTH} [0-9]{{4}})"))
        .expect("valid experience boundary regex")
});

static EDUCATION_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?:Bachelor|Master|PhD|Diploma|[0-9]{4})").expect("valid education boundary regex")
});

static PROJECT_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[A-Z][a-z]+").expect("valid project boundary regex"));

// Whitespace-led date tokens in a line; used when extraction flattened the section to
// one line. Group 1 is the token itself.
static INLINE_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:^|\s)((?:{MONTH} )?(?:19|20)[0-9]{{2}})\b"
    ))
    .expect("valid inline date regex")
});

/// Splits a section body into trimmed, non-empty items in source order.
pub fn itemize(body: &str, kind: ListKind) -> Vec<String> {
    let starts: Vec<usize> = match kind {
        ListKind::Experience if !body.contains('\n') => inline_date_starts(body),
        ListKind::Experience => line_starts(body, &EXPERIENCE_START_RE),
        ListKind::Education => line_starts(body, &EDUCATION_START_RE),
        ListKind::Projects => line_starts(body, &PROJECT_START_RE),
        ListKind::Certifications => {
            return body
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect();
        }
    };

    split_at(body, &starts)
}

fn line_starts(body: &str, start_re: &Regex) -> Vec<usize> {
    start_re.find_iter(body).map(|m| m.start()).collect()
}

/// Offsets of date tokens that open a new entry in a single-line body.
///
/// A token right after a range separator (`2019 - 2021`, `Jan 2019 to Mar 2020`) is
/// the end of a range, not the start of an entry.
fn inline_date_starts(body: &str) -> Vec<usize> {
    INLINE_DATE_RE
        .captures_iter(body)
        .filter_map(|caps| caps.get(1).map(|m| m.start()))
        .filter(|&start| !follows_range_separator(&body[..start]))
        .collect()
}

fn follows_range_separator(before: &str) -> bool {
    let before = before.trim_end();
    if before.ends_with(['-', '–', '—', '/']) {
        return true;
    }
    before
        .rsplit(char::is_whitespace)
        .next()
        .is_some_and(|word| word.eq_ignore_ascii_case("to"))
}

fn split_at(body: &str, starts: &[usize]) -> Vec<String> {
    let mut bounds: Vec<usize> = starts.iter().copied().filter(|&s| s > 0).collect();
    bounds.push(body.len());

    let mut items = Vec::with_capacity(bounds.len());
    let mut from = 0;
    for to in bounds {
        let item = body[from..to].trim();
        if !item.is_empty() {
            items.push(item.to_string());
        }
        from = to;
    }
    items
}
