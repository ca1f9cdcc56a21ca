use std::sync::LazyLock;

use regex::Regex;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z]{1,8} \d{1,2}(?:th|rd|st)").unwrap());
static GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z\s]*)(\(\d{1,2}:00[ ]?[ap]\.?m\.?\))").unwrap());

/// A textual month/day fragment ("January 16th"). Carries no year.
/// `pos` is the byte offset in the source text; tokens are always returned
/// in ascending `pos` order and that order is the only one pairing uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateToken {
    pub text: String,
    pub pos: usize,
}

/// One meeting-type row of the source table: cleaned uppercase title plus
/// its 12-hour time string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTimeGroup {
    pub title: String,
    pub time: String,
}

/// Scan `text` for date tokens in source-position order.
pub fn extract_dates(text: &str) -> Vec<DateToken> {
    DATE_RE
        .find_iter(text)
        .map(|m| DateToken {
            text: m.as_str().to_string(),
            pos: m.start(),
        })
        .collect()
}

/// Scan `text` for (name, time) group tokens in source-position order.
///
/// Cleaning is exact: the name is trimmed and then has every newline
/// removed (not replaced by a space); the time has its parens stripped.
pub fn extract_groups(text: &str) -> Vec<NameTimeGroup> {
    GROUP_RE
        .captures_iter(text)
        .map(|caps| NameTimeGroup {
            title: caps[1].trim().replace('\n', ""),
            time: caps[2].replace(['(', ')'], ""),
        })
        .collect()
}

// ── Tests ──
