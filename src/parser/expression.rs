//! Availability-expression parsing
//!
//! Interprets the free-text tail of a day line ("after 8", "6-9, would
//! prefer not", "n/a") into either "unavailable", "open all day", or one
//! or more tagged time ranges. Match tiers apply in a fixed order; the
//! after/plus/before/range scans are cumulative, so one line can yield
//! several windows. Soft-preference phrasing marks every range the line
//! produces as discouraged; the flag is consumed only by the overlap
//! engine's fallback tier.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::conventions::{AFTERNOON_WINDOW_START, BARE_TIME_BLOCK_MINUTES, MINUTES_PER_DAY};
use crate::parser::time::{parse_range, parse_time_token, strip_timezone_markers};
use crate::types::{DayAvailability, TimeRange};

const TIME_PAT: &str = r"\d{1,2}(?::[0-5]\d)?\s*(?:am|pm)?";

// Misspellings that show up in real submissions, fixed before matching.
static TYPO_FIXES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\baftr\b", "after"),
        (r"\bafer\b", "after"),
        (r"\bfter\b", "after"),
        (r"\bbefor\b", "before"),
        (r"\bbefroe\b", "before"),
        (r"\bpreffer\b", "prefer"),
        (r"\bafernoon\b", "afternoon"),
        (r"\bavailble\b", "available"),
        (r"\bunavailble\b", "unavailable"),
    ]
    .into_iter()
    .map(|(pattern, fix)| (Regex::new(pattern).unwrap(), fix))
    .collect()
});

static TRAILING_PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.?!]+$").unwrap());

static DISCOURAGED_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"would\s+prefer\s+not", r"would\s+not\s+prefer", r"\bprefer\s+not\b"]
        .into_iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
});

static MORNING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bmorning\b").unwrap());
static AFTERNOON_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bafternoon\b").unwrap());
static ANY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bany\b").unwrap());
static FREE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bfree\b").unwrap());

static AFTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?:after|aft(?:er)?)\s+({TIME_PAT})")).unwrap());
static PLUS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(&format!(r"({TIME_PAT})\s*\+")).unwrap());
static BEFORE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?:before|bef(?:ore)?)\s+({TIME_PAT})")).unwrap());
static RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"({TIME_PAT})\s*(?:-|to)\s*({TIME_PAT})")).unwrap());

const OPEN_WORDS: [&str; 5] = ["open", "anytime", "free all day", "all day", "available all day"];

const UNAVAILABLE_WORDS: [&str; 7] =
    ["n/a", "na", "no", "unavailable", "not available", "cant", "can't"];

fn normalize(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    let stripped = strip_timezone_markers(&lowered);
    let mut text = TRAILING_PUNCT_RE.replace(&stripped, "").into_owned();
    for (pattern, fix) in TYPO_FIXES.iter() {
        text = pattern.replace_all(&text, *fix).into_owned();
    }
    text
}

fn tagged(start: u32, end: u32, discouraged: bool) -> TimeRange {
    TimeRange { start, end, discouraged }
}

/// Parse the free-text remainder of a day line.
///
/// Returns `None` when the text carries no availability information at
/// all; that is "no match", distinct from an explicit
/// [`DayAvailability::Unavailable`].
pub fn parse_availability_expression(value: &str) -> Option<DayAvailability> {
    let text = normalize(value);
    if text.is_empty() {
        return None;
    }

    let discouraged = DISCOURAGED_RES.iter().any(|re| re.is_match(&text));

    // The league never schedules mornings.
    if MORNING_RE.is_match(&text) {
        return Some(DayAvailability::Unavailable);
    }

    if AFTERNOON_RE.is_match(&text) {
        return Some(DayAvailability::Available(vec![tagged(
            AFTERNOON_WINDOW_START,
            MINUTES_PER_DAY,
            discouraged,
        )]));
    }

    if OPEN_WORDS.iter().any(|w| text.contains(w))
        || ANY_RE.is_match(&text)
        || FREE_RE.is_match(&text)
    {
        return Some(DayAvailability::Available(vec![tagged(0, MINUTES_PER_DAY, discouraged)]));
    }

    let mut ranges = Vec::new();

    for caps in AFTER_RE.captures_iter(&text) {
        if let Some(start) = parse_time_token(&caps[1]) {
            ranges.push(tagged(start, MINUTES_PER_DAY, discouraged));
        }
    }

    // "<time>+" shorthand, e.g. "8+".
    for caps in PLUS_RE.captures_iter(&text) {
        if let Some(start) = parse_time_token(&caps[1]) {
            ranges.push(tagged(start, MINUTES_PER_DAY, discouraged));
        }
    }

    for caps in BEFORE_RE.captures_iter(&text) {
        if let Some(end) = parse_time_token(&caps[1]) {
            ranges.push(tagged(0, end, discouraged));
        }
    }

    for caps in RANGE_RE.captures_iter(&text) {
        if let Some(range) = parse_range(&format!("{}-{}", &caps[1], &caps[2])) {
            ranges.push(tagged(range.start, range.end, discouraged));
        }
    }

    if !ranges.is_empty() {
        return Some(DayAvailability::Available(ranges));
    }

    // Comma-separated chunks with loose typing, e.g. "5-8, after 10" or
    // "7pm, 9pm".
    if text.contains(',') {
        for chunk in text.split(',').map(str::trim).filter(|c| !c.is_empty()) {
            if let Some(caps) = RANGE_RE.captures(chunk) {
                if let Some(range) = parse_range(&format!("{}-{}", &caps[1], &caps[2])) {
                    ranges.push(tagged(range.start, range.end, discouraged));
                }
                continue;
            }

            if let Some(caps) = AFTER_RE.captures(chunk) {
                if let Some(start) = parse_time_token(&caps[1]) {
                    ranges.push(tagged(start, MINUTES_PER_DAY, discouraged));
                }
                continue;
            }

            if let Some(caps) = PLUS_RE.captures(chunk) {
                if let Some(start) = parse_time_token(&caps[1]) {
                    ranges.push(tagged(start, MINUTES_PER_DAY, discouraged));
                }
                continue;
            }

            if let Some(caps) = BEFORE_RE.captures(chunk) {
                if let Some(end) = parse_time_token(&caps[1]) {
                    ranges.push(tagged(0, end, discouraged));
                }
                continue;
            }

            // A lone time like "7pm" becomes a synthetic one-hour block.
            if let Some(start) = parse_time_token(chunk) {
                let end = (start + BARE_TIME_BLOCK_MINUTES).min(MINUTES_PER_DAY);
                ranges.push(tagged(start, end, discouraged));
            }
        }

        if !ranges.is_empty() {
            return Some(DayAvailability::Available(ranges));
        }
    }

    if UNAVAILABLE_WORDS.iter().any(|w| text.contains(w)) {
        return Some(DayAvailability::Unavailable);
    }

    parse_range(&text)
        .map(|range| DayAvailability::Available(vec![tagged(range.start, range.end, discouraged)]))
}
