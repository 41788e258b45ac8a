//! Line-level helpers for the schedule assembler
//!
//! A single submission line often covers several days ("Tuesday 7-10
//! Wednesday after 8"); before the expression parsers run, such lines are
//! cut into one chunk per day mention, with trailing connectors merged
//! forward so "Saturday and Sunday after 8" survives intact. Also hosts
//! the loose classifier that counts how many lines *look* like schedule
//! statements, which feeds the parse diagnostics.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::days::DAY_WORD;

static DAY_OCCURRENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)\b(?:{DAY_WORD})\b")).unwrap());

static TRAILING_CONNECTOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:-|to|till|through|thru|&|and)\s*$").unwrap());

// Looser day alternation than the parsing one; bare "tue"/"thu" count as
// mentions here even though only the alias table decides what parses.
static LOOSE_DAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:mon(?:day)?|tue(?:s|sday)?|wed(?:nesday)?|thu(?:rs|rsday)?|fri(?:day)?|sat(?:urday)?|sun(?:day)?)\b",
    )
    .unwrap()
});

static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[:\-]").unwrap());

static INTENT_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:any|anytime|free|except|after|before|unavailable|available|cant|can't|busy|works?|good)\b",
    )
    .unwrap()
});

/// Split a line mentioning several days into one chunk per day mention.
///
/// A chunk ending in a connector ("and", "-", "through", ...) is merged
/// into the following day's chunk so day-range expressions are not
/// truncated mid-phrase. Lines with fewer than two day mentions pass
/// through unchanged.
pub fn split_multi_day_line(line: &str) -> Vec<String> {
    let starts: Vec<usize> = DAY_OCCURRENCE_RE.find_iter(line).map(|m| m.start()).collect();
    if starts.len() <= 1 {
        return vec![line.to_string()];
    }

    let mut parts = Vec::new();
    let mut i = 0;
    while i < starts.len() {
        let start = starts[i];
        let mut end = starts.get(i + 1).copied().unwrap_or(line.len());
        let mut part = line[start..end].trim();

        if i + 1 < starts.len() && TRAILING_CONNECTOR_RE.is_match(part) {
            end = starts.get(i + 2).copied().unwrap_or(line.len());
            part = line[start..end].trim();
            i += 1;
        }

        if !part.is_empty() {
            parts.push(part.to_string());
        }
        i += 1;
    }

    if parts.is_empty() {
        vec![line.to_string()]
    } else {
        parts
    }
}

/// Loose test for "this line is probably a schedule statement".
///
/// Used only for diagnostics counting, so it deliberately over-matches:
/// a day word next to a separator or an intent word, or two day mentions
/// anywhere, is enough.
pub fn looks_like_schedule_line(line: &str) -> bool {
    let trimmed = line.trim().to_lowercase();
    if trimmed.is_empty() {
        return false;
    }

    let day_mentions = LOOSE_DAY_RE.find_iter(&trimmed).count();
    if day_mentions > 0 && SEPARATOR_RE.is_match(&trimmed) {
        return true;
    }

    // Conversational statements: "any day except sunday", "busy
    // wednesday night", "friday saturday works".
    if day_mentions > 0 && INTENT_WORD_RE.is_match(&trimmed) {
        return true;
    }

    day_mentions >= 2
}
