//! Time-token and range parsing
//!
//! Converts single lexical time tokens ("8", "8:30pm", "8am") into minutes
//! since midnight, and hyphen/"to"-separated pairs into [`TimeRange`]s.
//! Submissions frequently tack on timezone markers ("8pm EST", "@9
//! eastern"); those are stripped before matching. Every function here is
//! total: malformed input yields `None`, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::conventions::{Meridiem, DEFAULT_MERIDIEM, MINUTES_PER_DAY};
use crate::types::TimeRange;

static TIME_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})(?::([0-5]\d))?\s*(am|pm)?$").unwrap());

// Abbreviations like est, edt, cst, pt, mdt; the text is lowercased first.
static TZ_ABBREV_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:e|c|m|p)(?:s|d)?t\b").unwrap());

static TZ_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:eastern|central|mountain|pacific)\b").unwrap());

static TO_SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+to\s+").unwrap());

/// Strip timezone abbreviations and names from already-lowercased text.
pub(crate) fn strip_timezone_markers(text: &str) -> String {
    let text = TZ_ABBREV_RE.replace_all(text, "");
    TZ_NAME_RE.replace_all(&text, "").into_owned()
}

/// Parse one time token into minutes since midnight.
///
/// Accepts hour 1-12, optional `:MM`, optional `am`/`pm`. A missing
/// meridiem defaults to PM ([`DEFAULT_MERIDIEM`]). Returns `None` for
/// anything malformed; callers skip the enclosing clause.
pub fn parse_time_token(token: &str) -> Option<u32> {
    let lowered = token.trim().to_lowercase();
    let stripped = strip_timezone_markers(lowered.trim_start_matches('@'));
    let caps = TIME_TOKEN_RE.captures(stripped.trim())?;

    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps.get(2).map_or(Ok(0), |m| m.as_str().parse()).ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }

    let meridiem = match caps.get(3).map(|m| m.as_str()) {
        Some("am") => Meridiem::Am,
        Some("pm") => Meridiem::Pm,
        _ => DEFAULT_MERIDIEM,
    };

    let hour24 = match meridiem {
        Meridiem::Am => {
            if hour == 12 {
                0
            } else {
                hour
            }
        }
        Meridiem::Pm => {
            if hour == 12 {
                12
            } else {
                hour + 12
            }
        }
    };

    Some(hour24 * 60 + minute)
}

/// Parse a two-sided range like "6-8", "8:30pm - 11", or "6 to 10".
///
/// An end at or before the start is reinterpreted as running to midnight,
/// which covers the common "6-12" (6 PM to midnight) pattern. Produced
/// ranges are never discouraged; that flag belongs to the expression
/// layer.
pub fn parse_range(value: &str) -> Option<TimeRange> {
    let cleaned = value.replace(['\u{2013}', '\u{2014}'], "-");
    let cleaned = TO_SEPARATOR_RE.replace_all(&cleaned, "-");
    let cleaned = cleaned.replace('@', "");

    let parts: Vec<&str> =
        cleaned.split('-').map(str::trim).filter(|part| !part.is_empty()).collect();
    if parts.len() != 2 {
        return None;
    }

    let start = parse_time_token(parts[0])?;
    let end = parse_time_token(parts[1])?;

    let end = if end <= start { MINUTES_PER_DAY } else { end };
    if end <= start {
        return None;
    }

    Some(TimeRange::new(start, end))
}
