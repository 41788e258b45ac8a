//! Day-token resolution and day-range expansion
//!
//! Players spell weekdays every way imaginable; the alias table maps the
//! spellings (and the misspellings that actually show up in submissions)
//! to canonical keys. Range expansion walks the week order and wraps
//! around the cycle, so "Fri-Mon" works.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::DayKey;

/// Day-word alternation shared by every pattern that scans for weekday
/// mentions. Longer spellings come first so "tuesday" is consumed whole.
pub(crate) const DAY_WORD: &str = "monday|mon|tuesday|tues?|wed(?:nesday)?|thurs?|thu(?:rsday)?|fri(?:day)?|sat(?:urday)?|sun(?:day)?";

static DAY_MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)\b({DAY_WORD})\b")).unwrap());

impl DayKey {
    /// Resolve one day token to its canonical key. Covers abbreviations
    /// and the misspellings seen in real submissions.
    pub fn from_token(token: &str) -> Option<DayKey> {
        match token.trim().to_lowercase().as_str() {
            "monday" | "mon" => Some(DayKey::Mon),
            "tuesday" | "tues" | "tue" => Some(DayKey::Tues),
            "wednesday" | "wedneday" | "wendsday" | "wensday" | "wensdey" | "wed" => {
                Some(DayKey::Wed)
            }
            "thursday" | "thurday" | "thirsday" | "thurs" | "thu" => Some(DayKey::Thurs),
            "friday" | "fri" => Some(DayKey::Fri),
            "saturday" | "saturaday" | "sat" => Some(DayKey::Sat),
            "sunday" | "sunnday" | "sun" => Some(DayKey::Sun),
            _ => None,
        }
    }

    fn week_index(self) -> usize {
        DayKey::WEEK.iter().position(|&d| d == self).unwrap_or(0)
    }
}

/// Expand "start through end" into an ordered day list, wrapping around
/// the week when the span crosses it ("Fri-Mon" gives fri, sat, sun, mon).
pub fn expand_day_range(start: DayKey, end: DayKey) -> Vec<DayKey> {
    let start_idx = start.week_index();
    let end_idx = end.week_index();

    if start_idx <= end_idx {
        DayKey::WEEK[start_idx..=end_idx].to_vec()
    } else {
        DayKey::WEEK[start_idx..]
            .iter()
            .chain(DayKey::WEEK[..=end_idx].iter())
            .copied()
            .collect()
    }
}

/// Every distinct day mentioned in free text, in first-mention order.
pub fn extract_mentioned_days(text: &str) -> Vec<DayKey> {
    let mut seen = Vec::new();
    for caps in DAY_MENTION_RE.captures_iter(text) {
        if let Some(day) = DayKey::from_token(&caps[1]) {
            if !seen.contains(&day) {
                seen.push(day);
            }
        }
    }
    seen
}
