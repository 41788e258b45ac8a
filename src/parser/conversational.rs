//! Conversational fallback parsing
//!
//! Handles lines that never match the `Day: range` shape, like "any day
//! except sunday" or "busy wednesday". Cue-word heuristics only: scan for
//! mentioned days plus positive/negative/exception phrasing and map the
//! combination to full-day availability or explicit unavailability. This
//! layer is deliberately approximate; a line that fits no rule simply
//! contributes nothing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::conventions::MINUTES_PER_DAY;
use crate::parser::days::extract_mentioned_days;
use crate::types::{DayAvailability, DayKey, TimeRange};

static ANY_DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:any day|all week|anytime this week)\b").unwrap());

static EXCEPT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:except|besides|but not)\b").unwrap());

static POSITIVE_CUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:any|anytime|free|available|works?|good|looking good|fine)\b").unwrap());

static NEGATIVE_CUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:unavailable|not available|cant|can't|busy|tough|no)\b").unwrap());

fn full_day() -> DayAvailability {
    DayAvailability::Available(vec![TimeRange::new(0, MINUTES_PER_DAY)])
}

/// Interpret a conversational line into per-day entries.
///
/// Returns `None` when the line carries no readable schedule statement.
/// Only tracked days are ever produced.
pub fn parse_conversational_entries(line: &str) -> Option<Vec<(DayKey, DayAvailability)>> {
    let lowered = line.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }

    let mentioned: Vec<DayKey> =
        extract_mentioned_days(&lowered).into_iter().filter(|d| d.is_tracked()).collect();
    let has_any_day_phrase = ANY_DAY_RE.is_match(&lowered);
    let has_except_phrase = EXCEPT_RE.is_match(&lowered);
    let has_positive_cue = POSITIVE_CUE_RE.is_match(&lowered);
    let has_negative_cue = NEGATIVE_CUE_RE.is_match(&lowered);

    if !has_any_day_phrase && mentioned.is_empty() {
        return None;
    }

    // "Any day except Sunday": everything open, the named days ruled out.
    if has_any_day_phrase && has_except_phrase && !mentioned.is_empty() {
        return Some(
            DayKey::TRACKED
                .iter()
                .map(|&day| {
                    if mentioned.contains(&day) {
                        (day, DayAvailability::Unavailable)
                    } else {
                        (day, full_day())
                    }
                })
                .collect(),
        );
    }

    // "Any day", "free all week": full availability across the week.
    if has_any_day_phrase && has_positive_cue && !has_negative_cue {
        return Some(DayKey::TRACKED.iter().map(|&day| (day, full_day())).collect());
    }

    if mentioned.is_empty() {
        return None;
    }

    if has_negative_cue && !has_positive_cue {
        return Some(mentioned.into_iter().map(|day| (day, DayAvailability::Unavailable)).collect());
    }

    if has_positive_cue {
        return Some(mentioned.into_iter().map(|day| (day, full_day())).collect());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn any_day_except_named_day() {
        let entries = parse_conversational_entries("any day except sunday").unwrap();
        assert_eq!(entries.len(), 6);
        for (day, availability) in entries {
            if day == DayKey::Sun {
                assert_eq!(availability, DayAvailability::Unavailable);
            } else {
                assert_eq!(availability, full_day());
            }
        }
    }

    #[test]
    fn any_day_positive_means_whole_week() {
        let entries = parse_conversational_entries("any day works for me").unwrap();
        assert_eq!(entries.len(), 6);
        assert!(entries.iter().all(|(_, a)| *a == full_day()));
    }

    #[test]
    fn named_days_with_negative_cue_are_unavailable() {
        let entries = parse_conversational_entries("busy wednesday and thursday").unwrap();
        assert_eq!(
            entries,
            vec![
                (DayKey::Wed, DayAvailability::Unavailable),
                (DayKey::Thurs, DayAvailability::Unavailable),
            ]
        );
    }

    #[test]
    fn named_days_with_positive_cue_are_open() {
        let entries = parse_conversational_entries("friday saturday works").unwrap();
        assert_eq!(entries, vec![(DayKey::Fri, full_day()), (DayKey::Sat, full_day())]);
    }

    #[test]
    fn monday_mentions_are_ignored() {
        // Monday is outside the tracked week; "free monday" names no
        // tracked day and the any-day phrase is absent.
        assert_eq!(parse_conversational_entries("free monday"), None);
    }

    #[test]
    fn days_without_cues_contribute_nothing() {
        assert_eq!(parse_conversational_entries("tuesday and wednesday huh"), None);
    }

    #[test]
    fn empty_line_is_no_match() {
        assert_eq!(parse_conversational_entries("   "), None);
    }
}
