//! Schedule-block assembly
//!
//! Folds parsed day entries across a text body into independent schedule
//! blocks. Two signals demarcate a new person's submission inside one
//! paste: a bare `Name:` label line, and a day key repeating (nobody
//! states the same day twice in their own schedule). The fold state is an
//! explicit [`BlockBuilder`] so the flush rules are testable on their
//! own.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::conversational::parse_conversational_entries;
use crate::parser::days::{expand_day_range, DAY_WORD};
use crate::parser::expression::parse_availability_expression;
use crate::parser::lines::{looks_like_schedule_line, split_multi_day_line};
use crate::types::{DayAvailability, DayKey, ParseDiagnostics, ParseReport, ScheduleBlock};

// Section labels like "Talen:" or "March:".
static LABEL_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9_.-]+)\s*:\s*$").unwrap());

// The governing day-line shape: optional name label, a day word, an
// optional "connector day" range, a separator, and the expression tail.
static DAY_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^\s*(?:[A-Za-z0-9_.-]+\s*:\s*)?({DAY_WORD})(?:\s*(?:-|to|till|through|thru|&|and)\s*({DAY_WORD}))?\s*[:\-]?\s*(.+)$"
    ))
    .unwrap()
});

/// Fold state for block assembly: completed blocks plus the in-progress
/// accumulator. Flushed blocks are never touched again.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    completed: Vec<ScheduleBlock>,
    current: ScheduleBlock,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one parsed day entry. A repeated day key means a different
    /// person's schedule begins here, so the in-progress block is flushed
    /// first.
    pub fn record(&mut self, day: DayKey, availability: DayAvailability) {
        if self.current.contains_day(day) {
            self.flush();
        }
        self.current.insert(day, availability);
    }

    /// Close out the in-progress block if it holds any parsed day.
    pub fn flush(&mut self) {
        if !self.current.is_empty() {
            self.completed.push(std::mem::take(&mut self.current));
        }
    }

    pub fn finish(mut self) -> Vec<ScheduleBlock> {
        self.flush();
        self.completed
    }
}

/// Parse a whole text body into schedule blocks plus diagnostics.
///
/// Never fails: lines that parse contribute entries, lines that do not
/// are skipped and only show up in the counters.
pub fn parse_schedules_from_text(text: &str) -> ParseReport {
    let mut builder = BlockBuilder::new();
    let mut diagnostics = ParseDiagnostics::default();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if looks_like_schedule_line(trimmed) {
            diagnostics.likely_schedule_lines += 1;
        }

        for candidate in split_multi_day_line(trimmed) {
            // A bare "Name:" line starts a new person's section. A lone
            // day word with a colon is not a section label.
            if let Some(caps) = LABEL_LINE_RE.captures(&candidate) {
                if DayKey::from_token(&caps[1]).is_none() {
                    builder.flush();
                }
                continue;
            }

            let Some(caps) = DAY_LINE_RE.captures(&candidate) else {
                if let Some(entries) = parse_conversational_entries(&candidate) {
                    if !entries.is_empty() {
                        diagnostics.matched_day_lines += 1;
                        for (day, availability) in entries {
                            diagnostics.handled_day_lines += 1;
                            builder.record(day, availability);
                        }
                    }
                }
                continue;
            };

            diagnostics.matched_day_lines += 1;

            let start_day = DayKey::from_token(&caps[1]);
            let end_day = caps.get(2).and_then(|m| DayKey::from_token(m.as_str()));
            let availability = parse_availability_expression(caps[3].trim());

            let (Some(start_day), Some(availability)) = (start_day, availability) else {
                continue;
            };

            let days = match end_day {
                Some(end) => expand_day_range(start_day, end),
                None => vec![start_day],
            };

            for day in days {
                if !day.is_tracked() {
                    continue;
                }
                diagnostics.handled_day_lines += 1;
                builder.record(day, availability.clone());
            }
        }
    }

    ParseReport { schedules: builder.finish(), diagnostics }
}
