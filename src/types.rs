//! Core data model for the scheduling-overlap engine
//!
//! Everything here is a plain value: parsed availability flows forward
//! through the pipeline and nothing persists between invocations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::conventions::MINUTES_PER_DAY;

/// Canonical day keys. `Mon` exists only to support range expansion like
/// "Sun-Tues"; the league plays Tuesday through Sunday, so `Mon` never
/// appears in assembler or overlap output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    Mon,
    Tues,
    Wed,
    Thurs,
    Fri,
    Sat,
    Sun,
}

impl DayKey {
    /// Week order used for range expansion.
    pub const WEEK: [DayKey; 7] = [
        DayKey::Mon,
        DayKey::Tues,
        DayKey::Wed,
        DayKey::Thurs,
        DayKey::Fri,
        DayKey::Sat,
        DayKey::Sun,
    ];

    /// The six days that can appear in final output.
    pub const TRACKED: [DayKey; 6] = [
        DayKey::Tues,
        DayKey::Wed,
        DayKey::Thurs,
        DayKey::Fri,
        DayKey::Sat,
        DayKey::Sun,
    ];

    pub fn is_tracked(self) -> bool {
        self != DayKey::Mon
    }

    /// Canonical short key, matching the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            DayKey::Mon => "mon",
            DayKey::Tues => "tues",
            DayKey::Wed => "wed",
            DayKey::Thurs => "thurs",
            DayKey::Fri => "fri",
            DayKey::Sat => "sat",
            DayKey::Sun => "sun",
        }
    }

    /// Display label for user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            DayKey::Mon => "Monday",
            DayKey::Tues => "Tuesday",
            DayKey::Wed => "Wednesday",
            DayKey::Thurs => "Thursday",
            DayKey::Fri => "Friday",
            DayKey::Sat => "Saturday",
            DayKey::Sun => "Sunday",
        }
    }
}

/// One availability window in minutes of day, `0 <= start < end <= 1440`.
/// `end == 1440` means "until midnight"; an apparent wraparound such as
/// "10pm-2am" is canonicalized to end-of-day, never into a second day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: u32,
    pub end: u32,
    #[serde(default)]
    pub discouraged: bool,
}

impl TimeRange {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start < end && end <= MINUTES_PER_DAY);
        TimeRange { start, end, discouraged: false }
    }

    pub fn discouraged(start: u32, end: u32) -> Self {
        TimeRange { start, end, discouraged: true }
    }

    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Half-open containment test used by the overlap sweep.
    pub fn contains(&self, minute: u32) -> bool {
        minute >= self.start && minute < self.end
    }
}

/// Parsed availability for a single day. A day absent from a
/// [`ScheduleBlock`] means "no information"; `Unavailable` means the
/// person explicitly ruled the day out. The two must never be conflated:
/// parse functions signal "no match" with `Option::None`, not with an
/// empty window list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayAvailability {
    Unavailable,
    Available(Vec<TimeRange>),
}

impl DayAvailability {
    pub fn windows(&self) -> &[TimeRange] {
        match self {
            DayAvailability::Unavailable => &[],
            DayAvailability::Available(ranges) => ranges,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, DayAvailability::Unavailable)
    }
}

/// One person's one submission: per-day availability for the days the
/// source text actually mentioned. Flushed blocks are immutable; the
/// assembler only ever mutates its in-progress accumulator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleBlock {
    days: BTreeMap<DayKey, DayAvailability>,
}

impl ScheduleBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, day: DayKey, availability: DayAvailability) {
        self.days.insert(day, availability);
    }

    pub fn contains_day(&self, day: DayKey) -> bool {
        self.days.contains_key(&day)
    }

    pub fn get(&self, day: DayKey) -> Option<&DayAvailability> {
        self.days.get(&day)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DayKey, &DayAvailability)> {
        self.days.iter().map(|(day, availability)| (*day, availability))
    }
}

impl FromIterator<(DayKey, DayAvailability)> for ScheduleBlock {
    fn from_iter<I: IntoIterator<Item = (DayKey, DayAvailability)>>(iter: I) -> Self {
        ScheduleBlock { days: iter.into_iter().collect() }
    }
}

/// Line counters gathered while parsing one text body. These classify how
/// well a submission was understood; they never fail the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseDiagnostics {
    /// Lines that look like schedule statements (day word plus separator
    /// or intent word), whether or not they ultimately parsed.
    pub likely_schedule_lines: usize,
    /// Lines the day-line shape or the conversational fallback matched.
    pub matched_day_lines: usize,
    /// Day entries actually recorded into a block.
    pub handled_day_lines: usize,
}

/// How completely a submission was understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStatus {
    /// Every likely schedule line produced day entries.
    Complete,
    /// Some likely schedule lines could not be handled.
    Partial,
    /// Nothing usable was found.
    Unrecognized,
}

/// Output of the parsing pipeline for one text body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    pub schedules: Vec<ScheduleBlock>,
    pub diagnostics: ParseDiagnostics,
}

impl ParseReport {
    pub fn status(&self) -> ParseStatus {
        let d = &self.diagnostics;
        if d.likely_schedule_lines > 0 && d.handled_day_lines < d.likely_schedule_lines {
            ParseStatus::Partial
        } else if !self.schedules.is_empty() && d.likely_schedule_lines > 0 {
            ParseStatus::Complete
        } else {
            ParseStatus::Unrecognized
        }
    }
}

/// A maximal window on one day during which every participant is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapWindow {
    pub day: DayKey,
    pub start: u32,
    pub end: u32,
    pub duration: u32,
}

/// Result of the two-tier overlap computation. The fallback flag is true
/// only when discouraged slots had to be used because the strict pass
/// found nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapSuggestion {
    pub windows: Vec<OverlapWindow>,
    pub used_discouraged_fallback: bool,
}

/// One author's chunk of a pasted channel transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PseudoMessage {
    pub author_name: String,
    pub content: String,
}
