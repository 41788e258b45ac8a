//! Multi-participant overlap computation
//!
//! A sweep over each tracked day: collect every range boundary as a cut
//! point, test the midpoint of each consecutive pair against every
//! participant, and merge the covered sub-intervals into maximal windows.
//! A day is only considered when every participant said something about
//! it — no information means no claim of overlap.
//!
//! Discouraged ranges ("would prefer not") are excluded from the strict
//! pass and only consulted when the strict pass comes up empty; the
//! suggestion wrapper records when that fallback happened so callers can
//! disclose it.

use log::debug;

use crate::types::{DayKey, OverlapSuggestion, OverlapWindow, ScheduleBlock, TimeRange};

/// Compute every common window across all participants, sorted by
/// descending duration.
pub fn compute_overlaps(schedules: &[ScheduleBlock], allow_discouraged: bool) -> Vec<OverlapWindow> {
    let mut overlaps = Vec::new();

    for &day in DayKey::TRACKED.iter() {
        let Some(effective) = effective_ranges_for_day(schedules, day, allow_discouraged) else {
            continue;
        };

        let mut points: Vec<u32> =
            effective.iter().flatten().flat_map(|r| [r.start, r.end]).collect();
        points.sort_unstable();
        points.dedup();
        if points.len() < 2 {
            continue;
        }

        let mut merged: Vec<(u32, u32)> = Vec::new();
        for pair in points.windows(2) {
            let (start, end) = (pair[0], pair[1]);

            // Doubled midpoint keeps the half-open containment test in
            // integers.
            let mid2 = start + end;
            let covered = effective
                .iter()
                .all(|ranges| ranges.iter().any(|r| mid2 >= 2 * r.start && mid2 < 2 * r.end));
            if !covered {
                continue;
            }

            match merged.last_mut() {
                Some(prev) if prev.1 == start => prev.1 = end,
                _ => merged.push((start, end)),
            }
        }

        for (start, end) in merged {
            if end > start {
                overlaps.push(OverlapWindow { day, start, end, duration: end - start });
            }
        }
    }

    overlaps.sort_by(|a, b| b.duration.cmp(&a.duration));
    overlaps
}

/// Per-participant range sets for one day, with discouraged ranges
/// filtered unless allowed. `None` when any participant lacks an entry
/// for the day or filters down to nothing.
fn effective_ranges_for_day(
    schedules: &[ScheduleBlock],
    day: DayKey,
    allow_discouraged: bool,
) -> Option<Vec<Vec<TimeRange>>> {
    let mut effective = Vec::with_capacity(schedules.len());
    for block in schedules {
        let availability = block.get(day)?;
        let ranges: Vec<TimeRange> = availability
            .windows()
            .iter()
            .filter(|r| allow_discouraged || !r.discouraged)
            .copied()
            .collect();
        if ranges.is_empty() {
            return None;
        }
        effective.push(ranges);
    }
    Some(effective)
}

/// Two-tier overlap suggestion: strict first, discouraged slots only as
/// a last resort, and flagged when used.
pub fn suggest_overlap_windows(schedules: &[ScheduleBlock]) -> OverlapSuggestion {
    let strict = compute_overlaps(schedules, false);
    if !strict.is_empty() {
        return OverlapSuggestion { windows: strict, used_discouraged_fallback: false };
    }

    let fallback = compute_overlaps(schedules, true);
    let used_discouraged_fallback = !fallback.is_empty();
    if used_discouraged_fallback {
        debug!("strict overlap pass was empty; fell back to discouraged slots");
    }
    OverlapSuggestion { windows: fallback, used_discouraged_fallback }
}
