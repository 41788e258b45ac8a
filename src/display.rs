//! Rendering helpers for user-facing suggestion text.

use crate::conventions::MINUTES_PER_DAY;
use crate::types::OverlapWindow;

/// Render minutes-of-day as a 12-hour clock label; 1440 wraps to
/// "12:00 AM".
pub fn format_minutes(total_minutes: u32) -> String {
    let normalized =
        if total_minutes >= MINUTES_PER_DAY { total_minutes % MINUTES_PER_DAY } else { total_minutes };
    let hour24 = normalized / 60;
    let minute = normalized % 60;
    let meridiem = if hour24 >= 12 { "PM" } else { "AM" };
    let hour12 = (hour24 + 11) % 12 + 1;
    format!("{}:{:02} {}", hour12, minute, meridiem)
}

/// One suggestion line, e.g. "Tuesday: 7:00 PM - 10:00 PM".
pub fn format_window(window: &OverlapWindow) -> String {
    format!(
        "{}: {} - {}",
        window.day.label(),
        format_minutes(window.start),
        format_minutes(window.end)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DayKey;
    use test_case::test_case;

    #[test_case(0, "12:00 AM")]
    #[test_case(30, "12:30 AM")]
    #[test_case(12 * 60, "12:00 PM")]
    #[test_case(19 * 60, "7:00 PM")]
    #[test_case(23 * 60 + 59, "11:59 PM")]
    #[test_case(24 * 60, "12:00 AM"; "end of day wraps")]
    fn clock_labels(minutes: u32, expected: &str) {
        assert_eq!(format_minutes(minutes), expected);
    }

    #[test]
    fn window_line_reads_naturally() {
        let window =
            OverlapWindow { day: DayKey::Tues, start: 19 * 60, end: 22 * 60, duration: 180 };
        assert_eq!(format_window(&window), "Tuesday: 7:00 PM - 10:00 PM");
    }
}
