//! scrimtime: a scheduling-overlap engine for community league bots.
//!
//! Takes free-form, typo-ridden availability messages ("Tues: 7-10",
//! "any day except sunday", "busy wed night"), parses them into per-day
//! time ranges, and computes the windows where every participant is
//! simultaneously free. The crate does no network or storage I/O; the
//! surrounding bot feeds it plain text and renders its results.
//!
//! Entry points:
//! - [`parse_schedules_from_text`] — text body → schedule blocks + diagnostics
//! - [`split_transcript`] — pasted channel history → per-author chunks
//! - [`is_schedule_template_message`] — skip the bot's own format prompt
//! - [`compute_overlaps`] / [`suggest_overlap_windows`] — blocks → ranked
//!   common windows, with the two-tier discouraged-slot fallback

pub mod conventions;
pub mod display;
pub mod overlap;
pub mod parser;
pub mod template;
pub mod transcript;
pub mod types;

pub use overlap::{compute_overlaps, suggest_overlap_windows};
pub use parser::parse_schedules_from_text;
pub use template::is_schedule_template_message;
pub use transcript::split_transcript;
pub use types::{
    DayAvailability, DayKey, OverlapSuggestion, OverlapWindow, ParseDiagnostics, ParseReport,
    ParseStatus, PseudoMessage, ScheduleBlock, TimeRange,
};

/// Initialize logging for library consumers that do not configure their
/// own subscriber.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .format_target(false)
        .init();
}
