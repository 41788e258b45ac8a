//! League scheduling conventions baked into the parser.
//!
//! These are deliberate domain rules, not parsing bugs: the league plays
//! evenings in a single fixed reference zone, so bare hours lean PM and
//! "afternoon" starts when matches can actually happen. Keep them here as
//! named constants rather than scattering literals through the parsers.

/// Minutes in a day; also the canonical "until midnight" range end.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Half of a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// A bare hour with no am/pm is read as PM. League matches are scheduled
/// in the evening, so "7" in a submission means 7 PM. The adjustment only
/// applies to hours 1-11; a bare "12" stays noon.
pub const DEFAULT_MERIDIEM: Meridiem = Meridiem::Pm;

/// "Afternoon" in a submission maps to 17:00-24:00. Not a literal
/// afternoon: it is the earliest the league will schedule, so the word is
/// read as "from early evening onward".
pub const AFTERNOON_WINDOW_START: u32 = 17 * 60;

/// A lone time token in a comma list ("7pm, 9pm") becomes a synthetic
/// block of this length, capped at end of day.
pub const BARE_TIME_BLOCK_MINUTES: u32 = 60;
