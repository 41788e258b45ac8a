//! Availability-text parsing pipeline
//!
//! Leaves first: time tokens and ranges, day resolution, then the
//! expression and conversational layers, and finally line splitting and
//! block assembly. Every stage is total — malformed input yields
//! `Option::None` or an empty result, never an error — because the source
//! text is human-authored and partial understanding is the common case.

pub mod blocks;
pub mod conversational;
pub mod days;
pub mod expression;
pub mod lines;
pub mod time;

pub use blocks::{parse_schedules_from_text, BlockBuilder};
pub use conversational::parse_conversational_entries;
pub use days::{expand_day_range, extract_mentioned_days};
pub use expression::parse_availability_expression;
pub use lines::{looks_like_schedule_line, split_multi_day_line};
pub use time::{parse_range, parse_time_token};
