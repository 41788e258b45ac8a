//! Template-message detection
//!
//! The bot posts a fill-in placeholder ("Tues: Time-Time" and so on) to
//! prompt players. When scanning a channel, that prompt must never be
//! read as a real submission; this predicate spots it.

use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:tues|tue|wed|thurs|thu|fri|sat|sun)\s*:\s*time\s*[-to]+\s*time$").unwrap()
});

const TEMPLATE_PHRASES: [&str; 2] =
    ["please put your schedule in this format", "all in est please"];

/// True when the text is the bot's own schedule-format prompt rather
/// than a player's submission.
pub fn is_schedule_template_message(text: &str) -> bool {
    let lowered = text.to_lowercase();
    if lowered.trim().is_empty() {
        return false;
    }

    if TEMPLATE_PHRASES.iter().any(|phrase| lowered.contains(phrase)) {
        return true;
    }

    let placeholder_lines = text
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .filter(|line| PLACEHOLDER_LINE_RE.is_match(line))
        .count();

    placeholder_lines >= 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_body_is_a_template() {
        let text = "Tues: Time-Time\nWed: Time-Time\nThurs: Time-Time\nFri: Time-Time";
        assert!(is_schedule_template_message(text));
    }

    #[test]
    fn format_prompt_phrase_is_a_template() {
        assert!(is_schedule_template_message(
            "Please put your schedule in this format, all in EST please"
        ));
    }

    #[test]
    fn real_submission_is_not_a_template() {
        assert!(!is_schedule_template_message("Tues: 7-10\nWed: after 8\nFri: n/a"));
    }

    #[test]
    fn two_placeholder_lines_are_not_enough() {
        assert!(!is_schedule_template_message("Tues: Time-Time\nWed: Time-Time"));
    }

    #[test]
    fn empty_text_is_not_a_template() {
        assert!(!is_schedule_template_message("   \n  "));
    }
}
