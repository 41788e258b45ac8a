//! End-to-end tests of the parsing pipeline over realistic submissions.

use pretty_assertions::assert_eq;

use scrimtime::{
    is_schedule_template_message, parse_schedules_from_text, split_transcript, DayAvailability,
    DayKey, ParseStatus, TimeRange,
};

#[test]
fn full_week_submission_parses_into_one_block() {
    let text = "Tues: 7-10\nWed: after 8\nThurs: n/a\nFri: 6-9, after 10\nSat: open\nSun: before 9";
    let report = parse_schedules_from_text(text);

    assert_eq!(report.schedules.len(), 1);
    let block = &report.schedules[0];
    assert_eq!(block.len(), 6);

    assert_eq!(
        block.get(DayKey::Tues).unwrap().windows(),
        &[TimeRange::new(19 * 60, 22 * 60)]
    );
    assert_eq!(
        block.get(DayKey::Wed).unwrap().windows(),
        &[TimeRange::new(20 * 60, 24 * 60)]
    );
    assert_eq!(block.get(DayKey::Thurs), Some(&DayAvailability::Unavailable));
    assert_eq!(
        block.get(DayKey::Fri).unwrap().windows(),
        &[TimeRange::new(22 * 60, 24 * 60), TimeRange::new(18 * 60, 21 * 60)]
    );
    assert_eq!(block.get(DayKey::Sat).unwrap().windows(), &[TimeRange::new(0, 24 * 60)]);
    assert_eq!(block.get(DayKey::Sun).unwrap().windows(), &[TimeRange::new(0, 21 * 60)]);

    assert_eq!(report.status(), ParseStatus::Complete);
}

#[test]
fn duplicate_day_without_label_means_two_people() {
    let report = parse_schedules_from_text("Tues: 7-10\nWed: 8-11\nTues: 7-10");
    assert_eq!(report.schedules.len(), 2);
    assert_eq!(report.schedules[0].len(), 2);
    assert_eq!(report.schedules[1].len(), 1);
}

#[test]
fn labeled_sections_split_one_paste_into_blocks() {
    let text = "Talen:\nTues: 7-10\nWed: open\n\nMarch:\nTues: 8-11\nWed: n/a";
    let report = parse_schedules_from_text(text);
    assert_eq!(report.schedules.len(), 2);
    assert_eq!(
        report.schedules[1].get(DayKey::Tues).unwrap().windows(),
        &[TimeRange::new(20 * 60, 23 * 60)]
    );
    assert_eq!(report.schedules[1].get(DayKey::Wed), Some(&DayAvailability::Unavailable));
}

#[test]
fn any_day_except_sunday_rules_out_sunday_only() {
    let report = parse_schedules_from_text("any day except sunday");
    assert_eq!(report.schedules.len(), 1);
    let block = &report.schedules[0];
    assert_eq!(block.len(), 6);

    for day in [DayKey::Tues, DayKey::Wed, DayKey::Thurs, DayKey::Fri, DayKey::Sat] {
        assert_eq!(block.get(day).unwrap().windows(), &[TimeRange::new(0, 24 * 60)]);
    }
    assert_eq!(block.get(DayKey::Sun), Some(&DayAvailability::Unavailable));
}

#[test]
fn typo_ridden_submission_still_parses() {
    let text = "wed: aftr 8\nthurs: befor 10\nsat: 6-9";
    let report = parse_schedules_from_text(text);
    assert_eq!(report.schedules.len(), 1);
    let block = &report.schedules[0];
    assert_eq!(block.get(DayKey::Wed).unwrap().windows(), &[TimeRange::new(20 * 60, 24 * 60)]);
    assert_eq!(block.get(DayKey::Thurs).unwrap().windows(), &[TimeRange::new(0, 22 * 60)]);
    assert_eq!(block.get(DayKey::Sat).unwrap().windows(), &[TimeRange::new(18 * 60, 21 * 60)]);
}

#[test]
fn day_range_with_timezone_noise_expands() {
    let report = parse_schedules_from_text("tues-thurs: 8-10pm EST");
    let block = &report.schedules[0];
    for day in [DayKey::Tues, DayKey::Wed, DayKey::Thurs] {
        assert_eq!(block.get(day).unwrap().windows(), &[TimeRange::new(20 * 60, 22 * 60)]);
    }
}

#[test]
fn soft_preference_marks_ranges_discouraged() {
    let report = parse_schedules_from_text("Sun: 7-10 but would prefer not");
    let windows = report.schedules[0].get(DayKey::Sun).unwrap().windows().to_vec();
    assert_eq!(windows, vec![TimeRange::discouraged(19 * 60, 22 * 60)]);
}

#[test]
fn chatter_lines_are_ignored_without_failing() {
    let text = "hey everyone\nTues: 7-10\ngl hf\nWed: open";
    let report = parse_schedules_from_text(text);
    assert_eq!(report.schedules.len(), 1);
    assert_eq!(report.schedules[0].len(), 2);
    assert_eq!(report.status(), ParseStatus::Complete);
}

#[test]
fn unreadable_schedule_lines_classify_as_partial() {
    let report = parse_schedules_from_text("Tues: 7-10\nwed: tbd");
    assert_eq!(report.schedules.len(), 1);
    assert_eq!(report.status(), ParseStatus::Partial);
}

#[test]
fn plain_chatter_classifies_as_unrecognized() {
    let report = parse_schedules_from_text("see you at the game");
    assert!(report.schedules.is_empty());
    assert_eq!(report.status(), ParseStatus::Unrecognized);
}

#[test]
fn template_message_is_detected_and_real_text_is_not() {
    let template = "Please put your schedule in this format (all in EST please):\nTues: Time-Time\nWed: Time-Time\nThurs: Time-Time\nFri: Time-Time\nSat: Time-Time\nSun: Time-Time";
    assert!(is_schedule_template_message(template));
    assert!(!is_schedule_template_message("Tues: 7-10\nWed: 8-11"));
}

#[test]
fn transcript_chunks_parse_independently() {
    let text = "Talen\nRole icon, Sharks — Yesterday at 9:12 PM\nTues: 7-10\nWed: open\nMarch\nRole icon, Jets — Yesterday at 9:30 PM\nTues: 8-11\nWed: 9-12";
    let chunks = split_transcript(text, "Unknown");
    assert_eq!(chunks.len(), 2);

    let first = parse_schedules_from_text(&chunks[0].content);
    let second = parse_schedules_from_text(&chunks[1].content);
    assert_eq!(first.schedules.len(), 1);
    assert_eq!(second.schedules.len(), 1);
    assert_eq!(
        second.schedules[0].get(DayKey::Tues).unwrap().windows(),
        &[TimeRange::new(20 * 60, 23 * 60)]
    );
}
