use criterion::{black_box, criterion_group, criterion_main, Criterion};

use scrimtime::{compute_overlaps, parse_schedules_from_text, split_transcript};

const SUBMISSION: &str = "Tues: 7-10\nWed: after 8\nThurs: n/a\nFri: 6-9, after 10\nSat: open\nSun: 7-10 but would prefer not";

fn transcript_fixture() -> String {
    let mut text = String::new();
    for i in 0..20 {
        text.push_str(&format!("Player{}\nRole icon, Team — Yesterday at 9:0{} PM\n", i, i % 10));
        text.push_str(SUBMISSION);
        text.push('\n');
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_single_submission", |b| {
        b.iter(|| parse_schedules_from_text(black_box(SUBMISSION)))
    });

    let transcript = transcript_fixture();
    c.bench_function("parse_transcript_dump", |b| {
        b.iter(|| {
            let chunks = split_transcript(black_box(&transcript), "Unknown");
            chunks
                .iter()
                .flat_map(|chunk| parse_schedules_from_text(&chunk.content).schedules)
                .count()
        })
    });
}

fn bench_overlap(c: &mut Criterion) {
    let transcript = transcript_fixture();
    let blocks: Vec<_> = split_transcript(&transcript, "Unknown")
        .iter()
        .flat_map(|chunk| parse_schedules_from_text(&chunk.content).schedules)
        .collect();

    c.bench_function("compute_overlaps_20_players", |b| {
        b.iter(|| compute_overlaps(black_box(&blocks), false))
    });
}

criterion_group!(benches, bench_parse, bench_overlap);
criterion_main!(benches);
