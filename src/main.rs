//! Diagnostic CLI for the scheduling-overlap engine.
//!
//! Reads a pasted submission (or a channel-transcript dump with
//! `--transcript`) from a file or stdin, prints how it parsed, and
//! suggests the best common windows. Handy for checking why the bot did
//! or did not understand somebody's schedule message.

use std::io::Read;

use anyhow::{Context, Result};
use env_logger::Env;
use log::{info, warn};

use scrimtime::display::format_window;
use scrimtime::{
    is_schedule_template_message, parse_schedules_from_text, split_transcript,
    suggest_overlap_windows, ParseStatus, ScheduleBlock,
};

#[derive(Debug, Default)]
struct CliArgs {
    input_path: Option<String>,
    transcript: bool,
    json: bool,
    top: usize,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = CliArgs { top: 3, ..CliArgs::default() };
        let mut iter = std::env::args().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--transcript" => args.transcript = true,
                "--json" => args.json = true,
                "--top" => {
                    let value = iter.next().context("--top requires a number")?;
                    args.top = value.parse().context("--top requires a number")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other if other.starts_with("--") => {
                    anyhow::bail!("unknown flag: {}", other);
                }
                other => args.input_path = Some(other.to_string()),
            }
        }
        Ok(args)
    }
}

fn print_usage() {
    println!("Usage: scrimtime [--transcript] [--json] [--top N] [file]");
    println!("  Reads availability text from the file (or stdin) and prints");
    println!("  the parsed schedule blocks plus suggested overlap windows.");
    println!("  --transcript  treat input as a pasted channel history dump");
    println!("  --json        machine-readable output");
    println!("  --top N       number of suggestions to show (default 3)");
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer).context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn status_word(status: ParseStatus) -> &'static str {
    match status {
        ParseStatus::Complete => "complete",
        ParseStatus::Partial => "partial",
        ParseStatus::Unrecognized => "unrecognized",
    }
}

fn collect_blocks(text: &str, transcript: bool) -> Vec<ScheduleBlock> {
    let mut blocks = Vec::new();

    if transcript {
        for pseudo in split_transcript(text, "Unknown") {
            if is_schedule_template_message(&pseudo.content) {
                info!("skipping template message attributed to {}", pseudo.author_name);
                continue;
            }
            let report = parse_schedules_from_text(&pseudo.content);
            info!(
                "{}: {} block(s), parse {}",
                pseudo.author_name,
                report.schedules.len(),
                status_word(report.status())
            );
            if report.status() == ParseStatus::Partial {
                warn!("could not fully read schedule from {}", pseudo.author_name);
            }
            blocks.extend(report.schedules);
        }
    } else {
        let report = parse_schedules_from_text(text);
        info!(
            "parsed {} block(s) from input, parse {}",
            report.schedules.len(),
            status_word(report.status())
        );
        blocks.extend(report.schedules);
    }

    blocks
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let args = CliArgs::parse()?;
    let text = read_input(args.input_path.as_deref())?;

    let blocks = collect_blocks(&text, args.transcript);
    if blocks.is_empty() {
        println!("No readable schedules found in the input.");
        return Ok(());
    }

    let suggestion = suggest_overlap_windows(&blocks);

    if args.json {
        let output = serde_json::json!({
            "schedules": blocks,
            "windows": suggestion.windows,
            "used_discouraged_fallback": suggestion.used_discouraged_fallback,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Considered {} schedule block(s).", blocks.len());
    if suggestion.windows.is_empty() {
        println!("No overlapping availability found.");
        return Ok(());
    }

    println!("Best overlap windows:");
    for window in suggestion.windows.iter().take(args.top) {
        println!("- {}", format_window(window));
    }
    if suggestion.used_discouraged_fallback {
        println!("(Used \"would prefer not\" slots because no fully preferred overlap exists.)");
    }

    Ok(())
}
