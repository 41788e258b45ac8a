//! Transcript splitting for the bulk-analysis path
//!
//! When someone pastes a stretch of channel history, each author's text
//! must be parsed independently. Copied transcripts arrive in two shapes:
//! the username on its own line followed by a "Role icon, Team — time"
//! marker line, or both collapsed onto a single line. This module only
//! splits; the chunks it returns are fed through the normal parsing
//! pipeline one by one.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::PseudoMessage;

static INLINE_AUTHOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(.+?)\s*role icon,").unwrap());

struct Marker {
    author_name: String,
    marker_line: usize,
    content_start: usize,
}

fn is_role_meta_line(line: &str) -> bool {
    line.trim().to_lowercase().starts_with("role icon,")
}

fn extract_inline_author(line: &str) -> Option<String> {
    INLINE_AUTHOR_RE
        .captures(line.trim())
        .map(|caps| caps[1].trim().to_string())
        .filter(|author| !author.is_empty())
}

fn next_non_empty(lines: &[&str], from: usize) -> Option<usize> {
    (from..lines.len()).find(|&idx| !lines[idx].trim().is_empty())
}

/// Split a raw transcript dump into per-author pseudo-messages.
///
/// Text before the first detected marker is attributed to that first
/// author; with no markers at all, the whole text becomes one chunk
/// under `fallback_author`.
pub fn split_transcript(raw_text: &str, fallback_author: &str) -> Vec<PseudoMessage> {
    let lines: Vec<&str> = raw_text.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l)).collect();

    let mut markers: Vec<Marker> = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        if line.is_empty() {
            i += 1;
            continue;
        }

        // Username line followed by its role/team marker line.
        if let Some(next_idx) = next_non_empty(&lines, i + 1) {
            if is_role_meta_line(lines[next_idx]) {
                markers.push(Marker {
                    author_name: line.to_string(),
                    marker_line: i,
                    content_start: next_idx + 1,
                });
                i = next_idx + 1;
                continue;
            }
        }

        // Collapsed copy/paste shape: "UsernameRole icon, Team — time".
        if let Some(author_name) = extract_inline_author(line) {
            markers.push(Marker { author_name, marker_line: i, content_start: i + 1 });
        }
        i += 1;
    }

    if markers.is_empty() {
        return vec![PseudoMessage {
            author_name: fallback_author.to_string(),
            content: raw_text.to_string(),
        }];
    }

    let mut chunks = Vec::new();
    for (idx, marker) in markers.iter().enumerate() {
        let end = markers.get(idx + 1).map_or(lines.len(), |next| next.marker_line);
        let body = lines[marker.content_start.min(lines.len())..end]
            .iter()
            .filter(|line| !is_role_meta_line(line))
            .copied()
            .collect::<Vec<_>>()
            .join("\n");
        let body = body.trim();

        // Preface text before the first marker belongs to that author.
        if idx == 0 && marker.marker_line > 0 {
            let preface = lines[..marker.marker_line]
                .iter()
                .filter(|line| !is_role_meta_line(line))
                .copied()
                .collect::<Vec<_>>()
                .join("\n");
            let preface = preface.trim();
            if !preface.is_empty() {
                chunks.push(PseudoMessage {
                    author_name: marker.author_name.clone(),
                    content: preface.to_string(),
                });
            }
        }

        if !body.is_empty() {
            chunks.push(PseudoMessage {
                author_name: marker.author_name.clone(),
                content: body.to_string(),
            });
        }
    }

    chunks
}
