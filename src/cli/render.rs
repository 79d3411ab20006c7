//! Plain-terminal rendering of the view models.

use crate::highlight::Segment;
use crate::view::{TranscriptEntry, WelcomeSummary};

const EMPHASIS_START: &str = "\x1b[1;36m";
const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";

/// Join segments, wrapping emphasized ones in bold cyan.
pub fn render_segments(segments: &[Segment<'_>]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Plain(text) => out.push_str(text),
            Segment::Emphasis(text) => {
                out.push_str(EMPHASIS_START);
                out.push_str(text);
                out.push_str(RESET);
            }
        }
    }
    out
}

/// Welcome summary, one line per item.
pub fn render_summary(summary: &WelcomeSummary) -> String {
    summary.lines().join("\n")
}

/// `[3:04 PM] Name: message`, with `(edited)` when applicable.
pub fn render_entry(entry: &TranscriptEntry<'_>) -> String {
    let mut out = format!("{}[{}]{} ", DIM, entry.time_label, RESET);
    if let Some(name) = entry.sender_name {
        out.push_str(name);
        out.push_str(": ");
    }
    out.push_str(&render_segments(&entry.segments));
    if entry.edited {
        out.push_str(" (edited)");
    }
    out
}
