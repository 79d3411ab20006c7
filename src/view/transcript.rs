//! One chat message, prepared for a transcript renderer.

use chrono::TimeZone;
use serde::Serialize;

use crate::highlight::{highlight, Segment};
use crate::models::{ChatMessage, MessageOrigin};

/// Time shown next to the sender, e.g. `3:04 PM`.
const SHORT_TIME_FORMAT: &str = "%-I:%M %p";
/// Time shown on hover, e.g. `3:04:05 PM +00:00`.
const FULL_TIME_FORMAT: &str = "%-I:%M:%S %p %:z";

/// Which side of the transcript a bubble sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Start,
    End,
}

impl From<MessageOrigin> for Alignment {
    fn from(origin: MessageOrigin) -> Self {
        match origin {
            MessageOrigin::Local => Alignment::End,
            MessageOrigin::Remote => Alignment::Start,
        }
    }
}

/// Render-ready view of a [`ChatMessage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry<'a> {
    pub origin: MessageOrigin,
    pub alignment: Alignment,
    pub sender_name: Option<&'a str>,
    pub edited: bool,
    /// Short local time label
    pub time_label: String,
    /// Full local time, for tooltips
    pub title: String,
    pub segments: Vec<Segment<'a>>,
}

impl<'a> TranscriptEntry<'a> {
    /// Prepare `message` for display in timezone `tz`.
    pub fn new<Tz>(message: &'a ChatMessage, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let local_time = message.timestamp.with_timezone(tz);

        Self {
            origin: message.origin,
            alignment: message.origin.into(),
            sender_name: message.sender_name.as_deref().filter(|n| !n.is_empty()),
            edited: message.edited,
            time_label: local_time.format(SHORT_TIME_FORMAT).to_string(),
            title: local_time.format(FULL_TIME_FORMAT).to_string(),
            segments: highlight(&message.text),
        }
    }
}
