use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which side of the call produced a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageOrigin {
    /// Typed or spoken by the user on this device
    Local,
    /// Sent by the assistant
    Remote,
}

/// A chat message as received from the transcript stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Message body
    pub text: String,
    /// Originating side
    pub origin: MessageOrigin,
    /// When the message was sent, as epoch milliseconds on the wire
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// Display name of the sender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    /// Whether the message was edited after sending
    #[serde(default)]
    pub edited: bool,
}

impl ChatMessage {
    /// Create an unedited message with no sender name.
    pub fn new(text: impl Into<String>, origin: MessageOrigin, timestamp: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            origin,
            timestamp,
            sender_name: None,
            edited: false,
        }
    }

    /// Set the sender name.
    pub fn with_sender(mut self, name: impl Into<String>) -> Self {
        self.sender_name = Some(name.into());
        self
    }

    /// Mark the message as edited.
    pub fn with_edited(mut self, edited: bool) -> Self {
        self.edited = edited;
        self
    }

    pub fn is_local(&self) -> bool {
        self.origin == MessageOrigin::Local
    }
}
