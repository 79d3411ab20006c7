//! Data types exchanged with the stats endpoint and the transcript stream.

pub mod message;
pub mod stats;

pub use message::{ChatMessage, MessageOrigin};
pub use stats::{parse_check_in, StatsEnvelope, WellnessStats};
