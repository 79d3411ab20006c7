//! View models handed to renderers.
//!
//! Nothing here draws; each type is plain data a welcome screen or a
//! transcript list can lay out however it likes.

pub mod transcript;
pub mod welcome;

pub use transcript::{Alignment, TranscriptEntry};
pub use welcome::{WelcomeSummary, FIRST_CHECK_IN_GREETING};
