//! Human-readable time labels.

pub mod relative_time;

pub use relative_time::{format_last_check_in, EARLIER_TODAY, YESTERDAY};
