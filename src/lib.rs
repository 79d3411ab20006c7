//! Mindful - data core for the Mindful Moments wellness assistant
//!
//! Keeps a polled snapshot of a user's session stats for the welcome screen,
//! labels the last check-in relative to today, and splits chat messages into
//! plain and keyword-emphasized spans for the transcript.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod highlight;
pub mod models;
pub mod stats;
pub mod traits;
pub mod view;
