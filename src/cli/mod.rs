//! CLI module for mindful.
//!
//! The binary is a plain-text renderer over the library: it parses flags,
//! then either highlights a message or shows the welcome summary once or
//! continuously.
//!
//! ```ignore
//! use mindful::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::Watch => run_watch(config).await?,
//!     other => ...,
//! }
//! ```

pub mod args;
pub mod render;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use render::{render_entry, render_segments, render_summary};
pub use version::{version_line, VERSION};
