//! Error types.
//!
//! Fetch failures are the only errors the core produces, and the poller
//! absorbs them: they are logged and counted, never propagated. The formatter
//! and the highlighter are total functions with no error type.

mod fetch;

pub use fetch::FetchError;
