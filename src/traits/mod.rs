//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET used by the stats provider
//! - [`Clock`] - current time for calendar-relative labels

pub mod clock;
pub mod http;

pub use clock::Clock;
pub use http::{Headers, HttpClient, HttpError, Response};
