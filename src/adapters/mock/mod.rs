//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses and latency
//! - [`FixedClock`] - clock frozen at a chosen instant

pub mod clock;
pub mod http;

pub use clock::FixedClock;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
