//! Concrete implementations of the trait abstractions in `crate::traits`.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`SystemClock`] - host local time
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - configurable HTTP responses
//! - [`mock::FixedClock`] - frozen, settable clock

pub mod mock;
pub mod reqwest_http;
pub mod system_clock;

pub use mock::{FixedClock, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
pub use system_clock::SystemClock;
