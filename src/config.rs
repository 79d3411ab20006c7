//! Poller configuration.
//!
//! # Example
//!
//! ```ignore
//! use mindful::config::PollerConfig;
//! use std::time::Duration;
//!
//! let config = PollerConfig::default()
//!     .with_endpoint("http://localhost:3000/api/wellness-sessions")
//!     .with_interval(Duration::from_secs(3));
//! ```

use std::time::Duration;

/// Default stats endpoint.
pub const DEFAULT_STATS_URL: &str = "http://localhost:3000/api/wellness-sessions";
/// Default time between fetches, in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 3000;
/// Default upper bound on a single fetch, in milliseconds.
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10_000;

/// Environment variable overriding the stats endpoint.
pub const ENV_STATS_URL: &str = "MINDFUL_STATS_URL";
/// Environment variable overriding the poll interval (milliseconds).
pub const ENV_POLL_INTERVAL_MS: &str = "MINDFUL_POLL_INTERVAL_MS";
/// Environment variable overriding the fetch timeout (milliseconds).
pub const ENV_FETCH_TIMEOUT_MS: &str = "MINDFUL_FETCH_TIMEOUT_MS";

/// Settings for [`StatsPoller`](crate::stats::StatsPoller) and the HTTP stats provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerConfig {
    /// URL queried for the stats snapshot
    pub endpoint: String,
    /// Time between fetches
    pub interval: Duration,
    /// A fetch still pending after this long counts as failed
    pub fetch_timeout: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_STATS_URL.to_string(),
            interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            fetch_timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
        }
    }
}

impl PollerConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stats endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the poll interval. Zero is raised to one millisecond.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(Duration::from_millis(1));
        self
    }

    /// Set the per-fetch timeout.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Defaults overridden by `MINDFUL_STATS_URL`, `MINDFUL_POLL_INTERVAL_MS`
    /// and `MINDFUL_FETCH_TIMEOUT_MS`. Unparseable numbers are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_STATS_URL) {
            if !url.trim().is_empty() {
                config = config.with_endpoint(url.trim());
            }
        }
        if let Some(ms) = read_millis(ENV_POLL_INTERVAL_MS) {
            config = config.with_interval(Duration::from_millis(ms));
        }
        if let Some(ms) = read_millis(ENV_FETCH_TIMEOUT_MS) {
            config = config.with_fetch_timeout(Duration::from_millis(ms));
        }

        config
    }
}

fn read_millis(var: &str) -> Option<u64> {
    let raw = std::env::var(var).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(ms),
        Err(e) => {
            tracing::warn!("Ignoring {}={:?}: {}", var, raw, e);
            None
        }
    }
}
