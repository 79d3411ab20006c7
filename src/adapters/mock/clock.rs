//! Settable clock for tests.

use chrono::{DateTime, Duration, FixedOffset};
use std::sync::{Arc, Mutex};

use crate::traits::Clock;

/// Clock frozen at a chosen instant until moved explicitly.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Arc<Mutex<DateTime<FixedOffset>>>,
}

impl FixedClock {
    /// Freeze the clock at `now`.
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Parse an RFC 3339 instant, e.g. `2024-03-10T15:00:00+00:00`.
    ///
    /// Panics on malformed input; intended for test fixtures.
    pub fn at(rfc3339: &str) -> Self {
        Self::new(DateTime::parse_from_rfc3339(rfc3339).expect("valid RFC 3339 fixture"))
    }

    /// Jump to a new instant.
    pub fn set(&self, now: DateTime<FixedOffset>) {
        *self.now.lock().unwrap() = now;
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for FixedClock {
    type Tz = FixedOffset;

    fn now(&self) -> DateTime<FixedOffset> {
        *self.now.lock().unwrap()
    }
}
