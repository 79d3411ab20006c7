//! Clock backed by the host's local time.

use chrono::{DateTime, Local};

use crate::traits::Clock;

/// Reads the system clock in the host's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Tz = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
