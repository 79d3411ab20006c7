//! Wall-clock abstraction.
//!
//! Relative labels ("earlier today", "yesterday") depend on the current date,
//! so view models read "now" through [`Clock`] instead of calling
//! `Local::now()` directly.

use chrono::{DateTime, TimeZone};

/// Source of the current time.
///
/// The returned value's timezone is the one calendar dates are compared in.
pub trait Clock: Send + Sync {
    /// Timezone of the viewer.
    type Tz: TimeZone;

    /// The current instant in the viewer's timezone.
    fn now(&self) -> DateTime<Self::Tz>;
}
