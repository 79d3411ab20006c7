//! Calendar-relative labels for the last check-in.
//!
//! Dates are compared by their calendar components in the viewer's timezone,
//! never by elapsed hours: 23:59 viewed at 00:05 the next day is "yesterday".

use chrono::{DateTime, Days, TimeZone, Utc};

/// Label for a check-in on the viewer's current date.
pub const EARLIER_TODAY: &str = "earlier today";
/// Label for a check-in on the day before the viewer's current date.
pub const YESTERDAY: &str = "yesterday";

/// Short month/day layout used for older check-ins, e.g. `Mar 4`.
const MONTH_DAY_FORMAT: &str = "%b %-d";

/// Describe when the last check-in happened, relative to `now`.
///
/// `now`'s timezone decides what "today" means; `timestamp` is converted into
/// it before comparing dates. Returns `None` when there is no check-in to show.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use mindful::format::format_last_check_in;
///
/// let now: DateTime<Utc> = "2024-03-10T15:00:00Z".parse().unwrap();
/// let earlier: DateTime<Utc> = "2024-03-01T12:00:00Z".parse().unwrap();
/// assert_eq!(format_last_check_in(Some(earlier), &now).as_deref(), Some("Mar 1"));
/// assert_eq!(format_last_check_in(None, &now), None);
/// ```
pub fn format_last_check_in<Tz: TimeZone>(
    timestamp: Option<DateTime<Utc>>,
    now: &DateTime<Tz>,
) -> Option<String> {
    let timestamp = timestamp?.with_timezone(&now.timezone());

    let today = now.date_naive();
    let day = timestamp.date_naive();

    if day == today {
        return Some(EARLIER_TODAY.to_string());
    }
    if today.checked_sub_days(Days::new(1)) == Some(day) {
        return Some(YESTERDAY.to_string());
    }

    Some(day.format(MONTH_DAY_FORMAT).to_string())
}
