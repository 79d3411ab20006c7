use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Offset-less date-time layouts accepted for `lastCheckIn`, tried in order.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Snapshot of a user's session history as reported by the stats endpoint.
///
/// A snapshot is replaced as a whole on every successful poll; fields are
/// never merged from different responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessStats {
    /// Number of completed sessions
    pub total_sessions: u64,
    /// Consecutive days with a session
    pub current_streak: u64,
    /// When the last session happened, if ever
    #[serde(default, deserialize_with = "deserialize_check_in")]
    pub last_check_in: Option<DateTime<Utc>>,
}

impl WellnessStats {
    /// Whether the user has never completed a session.
    pub fn is_first_visit(&self) -> bool {
        self.total_sessions == 0
    }
}

/// Body of a successful response from the stats endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsEnvelope {
    pub stats: WellnessStats,
}

/// Parse a `lastCheckIn` value.
///
/// RFC 3339 strings keep their offset. Date-times without an offset are read
/// as local time and bare dates as UTC midnight, the way a browser `Date`
/// interprets them. Returns `None` for anything else.
pub fn parse_check_in(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        // Ambiguous local times (DST fall-back) resolve to the earlier instant.
        return Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn deserialize_check_in<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(raw) => parse_check_in(&raw).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid lastCheckIn timestamp: {:?}", raw))
        }),
    }
}
