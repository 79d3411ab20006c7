//! What the welcome screen says about a user's history.

use serde::Serialize;

use crate::format::format_last_check_in;
use crate::models::WellnessStats;
use crate::traits::Clock;

/// Greeting shown before any session has been completed.
pub const FIRST_CHECK_IN_GREETING: &str =
    "Welcome! Your supportive companion is here for your first check-in.";

/// Welcome screen content derived from one stats snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WelcomeSummary {
    /// No sessions yet.
    FirstCheckIn {
        last_check_in: Option<String>,
    },
    /// At least one session completed.
    Returning {
        total_sessions: u64,
        /// Present only for streaks longer than one day
        streak_days: Option<u64>,
        last_check_in: Option<String>,
    },
}

impl WelcomeSummary {
    /// Summarize `stats` as seen at `clock`'s current time.
    pub fn from_stats<C: Clock>(stats: &WellnessStats, clock: &C) -> Self {
        let last_check_in = format_last_check_in(stats.last_check_in, &clock.now());

        if stats.is_first_visit() {
            return WelcomeSummary::FirstCheckIn { last_check_in };
        }

        WelcomeSummary::Returning {
            total_sessions: stats.total_sessions,
            streak_days: (stats.current_streak > 1).then_some(stats.current_streak),
            last_check_in,
        }
    }

    pub fn headline(&self) -> String {
        match self {
            WelcomeSummary::FirstCheckIn { .. } => FIRST_CHECK_IN_GREETING.to_string(),
            WelcomeSummary::Returning { total_sessions, .. } => format!(
                "Welcome back! You've completed {} session{}.",
                total_sessions,
                if *total_sessions == 1 { "" } else { "s" }
            ),
        }
    }

    /// e.g. `5-day streak`
    pub fn streak_badge(&self) -> Option<String> {
        match self {
            WelcomeSummary::Returning {
                streak_days: Some(days),
                ..
            } => Some(format!("{}-day streak", days)),
            _ => None,
        }
    }

    /// e.g. `Last check-in: yesterday`
    pub fn last_check_in_line(&self) -> Option<String> {
        let label = match self {
            WelcomeSummary::FirstCheckIn { last_check_in }
            | WelcomeSummary::Returning { last_check_in, .. } => last_check_in.as_deref()?,
        };
        Some(format!("Last check-in: {}", label))
    }

    /// All lines in display order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.headline()];
        lines.extend(self.streak_badge());
        lines.extend(self.last_check_in_line());
        lines
    }
}
