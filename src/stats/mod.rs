//! Wellness stats: where snapshots come from and how they are kept fresh.

pub mod poller;
pub mod provider;

pub use poller::{PollHealth, StatsPoller};
pub use provider::{HttpStatsProvider, StatsProvider};
