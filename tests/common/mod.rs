//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use mindful::config::PollerConfig;
use mindful::stats::StatsPoller;
use std::sync::Arc;
use std::time::Duration;

/// Interval the polling tests assume.
pub const INTERVAL: Duration = Duration::from_millis(3000);

/// A stopped poller over `provider` with default settings.
pub fn poller_for(provider: &ScriptedProvider) -> StatsPoller {
    StatsPoller::new(Arc::new(provider.clone()), &PollerConfig::default())
}

/// Let every task that is ready at the current instant run.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}
