//! Mock implementations for test fixtures.
//!
//! Re-exports the library's mocks and adds a scripted stats provider whose
//! every call can be given its own latency and outcome.

#![allow(dead_code, unused_imports)]

pub use mindful::adapters::mock::{FixedClock, MockHttpClient, MockResponse};
pub use mindful::traits::{Headers, HttpClient, HttpError, Response};

use async_trait::async_trait;
use mindful::error::FetchError;
use mindful::models::WellnessStats;
use mindful::stats::StatsProvider;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One scripted answer.
#[derive(Debug, Clone)]
pub struct Step {
    pub delay: Duration,
    pub outcome: Result<WellnessStats, FetchError>,
}

impl Step {
    pub fn ok(stats: WellnessStats) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Ok(stats),
        }
    }

    pub fn fail(err: FetchError) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Err(err),
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Stats provider answering from a script, then repeating a fallback.
#[derive(Debug, Clone)]
pub struct ScriptedProvider {
    steps: Arc<Mutex<VecDeque<Step>>>,
    fallback: Arc<Mutex<Step>>,
    calls: Arc<Mutex<usize>>,
}

impl ScriptedProvider {
    pub fn new(fallback: Step) -> Self {
        Self {
            steps: Arc::new(Mutex::new(VecDeque::new())),
            fallback: Arc::new(Mutex::new(fallback)),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn then(self, step: Step) -> Self {
        self.steps.lock().unwrap().push_back(step);
        self
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl StatsProvider for ScriptedProvider {
    async fn fetch(&self) -> Result<WellnessStats, FetchError> {
        *self.calls.lock().unwrap() += 1;
        let step = self
            .steps
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.lock().unwrap().clone());

        if !step.delay.is_zero() {
            tokio::time::sleep(step.delay).await;
        }
        step.outcome
    }
}

/// Stats fixture.
pub fn stats(total_sessions: u64, current_streak: u64) -> WellnessStats {
    WellnessStats {
        total_sessions,
        current_streak,
        last_check_in: None,
    }
}

/// A transport failure fixture.
pub fn connection_refused() -> FetchError {
    FetchError::Transport(HttpError::ConnectionFailed("connection refused".to_string()))
}
