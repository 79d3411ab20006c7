//! Periodic refresh of the wellness stats snapshot.
//!
//! [`StatsPoller`] fetches immediately on [`start`](StatsPoller::start) and
//! then once per interval, without waiting for earlier fetches to finish.
//! Successful responses replace the snapshot in completion order. Failures
//! are logged and counted; the previous snapshot stays and the schedule is
//! unaffected.
//!
//! Each start opens a new run. [`stop`](StatsPoller::stop) closes it: the
//! ticker is aborted, fetches that have not reached the provider yet are
//! skipped, and responses still in flight are dropped when they land.
//!
//! The poller requires a current-thread runtime, the way a UI thread drives
//! it: only there is "no fetch after `stop` returns" exact. Tests run it
//! under Tokio's paused clock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::provider::StatsProvider;
use crate::config::PollerConfig;
use crate::error::FetchError;
use crate::models::WellnessStats;
use crate::traits::HttpError;

/// Shortest accepted interval; `tokio::time::interval` panics on zero.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Fetch outcome counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollHealth {
    /// Snapshots applied
    pub successes: u64,
    /// Fetches that failed while the poller was running
    pub failures: u64,
    /// Most recent failure, cleared by the next success
    pub last_error: Option<FetchError>,
}

/// State shared between the poller and its tasks.
struct Shared {
    provider: Arc<dyn StatsProvider>,
    fetch_timeout: Duration,
    snapshot: watch::Sender<WellnessStats>,
    health: Mutex<PollHealth>,
}

impl Shared {
    fn health(&self) -> MutexGuard<'_, PollHealth> {
        self.health.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, result: Result<WellnessStats, FetchError>) {
        match result {
            Ok(stats) => {
                tracing::debug!(
                    total_sessions = stats.total_sessions,
                    current_streak = stats.current_streak,
                    "Applying stats snapshot"
                );
                self.snapshot.send_replace(stats);
                let mut health = self.health();
                health.successes += 1;
                health.last_error = None;
            }
            Err(err) => {
                tracing::warn!(code = err.error_code(), "Failed to fetch stats: {}", err);
                let mut health = self.health();
                health.failures += 1;
                health.last_error = Some(err);
            }
        }
    }
}

/// Liveness flag for one start..stop run.
///
/// Results are applied while holding the lock, so a result can never land
/// after `retire` has returned.
struct RunGuard {
    live: Mutex<bool>,
}

impl RunGuard {
    fn new() -> Self {
        Self {
            live: Mutex::new(true),
        }
    }

    fn lock(&self) -> MutexGuard<'_, bool> {
        self.live.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_live(&self) -> bool {
        *self.lock()
    }

    fn retire(&self) {
        *self.lock() = false;
    }

    /// Run `apply` only if the run is still live. Returns whether it ran.
    fn apply_if_live(&self, apply: impl FnOnce()) -> bool {
        let live = self.lock();
        if *live {
            apply();
        }
        *live
    }
}

struct ActiveRun {
    guard: Arc<RunGuard>,
    ticker: JoinHandle<()>,
}

/// Owns the stats snapshot and the timer that refreshes it.
///
/// # Example
///
/// ```ignore
/// use mindful::stats::{HttpStatsProvider, StatsPoller};
///
/// let provider = HttpStatsProvider::new(Arc::new(ReqwestHttpClient::new()), url);
/// let mut poller = StatsPoller::new(Arc::new(provider), &PollerConfig::default());
/// poller.start();
/// let mut updates = poller.subscribe();
/// while updates.changed().await.is_ok() {
///     render(&updates.borrow());
/// }
/// ```
pub struct StatsPoller {
    shared: Arc<Shared>,
    interval: Duration,
    run: Option<ActiveRun>,
}

impl StatsPoller {
    /// Create a stopped poller holding the zero snapshot.
    pub fn new(provider: Arc<dyn StatsProvider>, config: &PollerConfig) -> Self {
        let (snapshot, _) = watch::channel(WellnessStats::default());
        Self {
            shared: Arc::new(Shared {
                provider,
                fetch_timeout: config.fetch_timeout,
                snapshot,
                health: Mutex::new(PollHealth::default()),
            }),
            interval: config.interval.max(MIN_INTERVAL),
            run: None,
        }
    }

    /// Fetch now and then every interval. No-op if already running.
    ///
    /// Must be called from within a current-thread Tokio runtime. On a
    /// multi-threaded runtime a fetch that passed its liveness check may
    /// still reach the provider after [`stop`](Self::stop) returns; its
    /// result is discarded either way.
    pub fn start(&mut self) {
        if self.is_running() {
            tracing::trace!("Stats poller already running");
            return;
        }

        if Handle::current().runtime_flavor() != RuntimeFlavor::CurrentThread {
            tracing::warn!(
                "Stats poller started on a multi-threaded runtime; a fetch may be issued while stopping"
            );
        }

        let guard = Arc::new(RunGuard::new());
        let ticker = tokio::spawn(run_ticker(
            Arc::clone(&self.shared),
            Arc::clone(&guard),
            self.interval,
        ));
        self.run = Some(ActiveRun { guard, ticker });

        tracing::info!(
            "Stats poller started (interval: {}ms)",
            self.interval.as_millis()
        );
    }

    /// Cancel the timer. No fetch is issued after this returns, and results
    /// of fetches still in flight are discarded. No-op if not running.
    pub fn stop(&mut self) {
        if let Some(run) = self.run.take() {
            run.guard.retire();
            run.ticker.abort();
            tracing::info!("Stats poller stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.run
            .as_ref()
            .map(|run| !run.ticker.is_finished())
            .unwrap_or(false)
    }

    /// Replace the held snapshot.
    pub fn on_snapshot(&self, stats: WellnessStats) {
        self.shared.snapshot.send_replace(stats);
    }

    /// Copy of the latest snapshot.
    pub fn current_snapshot(&self) -> WellnessStats {
        self.shared.snapshot.borrow().clone()
    }

    /// Receiver notified on every snapshot replacement.
    pub fn subscribe(&self) -> watch::Receiver<WellnessStats> {
        self.shared.snapshot.subscribe()
    }

    /// Fetch outcome counters so far.
    pub fn health(&self) -> PollHealth {
        self.shared.health().clone()
    }
}

impl Drop for StatsPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_ticker(shared: Arc<Shared>, guard: Arc<RunGuard>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        if !guard.is_live() {
            break;
        }
        // Fetches run detached so a slow response never delays the schedule.
        tokio::spawn(fetch_once(Arc::clone(&shared), Arc::clone(&guard)));
    }
}

async fn fetch_once(shared: Arc<Shared>, guard: Arc<RunGuard>) {
    if !guard.is_live() {
        return;
    }

    let result = match tokio::time::timeout(shared.fetch_timeout, shared.provider.fetch()).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Transport(HttpError::Timeout(format!(
            "no stats response after {}ms",
            shared.fetch_timeout.as_millis()
        )))),
    };

    let applied = guard.apply_if_live(|| shared.record(result));
    if !applied {
        tracing::trace!("Discarding stats fetch result from a stopped run");
    }
}
