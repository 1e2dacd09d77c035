//! Periodic autosave
//!
//! A single background task wakes on a fixed tick and records a version
//! snapshot when autosave is enabled and at least one full interval has
//! passed since the last snapshot. The task runs until its cancellation
//! token fires.

use crate::versions::{Version, VersionStore};
use bmcanvas_core::{CanvasRecord, ThreadSafe, ThreadSafeOption, ThreadSafeRw};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Default autosave interval
pub const DEFAULT_AUTOSAVE_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Timing of the autosave task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutosaveConfig {
    /// Minimum time between automatic snapshots
    pub interval: Duration,
    /// How often the task wakes up to check
    pub tick: Duration,
}

impl AutosaveConfig {
    /// Tick at the same rate as the interval
    pub fn every(interval: Duration) -> Self {
        Self {
            interval,
            tick: interval,
        }
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self::every(DEFAULT_AUTOSAVE_INTERVAL)
    }
}

/// Decides whether a tick should produce a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutosaveGuard {
    interval: Duration,
}

impl AutosaveGuard {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Fire when enabled and nothing was saved within the last interval
    pub fn should_fire(&self, enabled: bool, last_saved: Option<Instant>, now: Instant) -> bool {
        enabled
            && last_saved.is_none_or(|saved| now.saturating_duration_since(saved) >= self.interval)
    }
}

/// State shared between the editing session and the autosave task
#[derive(Debug, Clone)]
pub struct AutosaveShared {
    pub live: ThreadSafeRw<CanvasRecord>,
    pub versions: ThreadSafe<VersionStore>,
    pub last_saved: ThreadSafeOption<Instant>,
    pub enabled: Arc<AtomicBool>,
}

/// Run one autosave check at `now`, returning the snapshot if one was taken
pub fn autosave_tick(
    shared: &AutosaveShared,
    guard: &AutosaveGuard,
    now: Instant,
) -> Option<Version> {
    let enabled = shared.enabled.load(Ordering::Acquire);
    // held until the new timestamp is written; lock order is last_saved, live, versions
    let mut last_saved = shared.last_saved.lock();
    if !guard.should_fire(enabled, *last_saved, now) {
        return None;
    }

    // read lock yields a consistent copy of all nine fields
    let record = shared.live.read().clone();
    let version = shared.versions.lock().snapshot(record);
    *last_saved = Some(now);
    drop(last_saved);

    tracing::info!(id = %version.id, "Autosaved canvas version");
    Some(version)
}

/// Handle to a running autosave task
#[derive(Debug)]
pub struct AutosaveHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl AutosaveHandle {
    /// Whether the task is still running
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Token that stops the task when cancelled
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Cancel the task and wait for it to exit
    pub async fn stop(self) {
        self.token.cancel();
        if let Err(e) = self.task.await {
            tracing::warn!(error = %e, "Autosave task ended abnormally");
        }
    }
}

/// Spawn the autosave task on the current tokio runtime
pub fn spawn_autosave(shared: AutosaveShared, config: AutosaveConfig) -> AutosaveHandle {
    let token = CancellationToken::new();
    let task_token = token.clone();
    let guard = AutosaveGuard::new(config.interval);

    let task = tokio::spawn(async move {
        let start = tokio::time::Instant::now() + config.tick;
        let mut ticker = tokio::time::interval_at(start, config.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(
            interval_secs = config.interval.as_secs(),
            tick_secs = config.tick.as_secs(),
            "Autosave started"
        );

        loop {
            tokio::select! {
                biased;
                _ = task_token.cancelled() => {
                    tracing::info!("Autosave stopped");
                    break;
                }
                scheduled = ticker.tick() => {
                    // guard on the deadline, not the wake-up time
                    autosave_tick(&shared, &guard, scheduled.into_std());
                }
            }
        }
    });

    AutosaveHandle { token, task }
}
