//! Sensor adapters: position sources and cancellable watch tasks
//!
//! The proximity strategy consumes positions through the `PositionSource`
//! trait; the mock source satisfies the identical contract with a fixed
//! position, which is what allows end-to-end testing without a real sensor.
//!
//! Continuous tracking and the countdown tick are cancellable repeating
//! tasks with explicit handles; teardown on every exit path is the caller's
//! job, so no orphaned callback outlives its view.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::types::{GpsError, GpsErrorKind, GpsPosition};
use crate::{FIX_TIMEOUT_MS, MIN_ACCURACY_M, MOCK_ACCURACY_M, WATCH_INTERVAL_MS};

/// Options for one acquisition attempt
#[derive(Debug, Clone, Copy)]
pub struct FixOptions {
    pub high_accuracy: bool,
    pub timeout_ms: u64,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: FIX_TIMEOUT_MS,
        }
    }
}

/// A source of position fixes: the platform sensor or a test stand-in
pub trait PositionSource: Send + Sync {
    /// One-shot acquisition attempt
    fn acquire(&self, options: &FixOptions) -> Result<GpsPosition, GpsError>;
}

/// Acquire with the timeout fallback: a timed-out high-accuracy attempt is
/// retried once at reduced accuracy before the error surfaces.
pub fn acquire_with_retry(
    source: &dyn PositionSource,
    options: &FixOptions,
) -> Result<GpsPosition, GpsError> {
    match source.acquire(options) {
        Err(e) if e.kind == GpsErrorKind::Timeout && options.high_accuracy => {
            let fallback = FixOptions {
                high_accuracy: false,
                ..*options
            };
            source.acquire(&fallback)
        }
        other => other,
    }
}

/// Is this fix worse than the acceptance threshold? Surfaced for display,
/// never treated as fatal.
pub fn is_low_accuracy(position: &GpsPosition) -> bool {
    position.accuracy_m > MIN_ACCURACY_M
}

/// Test/mock source: a fixed position, excellent accuracy
///
/// Seeded with the active stage's target so every proximity check passes.
#[derive(Debug)]
pub struct MockPositionSource {
    position: Mutex<GpsPosition>,
}

impl MockPositionSource {
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            position: Mutex::new(GpsPosition {
                latitude,
                longitude,
                accuracy_m: MOCK_ACCURACY_M,
                timestamp_ms: chrono::Utc::now().timestamp_millis(),
            }),
        }
    }

    /// Move the simulated position
    pub fn relocate(&self, latitude: f64, longitude: f64) {
        if let Ok(mut guard) = self.position.lock() {
            guard.latitude = latitude;
            guard.longitude = longitude;
            guard.timestamp_ms = chrono::Utc::now().timestamp_millis();
        }
    }
}

impl PositionSource for MockPositionSource {
    fn acquire(&self, _options: &FixOptions) -> Result<GpsPosition, GpsError> {
        self.position
            .lock()
            .map(|guard| *guard)
            .map_err(|_| GpsError::new(GpsErrorKind::PositionUnavailable))
    }
}

/// A source that always fails, for exercising error paths
#[derive(Debug)]
pub struct FailingPositionSource {
    pub kind: GpsErrorKind,
}

impl PositionSource for FailingPositionSource {
    fn acquire(&self, _options: &FixOptions) -> Result<GpsPosition, GpsError> {
        Err(GpsError::new(self.kind))
    }
}

/// Latest reading published by a watch
pub type Reading = Option<Result<GpsPosition, GpsError>>;

/// Continuous position subscription with an explicit cancellation handle
///
/// Polls the source at a fixed interval on a tokio task and publishes each
/// reading over a watch channel. Dropping the handle does not stop the
/// task; `cancel()` must run on every exit path.
pub struct GpsWatch {
    receiver: watch::Receiver<Reading>,
    task: JoinHandle<()>,
}

impl GpsWatch {
    /// Spawn the polling task
    pub fn spawn(source: Arc<dyn PositionSource>, options: FixOptions) -> Self {
        Self::spawn_with_interval(source, options, Duration::from_millis(WATCH_INTERVAL_MS))
    }

    pub fn spawn_with_interval(
        source: Arc<dyn PositionSource>,
        options: FixOptions,
        interval: Duration,
    ) -> Self {
        let (sender, receiver) = watch::channel(None);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let reading = acquire_with_retry(source.as_ref(), &options);
                if sender.send(Some(reading)).is_err() {
                    break;
                }
            }
        });

        Self { receiver, task }
    }

    /// Subscribe to readings
    pub fn subscribe(&self) -> watch::Receiver<Reading> {
        self.receiver.clone()
    }

    /// Latest reading, if any has been published
    pub fn latest(&self) -> Reading {
        self.receiver.borrow().clone()
    }

    /// Tear the subscription down; the task stops immediately
    pub fn cancel(self) {
        self.task.abort();
    }
}

/// Cancellable 1-second-class repeating tick, for countdown re-evaluation
pub struct Ticker {
    task: JoinHandle<()>,
}

impl Ticker {
    /// Run `on_tick` at the given interval until `cancel()`; the callback
    /// returns `false` to stop the ticker itself.
    pub fn spawn<F>(interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                if !on_tick() {
                    break;
                }
            }
        });
        Self { task }
    }

    pub fn cancel(self) {
        self.task.abort();
    }
}

// =============================================================================
// TESTS
// =============================================================================
