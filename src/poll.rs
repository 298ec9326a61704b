//! Periodic refresh for live dashboard views
//!
//! Each live view owns one [`ViewPoller`]: a background loop that re-runs
//! the view's fetch every refresh interval and publishes the result into a
//! watch slot. Restarting with new inputs (page, coin id, time window)
//! supersedes the previous loop, and a generation counter guarantees that a
//! slow response initiated before the restart can never overwrite state
//! produced by the newer one.

use crate::constants::REFRESH_INTERVAL_SECS;
use std::future::Future;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

struct PollerShared<T> {
    slot: watch::Sender<Option<T>>,
    /// Generation of the most recent restart; publishes from older
    /// generations are discarded. Guarded by the mutex so a check-and-send
    /// cannot interleave with a restart.
    generation: Mutex<u64>,
}

impl<T> PollerShared<T> {
    fn bump(&self) -> u64 {
        let mut generation = self.generation.lock().unwrap();
        *generation += 1;
        *generation
    }

    /// Publishes `value` unless a newer generation took over while the
    /// fetch was in flight. Returns false when the loop should exit.
    fn publish(&self, my_generation: u64, value: T) -> bool {
        let generation = self.generation.lock().unwrap();
        if *generation != my_generation {
            return false;
        }
        self.slot.send_replace(Some(value));
        true
    }
}

/// Periodic refresh driver for a single live view
///
/// # Example
/// ```no_run
/// use coin_market_sdk::{MarketDashboard, ViewPoller, DEFAULT_PAGE_SIZE};
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let dashboard = Arc::new(MarketDashboard::new()?);
/// let poller = ViewPoller::new();
/// let mut updates = poller.subscribe();
///
/// let page = 1;
/// poller.restart(move || {
///     let dashboard = dashboard.clone();
///     async move { dashboard.coin_list(page, DEFAULT_PAGE_SIZE).await }
/// });
///
/// updates.changed().await?;
/// let count = updates.borrow().as_ref().map_or(0, |coins| coins.len());
/// println!("{count} coins");
/// # Ok(())
/// # }
/// ```
pub struct ViewPoller<T> {
    shared: Arc<PollerShared<T>>,
    interval: Duration,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + Sync + 'static> ViewPoller<T> {
    /// Creates a poller with the standard refresh interval
    pub fn new() -> Self {
        Self::with_interval(Duration::from_secs(REFRESH_INTERVAL_SECS))
    }

    /// Creates a poller with a custom refresh interval
    pub fn with_interval(interval: Duration) -> Self {
        let (slot, _) = watch::channel(None);
        Self {
            shared: Arc::new(PollerShared {
                slot,
                generation: Mutex::new(0),
            }),
            interval,
            task: Mutex::new(None),
        }
    }

    /// Subscribes to the view's state slot
    ///
    /// The slot starts at `None` and holds the most recent published
    /// result afterwards.
    pub fn subscribe(&self) -> watch::Receiver<Option<T>> {
        self.shared.slot.subscribe()
    }

    /// Starts polling with a new fetch, superseding any previous one.
    ///
    /// Call this whenever the view's inputs change. The previous loop is
    /// aborted and its generation invalidated, so even a response it had
    /// already started cannot overwrite the new loop's state. The fetch
    /// runs immediately, then again every interval; each tick is
    /// independent and a tick that resolves to the fetch's failure
    /// sentinel is published like any other.
    pub fn restart<F, Fut>(&self, fetch: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        let my_generation = self.shared.bump();
        let shared = self.shared.clone();
        let interval = self.interval;

        let handle = tokio::spawn(async move {
            loop {
                let value = fetch().await;
                if !shared.publish(my_generation, value) {
                    return;
                }
                sleep(interval).await;
            }
        });

        if let Some(previous) = self.task.lock().unwrap().replace(handle) {
            previous.abort();
        }
    }

    /// Tears the view down: no further fetch is initiated.
    ///
    /// The loop is cancelled at its next await point; a response that
    /// still completes is discarded by the generation guard.
    pub fn stop(&self) {
        self.shared.bump();
        if let Some(task) = self.task.lock().unwrap().take() {
            task.abort();
        }
    }
}

impl<T: Send + Sync + 'static> Default for ViewPoller<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ViewPoller<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.lock().unwrap().take() {
            task.abort();
        }
    }
}
