//! User-visible failure notices
//!
//! Fetch failures never surface as errors to callers; instead each one is
//! published on a broadcast channel so the presentation layer can show a
//! transient notification while rendering the empty/absent result.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Capacity of the notice broadcast channel; slow subscribers lag rather
/// than block publishers.
const NOTICE_CHANNEL_CAPACITY: usize = 64;

/// The logical operation a notice refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchOperation {
    /// Ranked market listing page
    CoinList,
    /// Single coin detail
    CoinDetail,
    /// Historical price series
    HistoricalSeries,
    /// Catalog search plus hydration
    Search,
}

/// A transient user-visible notification about a failed fetch
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub id: Uuid,
    pub operation: FetchOperation,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Notice {
    /// Creates a notice for a failed operation
    pub fn fetch_failed(operation: FetchOperation, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            operation,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Broadcast sender for [`Notice`] values
///
/// Publishing with no live subscribers is fine; the notice is simply
/// dropped, matching a toast nobody is around to see.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notice>,
}

impl Notifier {
    /// Creates a notifier with the default channel capacity
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(NOTICE_CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Subscribes to subsequent notices
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.tx.subscribe()
    }

    /// Publishes a notice to all current subscribers
    pub fn notify(&self, notice: Notice) {
        // A send error only means there are no subscribers right now
        let _ = self.tx.send(notice);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
