//! # Coin Market SDK
//!
//! Market data, search and display formatting for client-side
//! cryptocurrency dashboards, sourced from the public CoinGecko API.
//!
//! The SDK covers the data layer of a dashboard: the ranked coin listing,
//! per-coin detail with historical price charts, free-text search over the
//! coin catalog, and the pure formatters the views render numbers with.
//! Rendering itself (tables, cards, charts) is left to the consumer.
//!
//! ## Usage
//!
//! ```no_run
//! use coin_market_sdk::{format_currency, MarketDashboard, TimeWindow, DEFAULT_PAGE_SIZE};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dashboard = MarketDashboard::new()?;
//!
//! // First page of the market, ranked by market cap
//! for coin in dashboard.coin_list(1, DEFAULT_PAGE_SIZE).await {
//!     println!("{}: {}", coin.name, format_currency(coin.current_price));
//! }
//!
//! // Free-text search
//! let hits = dashboard.search("doge").await;
//! println!("{} matches", hits.len());
//!
//! // Detail page data
//! if let Some(detail) = dashboard.coin_detail("bitcoin").await {
//!     println!("{}", detail.name);
//! }
//! if let Some(chart) = dashboard.historical_series("bitcoin", TimeWindow::Week).await {
//!     println!("{} samples", chart.prices.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ViewPoller (refreshes a view every 60s)
//!     ↓
//! MarketDashboard (absorbs failures, emits notices)
//!     ↓
//! MarketDataSource (CoinGecko HTTP client)
//!     ↓
//! Your views (tables, cards, charts)
//! ```
//!
//! ## Error Handling
//!
//! Dashboard operations never return errors. A failed fetch resolves to an
//! empty list or `None`, and exactly one [`Notice`] describing the failed
//! operation is published for the presentation layer's toast equivalent:
//!
//! ```no_run
//! use coin_market_sdk::MarketDashboard;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dashboard = MarketDashboard::new()?;
//! let mut notices = dashboard.notices();
//!
//! tokio::spawn(async move {
//!     while let Ok(notice) = notices.recv().await {
//!         eprintln!("{notice}");
//!     }
//! });
//! # Ok(())
//! # }
//! ```
//!
//! Every entity is a read-only snapshot of one response; nothing is cached
//! across fetches and there is no retry or backoff - a failed poll tick
//! simply waits for the next one.

pub mod constants;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod notify;
pub mod poll;
pub mod sanitize;
mod search;
pub mod source;
pub mod sources;
pub mod types;

// Re-export commonly used types
pub use constants::{DEFAULT_PAGE_SIZE, REFRESH_INTERVAL_SECS, SEARCH_RESULT_LIMIT};
pub use dashboard::MarketDashboard;
pub use error::FetchError;
pub use format::{format_currency, format_number, format_percentage};
pub use notify::{FetchOperation, Notice, Notifier};
pub use poll::ViewPoller;
pub use source::MarketDataSource;
pub use sources::CoinGeckoSource;
pub use types::{
    ChartPoint, CoinDetail, CoinIdentity, CoinSummary, MarketChart, PricePoint, TimeWindow,
};
