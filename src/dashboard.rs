//! Consumer-facing market data facade
//!
//! Every operation resolves to its documented empty/absent sentinel instead
//! of raising, so calling code renders whatever it gets without error
//! branches. Failures are logged and published as user notices on the side.

use crate::{
    error::FetchError,
    notify::{FetchOperation, Notice, Notifier},
    search,
    source::MarketDataSource,
    sources::CoinGeckoSource,
    types::{CoinDetail, CoinSummary, MarketChart, TimeWindow},
};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Market data facade for dashboard views
///
/// Wraps a [`MarketDataSource`] with the absorption policy the presentation
/// layer relies on: no operation ever returns an error, a failed fetch
/// yields an empty or absent result plus exactly one [`Notice`].
///
/// # Example
/// ```no_run
/// use coin_market_sdk::{MarketDashboard, TimeWindow, DEFAULT_PAGE_SIZE};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let dashboard = MarketDashboard::new()?;
///
/// let top = dashboard.coin_list(1, DEFAULT_PAGE_SIZE).await;
/// for coin in &top {
///     println!("{}: {}", coin.name, coin.current_price);
/// }
///
/// if let Some(chart) = dashboard.historical_series("bitcoin", TimeWindow::Week).await {
///     println!("{} samples", chart.prices.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct MarketDashboard {
    source: Arc<dyn MarketDataSource>,
    notifier: Notifier,
}

impl MarketDashboard {
    /// Creates a dashboard backed by the CoinGecko source
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self::with_source(Arc::new(CoinGeckoSource::new()?)))
    }

    /// Creates a dashboard with a custom source
    ///
    /// This is primarily for testing with mock sources.
    pub fn with_source(source: Arc<dyn MarketDataSource>) -> Self {
        Self {
            source,
            notifier: Notifier::new(),
        }
    }

    /// Subscribes to failure notices for this dashboard
    pub fn notices(&self) -> broadcast::Receiver<Notice> {
        self.notifier.subscribe()
    }

    /// Returns the name of the backing source
    pub fn source_name(&self) -> &'static str {
        self.source.source_name()
    }

    /// Fetches one page of the market listing, ranked by market cap.
    ///
    /// # Returns
    /// The page's coins, or an empty list if the fetch failed.
    pub async fn coin_list(&self, page: u32, per_page: usize) -> Vec<CoinSummary> {
        match self.source.coin_list(page, per_page).await {
            Ok(coins) => {
                tracing::debug!(count = coins.len(), page, "fetched coin list");
                coins
            }
            Err(e) => {
                self.report(
                    FetchOperation::CoinList,
                    "Failed to fetch cryptocurrency data. Please try again later.",
                    &e,
                );
                Vec::new()
            }
        }
    }

    /// Fetches full detail for a single coin.
    ///
    /// # Returns
    /// The detail, or `None` if the fetch failed.
    pub async fn coin_detail(&self, id: &str) -> Option<CoinDetail> {
        match self.source.coin_detail(id).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                self.report(
                    FetchOperation::CoinDetail,
                    format!("Failed to fetch details for {id}. Please try again later."),
                    &e,
                );
                None
            }
        }
    }

    /// Fetches the historical price series for a coin over a time window.
    ///
    /// # Returns
    /// The series, or `None` if the fetch failed.
    pub async fn historical_series(&self, id: &str, window: TimeWindow) -> Option<MarketChart> {
        match self.source.market_chart(id, window.days()).await {
            Ok(chart) => {
                tracing::debug!(
                    samples = chart.prices.len(),
                    id,
                    window = window.label(),
                    "fetched historical series"
                );
                Some(chart)
            }
            Err(e) => {
                self.report(
                    FetchOperation::HistoricalSeries,
                    format!("Failed to fetch chart data for {id}. Please try again later."),
                    &e,
                );
                None
            }
        }
    }

    /// Resolves a free-text query to a bounded set of market rows.
    ///
    /// An empty query, a query with no catalog matches, or a failed fetch
    /// all yield an empty list; only the failure publishes a notice.
    pub async fn search(&self, query: &str) -> Vec<CoinSummary> {
        match search::search_coins(self.source.as_ref(), query).await {
            Ok(coins) => coins,
            Err(e) => {
                self.report(
                    FetchOperation::Search,
                    "Failed to search cryptocurrencies. Please try again later.",
                    &e,
                );
                Vec::new()
            }
        }
    }

    fn report(&self, operation: FetchOperation, message: impl Into<String>, error: &FetchError) {
        tracing::warn!(?operation, error = %error, "market data fetch failed");
        self.notifier.notify(Notice::fetch_failed(operation, message));
    }
}
