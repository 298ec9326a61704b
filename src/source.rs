//! Source abstraction for the remote market data API
//!
//! The dashboard facade and search algorithm talk to this trait instead of
//! a concrete HTTP client, so tests can script responses and count calls.

use crate::{
    error::FetchError,
    types::{CoinDetail, CoinIdentity, CoinSummary, MarketChart},
};
use async_trait::async_trait;

/// Trait for market data sources
///
/// Each operation performs exactly one outbound request, never retries and
/// never caches across calls.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetches one page of the market listing, ordered by descending
    /// market cap, with 24h percentage change included
    async fn coin_list(&self, page: u32, per_page: usize) -> Result<Vec<CoinSummary>, FetchError>;

    /// Fetches market rows for exactly the given coin ids, ordered by
    /// descending market cap (the search hydration request)
    async fn coins_by_ids(&self, ids: &[String]) -> Result<Vec<CoinSummary>, FetchError>;

    /// Fetches full detail for a single coin id
    async fn coin_detail(&self, id: &str) -> Result<CoinDetail, FetchError>;

    /// Fetches the price series for a coin over the trailing `days` days
    async fn market_chart(&self, id: &str, days: u32) -> Result<MarketChart, FetchError>;

    /// Fetches the full coin identity catalog (the search corpus)
    async fn coin_catalog(&self) -> Result<Vec<CoinIdentity>, FetchError>;

    /// Returns the name of this source
    fn source_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::types::{CurrencyQuote, ImageSet, LocalizedText, MarketData};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Scripted response slot; errors are kept as strings and
    /// re-materialized per call since FetchError is not Clone.
    type Scripted<T> = Mutex<Result<T, String>>;

    fn take<T: Clone>(slot: &Scripted<T>) -> Result<T, FetchError> {
        match &*slot.lock().unwrap() {
            Ok(value) => Ok(value.clone()),
            Err(msg) => Err(FetchError::invalid_response(msg.clone())),
        }
    }

    /// Mock source for testing
    pub struct MockSource {
        list: Scripted<Vec<CoinSummary>>,
        by_ids: Scripted<Vec<CoinSummary>>,
        detail: Scripted<CoinDetail>,
        chart: Scripted<MarketChart>,
        catalog: Scripted<Vec<CoinIdentity>>,
        list_calls: AtomicUsize,
        by_ids_calls: AtomicUsize,
        detail_calls: AtomicUsize,
        chart_calls: AtomicUsize,
        catalog_calls: AtomicUsize,
        hydrated_ids: Mutex<Option<Vec<String>>>,
    }

    impl Default for MockSource {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockSource {
        pub fn new() -> Self {
            Self {
                list: Mutex::new(Ok(Vec::new())),
                by_ids: Mutex::new(Ok(Vec::new())),
                detail: Mutex::new(Err("no detail scripted".to_string())),
                chart: Mutex::new(Ok(MarketChart::default())),
                catalog: Mutex::new(Ok(Vec::new())),
                list_calls: AtomicUsize::new(0),
                by_ids_calls: AtomicUsize::new(0),
                detail_calls: AtomicUsize::new(0),
                chart_calls: AtomicUsize::new(0),
                catalog_calls: AtomicUsize::new(0),
                hydrated_ids: Mutex::new(None),
            }
        }

        pub fn set_list(&self, coins: Vec<CoinSummary>) {
            *self.list.lock().unwrap() = Ok(coins);
        }

        pub fn fail_list(&self, msg: &str) {
            *self.list.lock().unwrap() = Err(msg.to_string());
        }

        pub fn set_by_ids(&self, coins: Vec<CoinSummary>) {
            *self.by_ids.lock().unwrap() = Ok(coins);
        }

        pub fn fail_by_ids(&self, msg: &str) {
            *self.by_ids.lock().unwrap() = Err(msg.to_string());
        }

        pub fn set_detail(&self, detail: CoinDetail) {
            *self.detail.lock().unwrap() = Ok(detail);
        }

        pub fn fail_detail(&self, msg: &str) {
            *self.detail.lock().unwrap() = Err(msg.to_string());
        }

        pub fn set_chart(&self, chart: MarketChart) {
            *self.chart.lock().unwrap() = Ok(chart);
        }

        pub fn fail_chart(&self, msg: &str) {
            *self.chart.lock().unwrap() = Err(msg.to_string());
        }

        pub fn set_catalog(&self, catalog: Vec<CoinIdentity>) {
            *self.catalog.lock().unwrap() = Ok(catalog);
        }

        pub fn fail_catalog(&self, msg: &str) {
            *self.catalog.lock().unwrap() = Err(msg.to_string());
        }

        pub fn list_calls(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }

        pub fn by_ids_calls(&self) -> usize {
            self.by_ids_calls.load(Ordering::SeqCst)
        }

        pub fn detail_calls(&self) -> usize {
            self.detail_calls.load(Ordering::SeqCst)
        }

        pub fn chart_calls(&self) -> usize {
            self.chart_calls.load(Ordering::SeqCst)
        }

        pub fn catalog_calls(&self) -> usize {
            self.catalog_calls.load(Ordering::SeqCst)
        }

        /// Ids passed to the most recent hydration call, if any
        pub fn hydrated_ids(&self) -> Option<Vec<String>> {
            self.hydrated_ids.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MarketDataSource for MockSource {
        async fn coin_list(
            &self,
            _page: u32,
            _per_page: usize,
        ) -> Result<Vec<CoinSummary>, FetchError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            take(&self.list)
        }

        async fn coins_by_ids(&self, ids: &[String]) -> Result<Vec<CoinSummary>, FetchError> {
            self.by_ids_calls.fetch_add(1, Ordering::SeqCst);
            *self.hydrated_ids.lock().unwrap() = Some(ids.to_vec());
            take(&self.by_ids)
        }

        async fn coin_detail(&self, _id: &str) -> Result<CoinDetail, FetchError> {
            self.detail_calls.fetch_add(1, Ordering::SeqCst);
            take(&self.detail)
        }

        async fn market_chart(&self, _id: &str, _days: u32) -> Result<MarketChart, FetchError> {
            self.chart_calls.fetch_add(1, Ordering::SeqCst);
            take(&self.chart)
        }

        async fn coin_catalog(&self) -> Result<Vec<CoinIdentity>, FetchError> {
            self.catalog_calls.fetch_add(1, Ordering::SeqCst);
            take(&self.catalog)
        }

        fn source_name(&self) -> &'static str {
            "mock"
        }
    }

    /// Builds a minimal catalog row
    pub fn identity(id: &str, symbol: &str, name: &str) -> CoinIdentity {
        CoinIdentity {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
        }
    }

    /// Builds a minimal market row with the given id
    pub fn summary(id: &str) -> CoinSummary {
        CoinSummary {
            id: id.to_string(),
            symbol: id.to_string(),
            name: id.to_string(),
            image: String::new(),
            current_price: 1.0,
            market_cap: 0.0,
            market_cap_rank: None,
            fully_diluted_valuation: None,
            total_volume: 0.0,
            high_24h: None,
            low_24h: None,
            price_change_24h: 0.0,
            price_change_percentage_24h: 0.0,
            market_cap_change_24h: None,
            market_cap_change_percentage_24h: None,
            circulating_supply: None,
            total_supply: None,
            max_supply: None,
            ath: None,
            ath_change_percentage: None,
            ath_date: None,
            atl: None,
            atl_change_percentage: None,
            atl_date: None,
            roi: None,
            last_updated: None,
        }
    }

    /// Builds a minimal coin detail with the given id and description
    pub fn detail(id: &str, description: &str) -> CoinDetail {
        CoinDetail {
            id: id.to_string(),
            symbol: id.to_string(),
            name: id.to_string(),
            description: LocalizedText {
                en: description.to_string(),
            },
            image: ImageSet {
                thumb: String::new(),
                small: String::new(),
                large: String::new(),
            },
            market_data: MarketData {
                current_price: CurrencyQuote { usd: 1.0 },
                market_cap: CurrencyQuote { usd: 0.0 },
                price_change_percentage_24h: 0.0,
                price_change_percentage_7d: 0.0,
                price_change_percentage_30d: 0.0,
                price_change_percentage_1y: 0.0,
            },
        }
    }
}
