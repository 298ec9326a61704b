//! CoinGecko market data source implementation

use crate::{
    constants::{COINGECKO_API_URL, REQUEST_TIMEOUT_SECS, USER_AGENT, VS_CURRENCY},
    error::FetchError,
    source::MarketDataSource,
    types::{CoinDetail, CoinIdentity, CoinSummary, MarketChart},
};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// CoinGecko market data source
pub struct CoinGeckoSource {
    client: Client,
    base_url: String,
}

impl CoinGeckoSource {
    /// Creates a new CoinGecko source
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Network)?;

        Ok(Self {
            client,
            base_url: COINGECKO_API_URL.to_string(),
        })
    }

    fn list_url(&self, page: u32, per_page: usize) -> String {
        format!(
            "{}/coins/markets?vs_currency={VS_CURRENCY}&order=market_cap_desc&per_page={per_page}&page={page}&sparkline=false&price_change_percentage=24h",
            self.base_url
        )
    }

    fn by_ids_url(&self, ids: &[String]) -> String {
        format!(
            "{}/coins/markets?vs_currency={VS_CURRENCY}&ids={}&order=market_cap_desc&sparkline=false",
            self.base_url,
            ids.join(",")
        )
    }

    fn detail_url(&self, id: &str) -> String {
        format!(
            "{}/coins/{id}?localization=false&tickers=false&market_data=true&community_data=false&developer_data=false",
            self.base_url
        )
    }

    fn chart_url(&self, id: &str, days: u32) -> String {
        format!(
            "{}/coins/{id}/market_chart?vs_currency={VS_CURRENCY}&days={days}",
            self.base_url
        )
    }

    fn catalog_url(&self) -> String {
        format!("{}/coins/list", self.base_url)
    }

    /// Issues one GET and decodes the JSON body into the expected shape
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::debug!(url, "fetching from CoinGecko");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| FetchError::invalid_response(format!("failed to parse {url}: {e}")))
    }
}

impl Default for CoinGeckoSource {
    fn default() -> Self {
        Self::new().expect("Failed to create CoinGecko source")
    }
}

#[async_trait]
impl MarketDataSource for CoinGeckoSource {
    async fn coin_list(&self, page: u32, per_page: usize) -> Result<Vec<CoinSummary>, FetchError> {
        self.get_json(&self.list_url(page, per_page)).await
    }

    async fn coins_by_ids(&self, ids: &[String]) -> Result<Vec<CoinSummary>, FetchError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.get_json(&self.by_ids_url(ids)).await
    }

    async fn coin_detail(&self, id: &str) -> Result<CoinDetail, FetchError> {
        self.get_json(&self.detail_url(id)).await
    }

    async fn market_chart(&self, id: &str, days: u32) -> Result<MarketChart, FetchError> {
        self.get_json(&self.chart_url(id, days)).await
    }

    async fn coin_catalog(&self) -> Result<Vec<CoinIdentity>, FetchError> {
        self.get_json(&self.catalog_url()).await
    }

    fn source_name(&self) -> &'static str {
        "coingecko"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_url_carries_market_listing_parameters() {
        let source = CoinGeckoSource::new().unwrap();
        assert_eq!(
            source.list_url(2, 25),
            "https://api.coingecko.com/api/v3/coins/markets?vs_currency=usd&order=market_cap_desc&per_page=25&page=2&sparkline=false&price_change_percentage=24h"
        );
    }

    #[test]
    fn by_ids_url_joins_ids_with_commas() {
        let source = CoinGeckoSource::new().unwrap();
        let ids = vec!["bitcoin".to_string(), "ethereum".to_string()];
        assert_eq!(
            source.by_ids_url(&ids),
            "https://api.coingecko.com/api/v3/coins/markets?vs_currency=usd&ids=bitcoin,ethereum&order=market_cap_desc&sparkline=false"
        );
    }

    #[test]
    fn detail_url_disables_all_sub_blocks_except_market_data() {
        let source = CoinGeckoSource::new().unwrap();
        assert_eq!(
            source.detail_url("bitcoin"),
            "https://api.coingecko.com/api/v3/coins/bitcoin?localization=false&tickers=false&market_data=true&community_data=false&developer_data=false"
        );
    }

    #[test]
    fn chart_url_scopes_currency_and_days() {
        let source = CoinGeckoSource::new().unwrap();
        assert_eq!(
            source.chart_url("ethereum", 90),
            "https://api.coingecko.com/api/v3/coins/ethereum/market_chart?vs_currency=usd&days=90"
        );
    }

    #[test]
    fn catalog_url_takes_no_parameters() {
        let source = CoinGeckoSource::new().unwrap();
        assert_eq!(
            source.catalog_url(),
            "https://api.coingecko.com/api/v3/coins/list"
        );
    }
}
