//! Free-text coin search over the identity catalog
//!
//! Resolution happens in two steps: filter the full catalog locally, then
//! hydrate the surviving ids with one market data request. There is no
//! relevance ranking; matches keep their catalog order.

use crate::{
    constants::SEARCH_RESULT_LIMIT,
    error::FetchError,
    source::MarketDataSource,
    types::{CoinIdentity, CoinSummary},
};

/// Resolves a free-text query to at most [`SEARCH_RESULT_LIMIT`] market rows.
///
/// An empty query matches nothing and performs no network calls. A query
/// matches an entry when it is a case-insensitive substring of the entry's
/// name, symbol or id. When nothing matches, the hydration request is
/// skipped entirely.
pub(crate) async fn search_coins(
    source: &dyn MarketDataSource,
    query: &str,
) -> Result<Vec<CoinSummary>, FetchError> {
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let query_lower = query.to_lowercase();
    let catalog = source.coin_catalog().await?;

    let ids: Vec<String> = catalog
        .iter()
        .filter(|entry| matches_query(entry, &query_lower))
        .take(SEARCH_RESULT_LIMIT)
        .map(|entry| entry.id.clone())
        .collect();

    if ids.is_empty() {
        return Ok(Vec::new());
    }

    source.coins_by_ids(&ids).await
}

/// Case-insensitive substring match against name, symbol or id.
fn matches_query(entry: &CoinIdentity, query_lower: &str) -> bool {
    entry.name.to_lowercase().contains(query_lower)
        || entry.symbol.to_lowercase().contains(query_lower)
        || entry.id.to_lowercase().contains(query_lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::mock::{identity, summary, MockSource};

    #[tokio::test]
    async fn empty_query_makes_no_network_calls() {
        let source = MockSource::new();
        let results = search_coins(&source, "").await.unwrap();

        assert!(results.is_empty());
        assert_eq!(source.catalog_calls(), 0);
        assert_eq!(source.by_ids_calls(), 0);
    }

    #[tokio::test]
    async fn matches_any_of_name_symbol_or_id() {
        let source = MockSource::new();
        source.set_catalog(vec![
            identity("bitcoin", "btc", "Bitcoin"),
            identity("ethereum", "eth", "Ethereum"),
            identity("ripple", "xrp", "XRP"),
        ]);
        source.set_by_ids(vec![summary("ripple")]);

        // "rip" only appears in the id
        let results = search_coins(&source, "RIP").await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(source.hydrated_ids().unwrap(), vec!["ripple".to_string()]);
    }

    #[tokio::test]
    async fn symbol_match_is_case_insensitive() {
        let source = MockSource::new();
        source.set_catalog(vec![
            identity("bitcoin", "btc", "Bitcoin"),
            identity("ethereum", "eth", "Ethereum"),
        ]);
        source.set_by_ids(vec![summary("ethereum")]);

        search_coins(&source, "ETH").await.unwrap();

        assert_eq!(source.hydrated_ids().unwrap(), vec!["ethereum".to_string()]);
    }

    #[tokio::test]
    async fn no_matches_skips_hydration() {
        let source = MockSource::new();
        source.set_catalog(vec![identity("bitcoin", "btc", "Bitcoin")]);

        let results = search_coins(&source, "zzz").await.unwrap();

        assert!(results.is_empty());
        assert_eq!(source.catalog_calls(), 1);
        assert_eq!(source.by_ids_calls(), 0);
    }

    #[tokio::test]
    async fn truncates_to_limit_preserving_catalog_order() {
        let source = MockSource::new();
        let catalog: Vec<_> = (0..30)
            .map(|i| identity(&format!("coin-{i:02}"), &format!("c{i:02}"), "Coin"))
            .collect();
        source.set_catalog(catalog);

        search_coins(&source, "coin").await.unwrap();

        let hydrated = source.hydrated_ids().unwrap();
        assert_eq!(hydrated.len(), SEARCH_RESULT_LIMIT);
        assert_eq!(hydrated[0], "coin-00");
        assert_eq!(hydrated[24], "coin-24");
    }

    #[tokio::test]
    async fn catalog_failure_propagates() {
        let source = MockSource::new();
        source.fail_catalog("catalog down");

        let err = search_coins(&source, "btc").await.unwrap_err();

        assert!(matches!(err, FetchError::InvalidResponse(_)));
        assert_eq!(source.by_ids_calls(), 0);
    }

    #[test]
    fn match_is_substring_not_token() {
        let entry = identity("usd-coin", "usdc", "USD Coin");
        assert!(matches_query(&entry, "d-c"));
        assert!(matches_query(&entry, "sd c"));
        assert!(!matches_query(&entry, "coins"));
    }
}
