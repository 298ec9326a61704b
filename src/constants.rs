//! Constants for the market data SDK
//!
//! All configuration is centralized here. No runtime configuration
//! (config.yml) is used - the system operates transparently with these
//! compile-time constants.

/// CoinGecko API base URL
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// HTTP request timeout when fetching market data (in seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// User agent for HTTP requests
pub const USER_AGENT: &str = "coin-market-sdk/0.1.0";

/// How often live views re-fetch their data (in seconds)
pub const REFRESH_INTERVAL_SECS: u64 = 60;

/// Coins per page for the ranked market listing
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Maximum number of catalog matches forwarded to search hydration
pub const SEARCH_RESULT_LIMIT: usize = 25;

/// Quote currency for all market data requests
pub const VS_CURRENCY: &str = "usd";
