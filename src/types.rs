//! Entities parsed from the remote market data API
//!
//! Every type here is a read-only snapshot of one response. Nothing is
//! cached or mutated across fetches; the `id` field is the only key used
//! to correlate entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Accepts an explicit JSON `null` where the API normally sends a number.
///
/// The remote payload is not trusted structurally: delisted or stale coins
/// carry nulls in otherwise-numeric columns, which are defaulted to zero
/// instead of failing the whole page.
fn null_to_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// One row of the ranked market listing (`/coins/markets`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinSummary {
    /// Stable lowercase-slug identifier
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Icon URL
    pub image: String,
    /// Current price in USD
    #[serde(default, deserialize_with = "null_to_zero")]
    pub current_price: f64,
    /// Market capitalization in USD
    #[serde(default, deserialize_with = "null_to_zero")]
    pub market_cap: f64,
    /// Rank by market cap, absent for unranked coins
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub fully_diluted_valuation: Option<f64>,
    /// 24h trading volume in USD
    #[serde(default, deserialize_with = "null_to_zero")]
    pub total_volume: f64,
    #[serde(default)]
    pub high_24h: Option<f64>,
    #[serde(default)]
    pub low_24h: Option<f64>,
    /// 24h price change in USD, signed
    #[serde(default, deserialize_with = "null_to_zero")]
    pub price_change_24h: f64,
    /// 24h price change as a percentage, signed
    #[serde(default, deserialize_with = "null_to_zero")]
    pub price_change_percentage_24h: f64,
    #[serde(default)]
    pub market_cap_change_24h: Option<f64>,
    #[serde(default)]
    pub market_cap_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    /// All-time high price and when it was reached
    #[serde(default)]
    pub ath: Option<f64>,
    #[serde(default)]
    pub ath_change_percentage: Option<f64>,
    #[serde(default)]
    pub ath_date: Option<DateTime<Utc>>,
    /// All-time low price and when it was reached
    #[serde(default)]
    pub atl: Option<f64>,
    #[serde(default)]
    pub atl_change_percentage: Option<f64>,
    #[serde(default)]
    pub atl_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub roi: Option<Roi>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Return-on-investment block present for a handful of listed coins
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roi {
    pub times: f64,
    pub currency: String,
    pub percentage: f64,
}

/// One row of the full coin catalog (`/coins/list`), the search corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinIdentity {
    pub id: String,
    pub symbol: String,
    pub name: String,
}

/// Full detail for a single coin (`/coins/{id}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinDetail {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Long-form description. The markup inside is third-party HTML and
    /// must not be rendered raw; see [`CoinDetail::description_html`].
    #[serde(default)]
    pub description: LocalizedText,
    pub image: ImageSet,
    pub market_data: MarketData,
}

impl CoinDetail {
    /// Returns the English description with untrusted markup removed.
    ///
    /// Keeps basic formatting tags and http(s) links, strips everything
    /// else including script/style elements and all other attributes.
    pub fn description_html(&self) -> String {
        crate::sanitize::clean_html(&self.description.en)
    }
}

/// Localized text block; only the English entry is requested
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub en: String,
}

/// Coin icon at the three resolutions the API serves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSet {
    pub thumb: String,
    pub small: String,
    pub large: String,
}

/// Market data block nested in the coin detail response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketData {
    pub current_price: CurrencyQuote,
    pub market_cap: CurrencyQuote,
    #[serde(default, deserialize_with = "null_to_zero")]
    pub price_change_percentage_24h: f64,
    #[serde(default, deserialize_with = "null_to_zero")]
    pub price_change_percentage_7d: f64,
    #[serde(default, deserialize_with = "null_to_zero")]
    pub price_change_percentage_30d: f64,
    #[serde(default, deserialize_with = "null_to_zero")]
    pub price_change_percentage_1y: f64,
}

/// USD-denominated quote; other currencies in the payload are ignored
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrencyQuote {
    #[serde(default, deserialize_with = "null_to_zero")]
    pub usd: f64,
}

/// Historical price series (`/coins/{id}/market_chart`)
///
/// Points arrive chronologically ascending and are never reordered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketChart {
    #[serde(default)]
    pub prices: Vec<PricePoint>,
}

impl MarketChart {
    /// Shapes the series for chart display: one labeled point per sample,
    /// labels like `"Apr 5"`. Points with out-of-range timestamps are
    /// dropped.
    pub fn chart_points(&self) -> Vec<ChartPoint> {
        self.prices
            .iter()
            .filter_map(|p| {
                p.datetime().map(|dt| ChartPoint {
                    label: dt.format("%b %-d").to_string(),
                    price: p.price,
                })
            })
            .collect()
    }
}

/// A single `[timestamp, price]` sample from the wire
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    /// Milliseconds since the Unix epoch
    pub timestamp_ms: i64,
    /// Price in USD at that instant
    pub price: f64,
}

impl PricePoint {
    /// Timestamp as a UTC datetime, `None` if out of chrono's range
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp_ms)
    }
}

// The wire shape is a two-element array, not an object.
impl<'de> Deserialize<'de> for PricePoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (timestamp_ms, price) = <(i64, f64)>::deserialize(deserializer)?;
        Ok(Self {
            timestamp_ms,
            price,
        })
    }
}

impl Serialize for PricePoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.timestamp_ms, self.price).serialize(serializer)
    }
}

/// A display-ready chart sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub price: f64,
}

/// Selectable time window for the historical price chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeWindow {
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl TimeWindow {
    /// Trailing days requested from the API for this window
    pub fn days(self) -> u32 {
        match self {
            TimeWindow::Week => 7,
            TimeWindow::Month => 30,
            TimeWindow::Quarter => 90,
            TimeWindow::Year => 365,
        }
    }

    /// Short label used on window selector buttons
    pub fn label(self) -> &'static str {
        match self {
            TimeWindow::Week => "7d",
            TimeWindow::Month => "30d",
            TimeWindow::Quarter => "90d",
            TimeWindow::Year => "1y",
        }
    }

    /// All windows in selector order
    pub fn all() -> &'static [TimeWindow] {
        &[
            TimeWindow::Week,
            TimeWindow::Month,
            TimeWindow::Quarter,
            TimeWindow::Year,
        ]
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        TimeWindow::Week
    }
}
