//! Coin records as served by the CoinPaprika API
//!
//! All records are read-only snapshots. They are fetched per view, keyed by
//! the coin identifier, and replaced wholesale when a fresh copy arrives.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptive metadata for one coin (`GET /coins/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetInfo {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub open_source: bool,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub development_status: Option<String>,
    #[serde(default)]
    pub hardware_wallet: bool,
    #[serde(default)]
    pub proof_type: Option<String>,
    #[serde(default)]
    pub org_structure: Option<String>,
    #[serde(default)]
    pub hash_algorithm: Option<String>,
    #[serde(default)]
    pub first_data_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_data_at: Option<DateTime<Utc>>,
}

impl AssetInfo {
    /// Description text, empty when the API has none
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// Market data for one coin (`GET /tickers/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetTicker {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub rank: u32,
    /// `None` when unknown
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    /// `None` when unknown
    #[serde(default)]
    pub total_supply: Option<f64>,
    /// `None` when unknown or uncapped
    #[serde(default)]
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub beta_value: Option<f64>,
    #[serde(default)]
    pub first_data_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    /// Quotes keyed by quote currency (e.g. "USD")
    #[serde(default)]
    pub quotes: HashMap<String, TickerQuote>,
}

impl AssetTicker {
    /// Look up the quote for a currency
    pub fn quote(&self, currency: &str) -> Option<&TickerQuote> {
        self.quotes.get(currency)
    }
}

/// Current quote of a coin in one quote currency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerQuote {
    pub price: f64,
    pub volume_24h: f64,
    pub volume_24h_change_24h: f64,
    pub market_cap: f64,
    pub market_cap_change_24h: f64,
    pub percent_change_15m: f64,
    pub percent_change_30m: f64,
    pub percent_change_1h: f64,
    pub percent_change_6h: f64,
    pub percent_change_12h: f64,
    pub percent_change_24h: f64,
    pub percent_change_7d: f64,
    pub percent_change_30d: f64,
    pub percent_change_1y: f64,
    pub ath_price: Option<f64>,
    pub ath_date: Option<DateTime<Utc>>,
    pub percent_from_price_ath: Option<f64>,
}

impl TickerQuote {
    /// Price change per time window, shortest window first
    pub fn percent_changes(&self) -> [(&'static str, f64); 9] {
        [
            ("15m", self.percent_change_15m),
            ("30m", self.percent_change_30m),
            ("1h", self.percent_change_1h),
            ("6h", self.percent_change_6h),
            ("12h", self.percent_change_12h),
            ("24h", self.percent_change_24h),
            ("7d", self.percent_change_7d),
            ("30d", self.percent_change_30d),
            ("1y", self.percent_change_1y),
        ]
    }
}

/// Entry of the coin list (`GET /coins`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinSummary {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Daily OHLCV candle (`GET /coins/{id}/ohlcv/historical`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcvPoint {
    pub time_open: DateTime<Utc>,
    pub time_close: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
}

/// Prepare a raw coin list for display: active coins only, by rank, truncated
///
/// Rank 0 means "unranked" and sorts after every ranked coin.
pub fn top_coins(mut coins: Vec<CoinSummary>, limit: usize) -> Vec<CoinSummary> {
    coins.retain(|c| c.is_active);
    coins.sort_by_key(|c| if c.rank == 0 { u32::MAX } else { c.rank });
    coins.truncate(limit);
    coins
}

/// Render an optional amount the way the detail panels show it
///
/// Whole numbers render without a fractional part (`18000000`), others with
/// the shortest exact representation (`0.5`). Unknown amounts render `N/A`.
pub fn format_amount(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v),
        None => "N/A".to_string(),
    }
}

/// Render a price with a precision suited to its magnitude
pub fn format_price(value: f64, currency: &str) -> String {
    let symbol = currency_symbol(currency);
    if value.abs() >= 1.0 {
        format!("{symbol}{value:.2}")
    } else {
        format!("{symbol}{value:.6}")
    }
}

/// Render a percentage with an explicit sign
pub fn format_percent(value: f64) -> String {
    format!("{value:+.2}%")
}

fn currency_symbol(currency: &str) -> String {
    match currency {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "BTC" => "₿".to_string(),
        other => format!("{other} "),
    }
}
