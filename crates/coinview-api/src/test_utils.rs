//! Test utilities for provider consumers
//!
//! [`FakeProvider`] serves canned records from memory and records every call
//! so tests can assert which lookups were issued.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};

use coinview_core::prelude::*;
use coinview_core::{AssetInfo, AssetTicker, CoinSummary, OhlcvPoint, TickerQuote};

use crate::provider::CoinProvider;

/// A lookup issued against a [`FakeProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    Coins,
    Info(String),
    Tickers(String),
    History(String, u32),
}

#[derive(Debug, Default)]
struct FakeData {
    coins: Vec<CoinSummary>,
    info: HashMap<String, AssetInfo>,
    tickers: HashMap<String, AssetTicker>,
    history: HashMap<String, Vec<OhlcvPoint>>,
    calls: Vec<ProviderCall>,
}

/// In-memory provider. Unknown ids answer [`Error::NotFound`].
#[derive(Debug, Clone, Default)]
pub struct FakeProvider {
    data: Arc<Mutex<FakeData>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coins(self, coins: Vec<CoinSummary>) -> Self {
        self.lock().coins = coins;
        self
    }

    pub fn with_info(self, info: AssetInfo) -> Self {
        self.lock().info.insert(info.id.clone(), info);
        self
    }

    pub fn with_ticker(self, ticker: AssetTicker) -> Self {
        self.lock().tickers.insert(ticker.id.clone(), ticker);
        self
    }

    pub fn with_history(self, coin_id: &str, points: Vec<OhlcvPoint>) -> Self {
        self.lock().history.insert(coin_id.to_string(), points);
        self
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeData> {
        // A poisoned lock only happens after a panicking test thread.
        self.data.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl CoinProvider for FakeProvider {
    async fn fetch_coins(&self) -> Result<Vec<CoinSummary>> {
        let mut data = self.lock();
        data.calls.push(ProviderCall::Coins);
        Ok(data.coins.clone())
    }

    async fn fetch_coin_info(&self, coin_id: &str) -> Result<AssetInfo> {
        let mut data = self.lock();
        data.calls.push(ProviderCall::Info(coin_id.to_string()));
        data.info
            .get(coin_id)
            .cloned()
            .ok_or_else(|| Error::not_found(coin_id))
    }

    async fn fetch_coin_tickers(&self, coin_id: &str) -> Result<AssetTicker> {
        let mut data = self.lock();
        data.calls.push(ProviderCall::Tickers(coin_id.to_string()));
        data.tickers
            .get(coin_id)
            .cloned()
            .ok_or_else(|| Error::not_found(coin_id))
    }

    async fn fetch_coin_history(&self, coin_id: &str, days: u32) -> Result<Vec<OhlcvPoint>> {
        let mut data = self.lock();
        data.calls
            .push(ProviderCall::History(coin_id.to_string(), days));
        data.history
            .get(coin_id)
            .cloned()
            .ok_or_else(|| Error::not_found(coin_id))
    }
}

// ─────────────────────────────────────────────────────────────────
// Record Builders
// ─────────────────────────────────────────────────────────────────

/// Creates coin metadata with basic defaults.
pub fn test_info(id: &str, name: &str, symbol: &str, open_source: bool) -> AssetInfo {
    AssetInfo {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        rank: 1,
        is_new: false,
        is_active: true,
        kind: Some("coin".to_string()),
        description: Some(format!("{name} is a test coin.")),
        message: None,
        open_source,
        started_at: None,
        development_status: Some("Working product".to_string()),
        hardware_wallet: true,
        proof_type: Some("Proof of Work".to_string()),
        org_structure: Some("Decentralized".to_string()),
        hash_algorithm: Some("SHA256".to_string()),
        first_data_at: None,
        last_data_at: None,
    }
}

/// Creates a ticker with a USD quote.
///
/// # Arguments
/// * `total_supply` / `max_supply` - `None` for unknown/uncapped
pub fn test_ticker(
    id: &str,
    symbol: &str,
    rank: u32,
    total_supply: Option<f64>,
    max_supply: Option<f64>,
) -> AssetTicker {
    let quote = TickerQuote {
        price: 43_000.5,
        volume_24h: 25_000_000_000.0,
        volume_24h_change_24h: -3.2,
        market_cap: 840_000_000_000.0,
        market_cap_change_24h: 1.1,
        percent_change_1h: 0.4,
        percent_change_24h: 1.1,
        percent_change_7d: -2.5,
        ath_price: Some(69_000.0),
        ath_date: Utc.with_ymd_and_hms(2021, 11, 10, 16, 51, 15).single(),
        percent_from_price_ath: Some(-37.68),
        ..TickerQuote::default()
    };

    AssetTicker {
        id: id.to_string(),
        name: id.to_string(),
        symbol: symbol.to_string(),
        rank,
        circulating_supply: total_supply,
        total_supply,
        max_supply,
        beta_value: Some(1.0),
        first_data_at: None,
        last_updated: None,
        quotes: HashMap::from([("USD".to_string(), quote)]),
    }
}

/// Creates a coin list entry.
pub fn test_coin(id: &str, name: &str, symbol: &str, rank: u32) -> CoinSummary {
    CoinSummary {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        rank,
        is_new: false,
        is_active: true,
        kind: Some("coin".to_string()),
    }
}

/// Creates `n` consecutive daily candles with closes `base, base+1, ...`.
pub fn test_history(n: usize, base: f64) -> Vec<OhlcvPoint> {
    (0..n)
        .filter_map(|i| {
            let open = Utc
                .with_ymd_and_hms(2024, 1, 1 + i as u32, 0, 0, 0)
                .single()?;
            let close = base + i as f64;
            Some(OhlcvPoint {
                time_open: open,
                time_close: open + chrono::Duration::hours(23),
                open: close - 0.5,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: Some(1_000.0),
                market_cap: None,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_provider_serves_and_records() {
        let provider = FakeProvider::new()
            .with_info(test_info("btc-bitcoin", "Bitcoin", "BTC", true))
            .with_ticker(test_ticker("btc-bitcoin", "BTC", 1, Some(1.0), None));

        let info = provider.fetch_coin_info("btc-bitcoin").await.unwrap();
        assert_eq!(info.name, "Bitcoin");
        let ticker = provider.fetch_coin_tickers("btc-bitcoin").await.unwrap();
        assert_eq!(ticker.rank, 1);

        assert_eq!(
            provider.calls(),
            vec![
                ProviderCall::Info("btc-bitcoin".to_string()),
                ProviderCall::Tickers("btc-bitcoin".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_fake_provider_unknown_id_is_not_found() {
        let provider = FakeProvider::new();
        let err = provider.fetch_coin_info("nope").await.unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_history_builder() {
        let points = test_history(3, 10.0);
        assert_eq!(points.len(), 3);
        assert_eq!(points[2].close, 12.0);
        assert!(points[0].time_open < points[1].time_open);
    }
}
