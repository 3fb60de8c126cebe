//! The data-provider seam between the application and the remote API
//!
//! The app crate only talks to [`CoinProvider`]; the HTTP client and the
//! in-memory fake used by tests both implement it.

use coinview_core::prelude::*;
use coinview_core::{AssetInfo, AssetTicker, CoinSummary, OhlcvPoint};

/// Read-only, idempotent lookups against a coin data source.
///
/// `CoinProvider` is the `Send` variant used by spawned fetch tasks;
/// implement that one and `LocalCoinProvider` comes for free.
#[trait_variant::make(CoinProvider: Send)]
pub trait LocalCoinProvider {
    /// All coins known to the source
    async fn fetch_coins(&self) -> Result<Vec<CoinSummary>>;

    /// Descriptive metadata for one coin
    async fn fetch_coin_info(&self, coin_id: &str) -> Result<AssetInfo>;

    /// Supply figures and current quote for one coin
    async fn fetch_coin_tickers(&self, coin_id: &str) -> Result<AssetTicker>;

    /// Daily candles covering the last `days` days
    async fn fetch_coin_history(&self, coin_id: &str, days: u32) -> Result<Vec<OhlcvPoint>>;
}
