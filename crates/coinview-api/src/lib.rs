//! # coinview-api - Remote Coin Data
//!
//! Talks to the CoinPaprika REST API. Depends on [`coinview_core`] for the
//! records it decodes and for error handling.
//!
//! ## Public API
//!
//! ### Provider Seam
//! - [`CoinProvider`] - `Send` trait the app spawns fetch tasks against
//! - [`LocalCoinProvider`] - Non-`Send` variant generated alongside it
//!
//! ### HTTP Client
//! - [`PaprikaClient`] - `reqwest`-backed implementation
//! - [`ClientConfig`] - Base URL, quote currency and timeout
//! - URL builders: [`coins_url()`], [`coin_info_url()`], [`coin_tickers_url()`],
//!   [`coin_history_url()`]
//!
//! ### Test Helpers (`test-helpers` feature)
//! - `test_utils::FakeProvider` - In-memory provider that records calls

pub mod client;
pub mod provider;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{
    coin_history_url, coin_info_url, coin_tickers_url, coins_url, parse_base_url, ClientConfig,
    PaprikaClient, DEFAULT_BASE_URL, DEFAULT_QUOTE_CURRENCY,
};
pub use provider::{CoinProvider, LocalCoinProvider};
