//! Fetch result handlers
//!
//! Results are settled under the key they were issued for, whatever is on
//! screen now. A late result for a coin the user has left lands in that
//! coin's entry and is never read by the current view.

use std::time::Instant;

use coinview_core::prelude::*;
use coinview_core::{top_coins, AssetInfo, AssetTicker, CoinSummary, OhlcvPoint};

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_coins_fetched(
    state: &mut AppState,
    result: std::result::Result<Vec<CoinSummary>, String>,
) -> UpdateResult {
    let limit = state.settings.ui.coins_limit;
    let result = result.map(|coins| top_coins(coins, limit));

    match &result {
        Ok(coins) => debug!("Coin list settled with {} coins", coins.len()),
        Err(e) => warn!("Coin list fetch failed: {}", e),
    }

    state.queries.coins.settle("", result, Instant::now());
    let count = state.coin_count();
    state.coin_list.clamp(count);
    UpdateResult::none()
}

pub fn handle_info_fetched(
    state: &mut AppState,
    coin_id: &str,
    result: std::result::Result<Box<AssetInfo>, String>,
) -> UpdateResult {
    log_settled("info", coin_id, &result);
    state
        .queries
        .info
        .settle(coin_id, result.map(|info| *info), Instant::now());
    UpdateResult::none()
}

pub fn handle_tickers_fetched(
    state: &mut AppState,
    coin_id: &str,
    result: std::result::Result<Box<AssetTicker>, String>,
) -> UpdateResult {
    log_settled("tickers", coin_id, &result);
    state
        .queries
        .tickers
        .settle(coin_id, result.map(|ticker| *ticker), Instant::now());
    UpdateResult::none()
}

pub fn handle_history_fetched(
    state: &mut AppState,
    coin_id: &str,
    result: std::result::Result<Vec<OhlcvPoint>, String>,
) -> UpdateResult {
    log_settled("history", coin_id, &result);
    state
        .queries
        .history
        .settle(coin_id, result, Instant::now());
    UpdateResult::none()
}

fn log_settled<T>(kind: &str, coin_id: &str, result: &std::result::Result<T, String>) {
    match result {
        Ok(_) => debug!("{} lookup for {} settled", kind, coin_id),
        Err(e) => warn!("{} lookup for {} failed: {}", kind, coin_id, e),
    }
}
