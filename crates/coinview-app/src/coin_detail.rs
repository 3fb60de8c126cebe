//! Coin detail view model
//!
//! The detail view is a pure function of its location parameters and the
//! two lookups keyed by the coin identifier. [`CoinDetailView`] bundles them
//! so the TUI and the headless runner render the same thing.

use serde::Serialize;

use coinview_core::{
    format_amount, AssetInfo, AssetTicker, CoinParams, OhlcvPoint, SubRoute, TickerQuote,
};

use crate::query::{Query, QueryStore};

/// Title shown while nothing better is known
pub const LOADING_TITLE: &str = "Loading...";

/// Combined readiness of the metadata and ticker lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPhase {
    /// At least one lookup is pending
    Loading,
    /// Both lookups settled with values
    Ready,
    /// Nothing pending and at least one lookup failed
    Failed(String),
}

/// Derive the phase from the two lookups
pub fn detail_phase(info: &Query<&AssetInfo>, tickers: &Query<&AssetTicker>) -> DetailPhase {
    if info.is_pending() || tickers.is_pending() {
        return DetailPhase::Loading;
    }
    match (info.error(), tickers.error()) {
        (Some(error), _) | (None, Some(error)) => DetailPhase::Failed(error.to_string()),
        (None, None) => DetailPhase::Ready,
    }
}

/// Figures shown in the two info panels, already formatted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSummary {
    pub rank: String,
    pub symbol: String,
    pub open_source: String,
    pub description: String,
    pub total_supply: String,
    pub max_supply: String,
}

impl DetailSummary {
    pub fn new(info: &AssetInfo, ticker: &AssetTicker) -> Self {
        Self {
            rank: ticker.rank.to_string(),
            symbol: format!("${}", ticker.symbol),
            open_source: if info.open_source { "Yes" } else { "No" }.to_string(),
            description: info.description_text().to_string(),
            total_supply: format_amount(ticker.total_supply),
            max_supply: format_amount(ticker.max_supply),
        }
    }
}

/// Everything the detail screen needs, borrowed from app state
#[derive(Debug, Clone)]
pub struct CoinDetailView<'a> {
    pub params: &'a CoinParams,
    pub info: Query<&'a AssetInfo>,
    pub tickers: Query<&'a AssetTicker>,
    /// Only consulted when the chart sub-route is active
    pub history: Query<&'a Vec<OhlcvPoint>>,
    pub quote_currency: &'a str,
}

impl<'a> CoinDetailView<'a> {
    pub fn new(params: &'a CoinParams, queries: &'a QueryStore, quote_currency: &'a str) -> Self {
        Self {
            params,
            info: queries.info.get(&params.coin_id),
            tickers: queries.tickers.get(&params.coin_id),
            history: queries.history.get(&params.coin_id),
            quote_currency,
        }
    }

    pub fn phase(&self) -> DetailPhase {
        detail_phase(&self.info, &self.tickers)
    }

    pub fn is_loading(&self) -> bool {
        self.phase() == DetailPhase::Loading
    }

    /// Carried name first, then the loading label or the fetched name
    pub fn title(&self) -> String {
        if let Some(name) = &self.params.carried_name {
            return name.clone();
        }
        match self.phase() {
            DetailPhase::Loading => LOADING_TITLE.to_string(),
            DetailPhase::Ready => self
                .info
                .value()
                .map(|info| info.name.clone())
                .unwrap_or_else(|| self.params.coin_id.clone()),
            DetailPhase::Failed(_) => self.params.coin_id.clone(),
        }
    }

    /// Panel figures, only once both lookups are ready
    pub fn summary(&self) -> Option<DetailSummary> {
        if self.phase() != DetailPhase::Ready {
            return None;
        }
        match (self.info.value(), self.tickers.value()) {
            (Some(info), Some(ticker)) => Some(DetailSummary::new(info, ticker)),
            _ => None,
        }
    }

    pub fn sub_route(&self) -> SubRoute {
        self.params.sub_route
    }

    /// Quote in the configured currency, for the price sub-view
    pub fn quote(&self) -> Option<&'a TickerQuote> {
        match self.tickers {
            Query::Ready(ticker) => ticker.quote(self.quote_currency),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryKey;
    use coinview_api::test_utils::{test_info, test_ticker};
    use std::time::{Duration, Instant};

    fn params(carried_name: Option<&str>) -> CoinParams {
        CoinParams {
            coin_id: "btc-bitcoin".to_string(),
            carried_name: carried_name.map(str::to_string),
            sub_route: SubRoute::None,
        }
    }

    fn store_with(
        info: Option<Result<AssetInfo, String>>,
        ticker: Option<Result<AssetTicker, String>>,
    ) -> QueryStore {
        let mut store = QueryStore::new(Duration::from_secs(30));
        let now = Instant::now();
        store.begin(&QueryKey::info("btc-bitcoin"), now);
        store.begin(&QueryKey::tickers("btc-bitcoin"), now);
        if let Some(result) = info {
            store.info.settle("btc-bitcoin", result, now);
        }
        if let Some(result) = ticker {
            store.tickers.settle("btc-bitcoin", result, now);
        }
        store
    }

    fn btc_info() -> AssetInfo {
        test_info("btc-bitcoin", "Bitcoin", "BTC", true)
    }

    fn btc_ticker() -> AssetTicker {
        test_ticker("btc-bitcoin", "BTC", 1, Some(18_000_000.0), Some(21_000_000.0))
    }

    #[test]
    fn test_loading_while_either_pending() {
        let p = params(None);
        for store in [
            store_with(None, None),
            store_with(Some(Ok(btc_info())), None),
            store_with(None, Some(Ok(btc_ticker()))),
        ] {
            let view = CoinDetailView::new(&p, &store, "USD");
            assert_eq!(view.phase(), DetailPhase::Loading);
            assert_eq!(view.title(), LOADING_TITLE);
            assert!(view.summary().is_none());
        }
    }

    #[test]
    fn test_ready_summary_matches_ticker() {
        let p = params(None);
        let store = store_with(Some(Ok(btc_info())), Some(Ok(btc_ticker())));
        let view = CoinDetailView::new(&p, &store, "USD");

        assert_eq!(view.phase(), DetailPhase::Ready);
        assert_eq!(view.title(), "Bitcoin");

        let summary = view.summary().unwrap();
        assert_eq!(summary.rank, "1");
        assert_eq!(summary.symbol, "$BTC");
        assert_eq!(summary.open_source, "Yes");
        assert_eq!(summary.total_supply, "18000000");
        assert_eq!(summary.max_supply, "21000000");
        assert_eq!(summary.description, "Bitcoin is a test coin.");
    }

    #[test]
    fn test_carried_name_wins_in_every_phase() {
        let p = params(Some("Bitcoin (carried)"));
        for store in [
            store_with(None, None),
            store_with(Some(Ok(btc_info())), Some(Ok(btc_ticker()))),
            store_with(Some(Err("boom".to_string())), Some(Ok(btc_ticker()))),
        ] {
            let view = CoinDetailView::new(&p, &store, "USD");
            assert_eq!(view.title(), "Bitcoin (carried)");
        }
    }

    #[test]
    fn test_failed_when_settled_with_error() {
        let p = params(None);
        let store = store_with(
            Some(Ok(btc_info())),
            Some(Err("API returned HTTP 500".to_string())),
        );
        let view = CoinDetailView::new(&p, &store, "USD");

        assert_eq!(
            view.phase(),
            DetailPhase::Failed("API returned HTTP 500".to_string())
        );
        assert_eq!(view.title(), "btc-bitcoin");
        assert!(view.summary().is_none());
    }

    #[test]
    fn test_failure_waits_for_other_lookup() {
        let p = params(None);
        let store = store_with(Some(Err("boom".to_string())), None);
        let view = CoinDetailView::new(&p, &store, "USD");
        assert_eq!(view.phase(), DetailPhase::Loading);
    }

    #[test]
    fn test_open_source_no_and_unknown_supply() {
        let p = params(None);
        let mut info = btc_info();
        info.open_source = false;
        let ticker = test_ticker("btc-bitcoin", "BTC", 3, None, None);
        let store = store_with(Some(Ok(info)), Some(Ok(ticker)));

        let summary = CoinDetailView::new(&p, &store, "USD").summary().unwrap();
        assert_eq!(summary.open_source, "No");
        assert_eq!(summary.total_supply, "N/A");
        assert_eq!(summary.max_supply, "N/A");
    }

    #[test]
    fn test_quote_uses_configured_currency() {
        let p = params(None);
        let store = store_with(Some(Ok(btc_info())), Some(Ok(btc_ticker())));
        assert!(CoinDetailView::new(&p, &store, "USD").quote().is_some());
        assert!(CoinDetailView::new(&p, &store, "EUR").quote().is_none());
    }
}
