//! Application state (Model in TEA pattern)

use rand::Rng;

use coinview_core::{AppPhase, CoinParams, CoinSummary, History, Location, Route};

use crate::coin_detail::CoinDetailView;
use crate::coin_list::CoinListState;
use crate::config::Settings;
use crate::query::{Query, QueryStore};

/// Flavour text shown under the loading spinner
const LOADING_MESSAGES: &[&str] = &[
    "Counting satoshis...",
    "Waiting for block confirmations...",
    "Asking the order book nicely...",
    "Reading the candles...",
    "Checking the mempool...",
    "Calculating market cap...",
    "Polishing the ticker tape...",
    "Hodling on...",
];

/// Loading indicator state
#[derive(Debug, Clone)]
pub struct LoadingState {
    /// Current flavour message
    pub message: String,
    /// Animation frame counter for spinner
    pub animation_frame: u64,
    message_index: usize,
}

impl LoadingState {
    pub fn new() -> Self {
        // Start at a random index for variety
        let start_index = rand::thread_rng().gen_range(0..LOADING_MESSAGES.len());

        Self {
            message: LOADING_MESSAGES[start_index].to_string(),
            animation_frame: 0,
            message_index: start_index,
        }
    }

    /// Advance the spinner, cycling the message every 30 frames (~1.5 s)
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if self.animation_frame % 30 == 0 {
            self.message_index = (self.message_index + 1) % LOADING_MESSAGES.len();
            self.message = LOADING_MESSAGES[self.message_index].to_string();
        }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Application settings from config file
    pub settings: Settings,

    /// Visited locations; the last one is on screen
    pub history: History,

    /// Remote lookups keyed by kind and id
    pub queries: QueryStore,

    /// Coin list selection
    pub coin_list: CoinListState,

    /// Spinner shared by every loading view
    pub loading: LoadingState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State with default settings, on the coin list
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), Location::new(Route::Coins))
    }

    /// State with settings and the location to start on
    pub fn with_settings(settings: Settings, initial: Location) -> Self {
        let queries = QueryStore::new(settings.stale_after());
        Self {
            phase: AppPhase::Running,
            settings,
            history: History::new(initial),
            queries,
            coin_list: CoinListState::new(),
            loading: LoadingState::new(),
        }
    }

    /// Location on screen
    pub fn location(&self) -> &Location {
        self.history.current()
    }

    /// Detail parameters when a coin is on screen
    pub fn coin_params(&self) -> Option<CoinParams> {
        self.location().coin_params()
    }

    /// Detail view model for a resolved set of parameters
    pub fn coin_detail<'a>(&'a self, params: &'a CoinParams) -> CoinDetailView<'a> {
        CoinDetailView::new(params, &self.queries, &self.settings.api.quote_currency)
    }

    /// Coin list as shown (already filtered and ranked)
    pub fn coins(&self) -> Query<&Vec<CoinSummary>> {
        self.queries.coins.get("")
    }

    /// Number of rows in the coin list, zero until loaded
    pub fn coin_count(&self) -> usize {
        self.coins().value().map_or(0, |coins| coins.len())
    }

    /// Coin under the list cursor
    pub fn selected_coin(&self) -> Option<&CoinSummary> {
        match self.queries.coins.get("") {
            Query::Ready(coins) => coins.get(self.coin_list.selected_index),
            _ => None,
        }
    }

    /// Whether any lookup the current view reads is pending
    pub fn is_loading(&self) -> bool {
        match self.coin_params() {
            None => self.coins().is_pending(),
            Some(params) => {
                let view = self.coin_detail(&params);
                view.is_loading() || (params.chart_active() && view.history.is_pending())
            }
        }
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinview_core::SubRoute;

    #[test]
    fn test_new_state_starts_on_coin_list() {
        let state = AppState::new();
        assert_eq!(state.location().route, Route::Coins);
        assert!(state.coin_params().is_none());
        assert_eq!(state.coin_count(), 0);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_with_settings_uses_initial_location() {
        let initial = Location::new(Route::coin("btc-bitcoin", SubRoute::Price));
        let state = AppState::with_settings(Settings::default(), initial);
        let params = state.coin_params().unwrap();
        assert_eq!(params.coin_id, "btc-bitcoin");
        assert!(params.price_active());
        assert!(params.carried_name.is_none());
    }

    #[test]
    fn test_loading_tick_cycles_message() {
        let mut loading = LoadingState::new();
        let first = loading.message.clone();
        for _ in 0..30 {
            loading.tick();
        }
        assert_eq!(loading.animation_frame, 30);
        assert_ne!(loading.message, first);
    }
}
