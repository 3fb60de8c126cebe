//! Main update function - handles state transitions (TEA pattern)

use coinview_core::AppPhase;

use crate::message::Message;
use crate::state::AppState;

use super::{fetch, keys::handle_key, navigation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and the actions to run
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.is_loading() {
                state.loading.tick();
            }
            UpdateResult::none()
        }

        Message::Start => navigation::handle_start(state),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate(location) => navigation::handle_navigate(state, location),
        Message::Back => navigation::handle_back(state),
        Message::SelectTab(sub_route) => navigation::handle_select_tab(state, sub_route),
        Message::NextTab => navigation::handle_next_tab(state),
        Message::Refresh => navigation::handle_refresh(state),

        // ─────────────────────────────────────────────────────────
        // Coin List Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectPrevious => {
            state.coin_list.select_previous();
            UpdateResult::none()
        }
        Message::SelectNext => {
            let count = state.coin_count();
            state.coin_list.select_next(count);
            UpdateResult::none()
        }
        Message::SelectPageUp => {
            state.coin_list.page_up();
            UpdateResult::none()
        }
        Message::SelectPageDown => {
            let count = state.coin_count();
            state.coin_list.page_down(count);
            UpdateResult::none()
        }
        Message::SelectFirst => {
            state.coin_list.select_first();
            UpdateResult::none()
        }
        Message::SelectLast => {
            let count = state.coin_count();
            state.coin_list.select_last(count);
            UpdateResult::none()
        }
        Message::OpenSelected => navigation::handle_open_selected(state),

        // ─────────────────────────────────────────────────────────
        // Fetch Results
        // ─────────────────────────────────────────────────────────
        Message::CoinsFetched { result } => fetch::handle_coins_fetched(state, result),
        Message::CoinInfoFetched { coin_id, result } => {
            fetch::handle_info_fetched(state, &coin_id, result)
        }
        Message::CoinTickersFetched { coin_id, result } => {
            fetch::handle_tickers_fetched(state, &coin_id, result)
        }
        Message::CoinHistoryFetched { coin_id, result } => {
            fetch::handle_history_fetched(state, &coin_id, result)
        }
    }
}
