//! Tests for handler module

use super::*;
use crate::coin_detail::{DetailPhase, LOADING_TITLE};
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;
use coinview_api::test_utils::{test_coin, test_history, test_info, test_ticker};
use coinview_core::{AppPhase, Location, Route, SubRoute};

fn detail_state(coin_id: &str, sub_route: SubRoute) -> AppState {
    AppState::with_settings(
        Settings::default(),
        Location::new(Route::coin(coin_id, sub_route)),
    )
}

fn info_action(coin_id: &str) -> UpdateAction {
    UpdateAction::FetchCoinInfo {
        coin_id: coin_id.to_string(),
    }
}

fn tickers_action(coin_id: &str) -> UpdateAction {
    UpdateAction::FetchCoinTickers {
        coin_id: coin_id.to_string(),
    }
}

fn settle_btc(state: &mut AppState) {
    update(
        state,
        Message::CoinInfoFetched {
            coin_id: "btc-bitcoin".to_string(),
            result: Ok(Box::new(test_info("btc-bitcoin", "Bitcoin", "BTC", true))),
        },
    );
    update(
        state,
        Message::CoinTickersFetched {
            coin_id: "btc-bitcoin".to_string(),
            result: Ok(Box::new(test_ticker(
                "btc-bitcoin",
                "BTC",
                1,
                Some(18_000_000.0),
                Some(21_000_000.0),
            ))),
        },
    );
}

fn detail_phase(state: &AppState) -> DetailPhase {
    let params = state.coin_params().unwrap();
    state.coin_detail(&params).phase()
}

fn title(state: &AppState) -> String {
    let params = state.coin_params().unwrap();
    state.coin_detail(&params).title()
}

// ─────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    update(&mut state, Message::Quit);
    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_and_ctrl_c_quit_on_both_views() {
    let list = AppState::new();
    let detail = detail_state("btc-bitcoin", SubRoute::None);
    for state in [&list, &detail] {
        assert!(matches!(
            handle_key(state, InputKey::Char('q')),
            Some(Message::Quit)
        ));
        assert!(matches!(
            handle_key(state, InputKey::CharCtrl('c')),
            Some(Message::Quit)
        ));
    }
}

#[test]
fn test_start_on_list_fetches_coins() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Start);
    assert_eq!(result.actions, vec![UpdateAction::FetchCoins]);
}

// ─────────────────────────────────────────────────────────
// Detail Mount
// ─────────────────────────────────────────────────────────

#[test]
fn test_mount_issues_one_info_and_one_ticker_fetch() {
    let mut state = detail_state("btc-bitcoin", SubRoute::None);
    let result = update(&mut state, Message::Start);

    assert_eq!(
        result.actions,
        vec![info_action("btc-bitcoin"), tickers_action("btc-bitcoin")]
    );
    assert_eq!(detail_phase(&state), DetailPhase::Loading);
    assert_eq!(title(&state), LOADING_TITLE);
}

#[test]
fn test_repeated_start_reuses_in_flight_lookups() {
    let mut state = detail_state("btc-bitcoin", SubRoute::None);
    update(&mut state, Message::Start);
    let result = update(&mut state, Message::Start);
    assert!(result.actions.is_empty());
}

#[test]
fn test_mount_on_chart_also_fetches_history() {
    let mut state = detail_state("btc-bitcoin", SubRoute::Chart);
    let result = update(&mut state, Message::Start);

    assert_eq!(result.actions.len(), 3);
    assert!(result.actions.contains(&UpdateAction::FetchCoinHistory {
        coin_id: "btc-bitcoin".to_string(),
        days: 21,
    }));
}

#[test]
fn test_both_settled_is_ready_in_either_order() {
    let mut state = detail_state("btc-bitcoin", SubRoute::None);
    update(&mut state, Message::Start);

    update(
        &mut state,
        Message::CoinTickersFetched {
            coin_id: "btc-bitcoin".to_string(),
            result: Ok(Box::new(test_ticker("btc-bitcoin", "BTC", 1, None, None))),
        },
    );
    assert_eq!(detail_phase(&state), DetailPhase::Loading);

    update(
        &mut state,
        Message::CoinInfoFetched {
            coin_id: "btc-bitcoin".to_string(),
            result: Ok(Box::new(test_info("btc-bitcoin", "Bitcoin", "BTC", true))),
        },
    );
    assert_eq!(detail_phase(&state), DetailPhase::Ready);
    assert_eq!(title(&state), "Bitcoin");
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_navigating_to_other_coin_refetches_and_reloads() {
    let mut state = detail_state("btc-bitcoin", SubRoute::None);
    update(&mut state, Message::Start);
    settle_btc(&mut state);
    assert_eq!(detail_phase(&state), DetailPhase::Ready);

    let result = update(
        &mut state,
        Message::Navigate(Location::new(Route::coin("eth-ethereum", SubRoute::None))),
    );

    assert_eq!(
        result.actions,
        vec![info_action("eth-ethereum"), tickers_action("eth-ethereum")]
    );
    assert_eq!(detail_phase(&state), DetailPhase::Loading);
}

#[test]
fn test_late_result_for_previous_coin_does_not_touch_current_view() {
    let mut state = detail_state("btc-bitcoin", SubRoute::None);
    update(&mut state, Message::Start);
    update(
        &mut state,
        Message::Navigate(Location::new(Route::coin("eth-ethereum", SubRoute::None))),
    );

    settle_btc(&mut state);

    assert_eq!(state.coin_params().unwrap().coin_id, "eth-ethereum");
    assert_eq!(detail_phase(&state), DetailPhase::Loading);
    assert_eq!(title(&state), LOADING_TITLE);
}

#[test]
fn test_back_to_settled_coin_reuses_results() {
    let mut state = detail_state("btc-bitcoin", SubRoute::None);
    update(&mut state, Message::Start);
    settle_btc(&mut state);
    update(
        &mut state,
        Message::Navigate(Location::new(Route::coin("eth-ethereum", SubRoute::None))),
    );

    let result = update(&mut state, Message::Back);

    assert!(result.actions.is_empty());
    assert_eq!(state.coin_params().unwrap().coin_id, "btc-bitcoin");
    assert_eq!(detail_phase(&state), DetailPhase::Ready);
}

#[test]
fn test_back_from_direct_entry_goes_to_list() {
    let mut state = detail_state("btc-bitcoin", SubRoute::None);
    update(&mut state, Message::Start);

    let result = update(&mut state, Message::Back);

    assert_eq!(state.location().route, Route::Coins);
    assert_eq!(result.actions, vec![UpdateAction::FetchCoins]);

    // Back on the list root stays put
    let result = update(&mut state, Message::Back);
    assert!(result.actions.is_empty());
    assert_eq!(state.location().route, Route::Coins);
}

#[test]
fn test_select_tab_replaces_location_without_refetch() {
    let mut state = detail_state("btc-bitcoin", SubRoute::None);
    update(&mut state, Message::Start);
    settle_btc(&mut state);

    let result = update(&mut state, Message::SelectTab(SubRoute::Price));

    assert!(result.actions.is_empty());
    assert_eq!(state.history.depth(), 1);
    assert!(state.coin_params().unwrap().price_active());
    assert_eq!(detail_phase(&state), DetailPhase::Ready);
}

#[test]
fn test_chart_tab_mounts_history_lookup() {
    let mut state = detail_state("btc-bitcoin", SubRoute::None);
    update(&mut state, Message::Start);
    settle_btc(&mut state);

    let result = update(&mut state, Message::SelectTab(SubRoute::Chart));
    assert_eq!(
        result.actions,
        vec![UpdateAction::FetchCoinHistory {
            coin_id: "btc-bitcoin".to_string(),
            days: 21,
        }]
    );

    update(
        &mut state,
        Message::CoinHistoryFetched {
            coin_id: "btc-bitcoin".to_string(),
            result: Ok(test_history(5, 100.0)),
        },
    );
    let params = state.coin_params().unwrap();
    assert_eq!(
        state.coin_detail(&params).history.value().map(|h| h.len()),
        Some(5)
    );
}

#[test]
fn test_next_tab_cycles() {
    let mut state = detail_state("btc-bitcoin", SubRoute::None);
    update(&mut state, Message::NextTab);
    assert!(state.coin_params().unwrap().chart_active());
    update(&mut state, Message::NextTab);
    assert!(state.coin_params().unwrap().price_active());
    update(&mut state, Message::NextTab);
    assert!(state.coin_params().unwrap().chart_active());
}

#[test]
fn test_tab_keys_only_on_detail() {
    let list = AppState::new();
    assert!(handle_key(&list, InputKey::Char('c')).is_none());

    let detail = detail_state("btc-bitcoin", SubRoute::None);
    assert!(matches!(
        handle_key(&detail, InputKey::Char('c')),
        Some(Message::SelectTab(SubRoute::Chart))
    ));
    assert!(matches!(
        handle_key(&detail, InputKey::Char('p')),
        Some(Message::SelectTab(SubRoute::Price))
    ));
    assert!(matches!(
        handle_key(&detail, InputKey::Esc),
        Some(Message::Back)
    ));
}

// ─────────────────────────────────────────────────────────
// Coin List
// ─────────────────────────────────────────────────────────

#[test]
fn test_coins_fetched_filters_and_open_carries_name() {
    let mut state = AppState::new();
    update(&mut state, Message::Start);

    let mut dead = test_coin("dead-coin", "Dead", "DED", 2);
    dead.is_active = false;
    update(
        &mut state,
        Message::CoinsFetched {
            result: Ok(vec![
                test_coin("eth-ethereum", "Ethereum", "ETH", 2),
                dead,
                test_coin("btc-bitcoin", "Bitcoin", "BTC", 1),
            ]),
        },
    );
    assert_eq!(state.coin_count(), 2);

    update(&mut state, Message::SelectNext);
    let follow_up = update(&mut state, Message::OpenSelected).message;
    let Some(Message::Navigate(location)) = follow_up else {
        panic!("expected a navigation follow-up");
    };
    assert_eq!(location.route, Route::coin("eth-ethereum", SubRoute::None));
    assert_eq!(location.carried_name.as_deref(), Some("Ethereum"));

    let result = update(&mut state, Message::Navigate(location));
    assert_eq!(result.actions.len(), 2);
    assert_eq!(title(&state), "Ethereum");
    assert_eq!(state.history.depth(), 2);
}

#[test]
fn test_coins_limit_truncates() {
    let mut settings = Settings::default();
    settings.ui.coins_limit = 1;
    let mut state = AppState::with_settings(settings, Location::new(Route::Coins));
    update(&mut state, Message::Start);
    update(
        &mut state,
        Message::CoinsFetched {
            result: Ok(vec![
                test_coin("eth-ethereum", "Ethereum", "ETH", 2),
                test_coin("btc-bitcoin", "Bitcoin", "BTC", 1),
            ]),
        },
    );
    assert_eq!(state.coin_count(), 1);
    assert_eq!(state.selected_coin().unwrap().id, "btc-bitcoin");
}

#[test]
fn test_open_selected_on_empty_list_does_nothing() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::OpenSelected);
    assert!(result.message.is_none());
}

// ─────────────────────────────────────────────────────────
// Failure and Retry
// ─────────────────────────────────────────────────────────

#[test]
fn test_failed_fetch_then_retry_reenters_loading() {
    let mut state = detail_state("nope", SubRoute::None);
    update(&mut state, Message::Start);
    update(
        &mut state,
        Message::CoinInfoFetched {
            coin_id: "nope".to_string(),
            result: Err("Coin not found: nope".to_string()),
        },
    );
    update(
        &mut state,
        Message::CoinTickersFetched {
            coin_id: "nope".to_string(),
            result: Err("Coin not found: nope".to_string()),
        },
    );
    assert_eq!(
        detail_phase(&state),
        DetailPhase::Failed("Coin not found: nope".to_string())
    );
    assert_eq!(title(&state), "nope");

    let msg = handle_key(&state, InputKey::Char('r')).unwrap();
    let result = update(&mut state, msg);

    assert_eq!(
        result.actions,
        vec![info_action("nope"), tickers_action("nope")]
    );
    assert_eq!(detail_phase(&state), DetailPhase::Loading);
}

#[test]
fn test_refresh_keeps_ready_values_visible() {
    let mut state = detail_state("btc-bitcoin", SubRoute::None);
    update(&mut state, Message::Start);
    settle_btc(&mut state);

    let result = update(&mut state, Message::Refresh);

    assert_eq!(result.actions.len(), 2);
    assert_eq!(detail_phase(&state), DetailPhase::Ready);
}

#[test]
fn test_tick_advances_spinner_only_while_loading() {
    let mut state = detail_state("btc-bitcoin", SubRoute::None);
    update(&mut state, Message::Start);
    update(&mut state, Message::Tick);
    assert_eq!(state.loading.animation_frame, 1);

    settle_btc(&mut state);
    update(&mut state, Message::Tick);
    assert_eq!(state.loading.animation_frame, 1);
}
