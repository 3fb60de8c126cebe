//! Navigation handlers
//!
//! Every location change goes through [`mount`], which compares the new
//! location with the previous one and begins the lookups the new view reads.
//! The detail view remounts (and fetches) only when the coin id changes; a
//! tab switch on the same coin only mounts the chart's own lookup.

use std::time::Instant;

use coinview_core::prelude::*;
use coinview_core::{Location, QueryKind, Route, SubRoute};

use crate::message::Message;
use crate::query::{FetchDecision, QueryKey};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Mount the initial location
pub fn handle_start(state: &mut AppState) -> UpdateResult {
    UpdateResult::actions(mount(state, None))
}

/// Push a location onto the history
pub fn handle_navigate(state: &mut AppState, location: Location) -> UpdateResult {
    let previous = state.location().clone();
    if previous.route == location.route && location.carried_name.is_none() {
        return UpdateResult::none();
    }

    debug!("Navigate {} -> {}", previous.route, location.route);
    state.history.push(location);
    UpdateResult::actions(mount(state, Some(&previous)))
}

/// Pop to the previous location
///
/// At the first entry of a direct-entry detail view, back leads to the coin
/// list instead of doing nothing.
pub fn handle_back(state: &mut AppState) -> UpdateResult {
    let previous = state.location().clone();

    if !state.history.back() {
        if previous.route == Route::Coins {
            return UpdateResult::none();
        }
        state.history.replace(Location::new(Route::Coins));
    }

    debug!("Back {} -> {}", previous.route, state.location().route);
    UpdateResult::actions(mount(state, Some(&previous)))
}

/// Switch the detail sub-view in place
///
/// Tab links carry no display name, and switching does not grow the history.
pub fn handle_select_tab(state: &mut AppState, sub_route: SubRoute) -> UpdateResult {
    let previous = state.location().clone();
    let Route::Coin {
        coin_id,
        sub_route: current,
    } = &previous.route
    else {
        return UpdateResult::none();
    };

    if *current == sub_route {
        return UpdateResult::none();
    }

    state
        .history
        .replace(Location::new(Route::coin(coin_id.clone(), sub_route)));
    UpdateResult::actions(mount(state, Some(&previous)))
}

/// Cycle the detail tabs: none -> chart -> price -> chart
pub fn handle_next_tab(state: &mut AppState) -> UpdateResult {
    let next = match state.coin_params() {
        Some(params) => match params.sub_route {
            SubRoute::None | SubRoute::Price => SubRoute::Chart,
            SubRoute::Chart => SubRoute::Price,
        },
        None => return UpdateResult::none(),
    };
    handle_select_tab(state, next)
}

/// Open the coin under the list cursor, carrying its name
pub fn handle_open_selected(state: &mut AppState) -> UpdateResult {
    match state.selected_coin() {
        Some(coin) => {
            let location =
                Location::with_name(Route::coin(coin.id.clone(), SubRoute::None), &coin.name);
            UpdateResult::message(Message::Navigate(location))
        }
        None => UpdateResult::none(),
    }
}

/// Refetch what the current view reads (also the retry of a failed view)
pub fn handle_refresh(state: &mut AppState) -> UpdateResult {
    let keys = view_keys(state);
    for key in &keys {
        state.queries.invalidate(key);
    }
    info!("Refreshing {}", state.location().route);
    UpdateResult::actions(begin_all(state, &keys))
}

/// Begin the lookups of the current location that are new relative to
/// `previous`
pub(crate) fn mount(state: &mut AppState, previous: Option<&Location>) -> Vec<UpdateAction> {
    let current = state.location().clone();
    let previous_coin = previous.and_then(|p| p.route.coin_id());

    let keys = match &current.route {
        Route::Coins => vec![QueryKey::coins()],
        Route::Coin { coin_id, sub_route } => {
            let mut keys = Vec::new();
            if previous_coin != Some(coin_id.as_str()) {
                keys.push(QueryKey::info(coin_id.as_str()));
                keys.push(QueryKey::tickers(coin_id.as_str()));
            }
            if *sub_route == SubRoute::Chart {
                keys.push(QueryKey::history(coin_id.as_str()));
            }
            keys
        }
    };

    begin_all(state, &keys)
}

/// Keys read by the view on screen
fn view_keys(state: &AppState) -> Vec<QueryKey> {
    match &state.location().route {
        Route::Coins => vec![QueryKey::coins()],
        Route::Coin { coin_id, sub_route } => {
            let mut keys = vec![
                QueryKey::info(coin_id.as_str()),
                QueryKey::tickers(coin_id.as_str()),
            ];
            if *sub_route == SubRoute::Chart {
                keys.push(QueryKey::history(coin_id.as_str()));
            }
            keys
        }
    }
}

fn begin_all(state: &mut AppState, keys: &[QueryKey]) -> Vec<UpdateAction> {
    let now = Instant::now();
    let days = state.settings.ui.chart_days;

    keys.iter()
        .filter(|key| state.queries.begin(key, now) == FetchDecision::Fetch)
        .map(|key| action_for(key, days))
        .collect()
}

fn action_for(key: &QueryKey, days: u32) -> UpdateAction {
    match key.kind {
        QueryKind::Coins => UpdateAction::FetchCoins,
        QueryKind::Info => UpdateAction::FetchCoinInfo {
            coin_id: key.id.clone(),
        },
        QueryKind::Tickers => UpdateAction::FetchCoinTickers {
            coin_id: key.id.clone(),
        },
        QueryKind::History => UpdateAction::FetchCoinHistory {
            coin_id: key.id.clone(),
            days,
        },
    }
}
