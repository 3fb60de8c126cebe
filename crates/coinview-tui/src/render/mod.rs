//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use coinview_app::AppState;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Only the coin list scroll offset is written back; everything else is
/// read from state.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let path = state.location().route.path();

    match state.coin_params() {
        Some(params) => {
            frame.render_widget(
                widgets::MainHeader::new(&path, widgets::HintSet::CoinDetail),
                areas.header,
            );
            let view = state.coin_detail(&params);
            frame.render_widget(widgets::CoinDetail::new(&view, &state.loading), areas.body);
        }
        None => {
            frame.render_widget(
                widgets::MainHeader::new(&path, widgets::HintSet::CoinList),
                areas.header,
            );
            let coins = state.queries.coins.get("");
            frame.render_stateful_widget(
                widgets::CoinList::new(coins, &state.loading),
                areas.body,
                &mut state.coin_list,
            );
        }
    }
}
