//! Coin list table
//!
//! Ranked coins with the highlighted row kept in view. Scrolling state lives
//! in [`CoinListState`] so it survives across frames.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Row, StatefulWidget, Table, Widget},
};

use coinview_app::coin_list::CoinListState;
use coinview_app::state::LoadingState;
use coinview_app::Query;
use coinview_core::CoinSummary;

use super::Loader;
use crate::theme::{palette, styles};

pub struct CoinList<'a> {
    coins: Query<&'a Vec<CoinSummary>>,
    loading: &'a LoadingState,
}

impl<'a> CoinList<'a> {
    pub fn new(coins: Query<&'a Vec<CoinSummary>>, loading: &'a LoadingState) -> Self {
        Self { coins, loading }
    }

    fn render_rows(coins: &[CoinSummary], area: Rect, buf: &mut Buffer, state: &mut CoinListState) {
        if coins.is_empty() {
            Paragraph::new(Line::from(Span::styled("No coins", styles::text_muted())))
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        // One row goes to the column header
        let visible = area.height.saturating_sub(1) as usize;
        state.clamp(coins.len());
        state.adjust_scroll(visible);

        let rows = coins
            .iter()
            .enumerate()
            .skip(state.scroll_offset)
            .take(visible)
            .map(|(index, coin)| {
                let style = if index == state.selected_index {
                    styles::focused_selected()
                } else {
                    styles::text_primary()
                };
                Row::new(vec![
                    format!("{:>4}", coin.rank),
                    coin.symbol.clone(),
                    coin.name.clone(),
                ])
                .style(style)
            });

        let header = Row::new(vec!["Rank", "Symbol", "Name"]).style(styles::text_muted());
        let table = Table::new(
            rows,
            [
                Constraint::Length(5),
                Constraint::Length(8),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .column_spacing(2);

        Widget::render(table, area, buf);
    }
}

impl StatefulWidget for CoinList<'_> {
    type State = CoinListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = styles::glass_block(true)
            .title(Span::styled(" Coins ", styles::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match self.coins {
            Query::Pending => Loader::new(self.loading).render(inner, buf),
            Query::Failed(error) => {
                let lines = vec![
                    Line::from(Span::styled(
                        format!("Failed to load coins: {error}"),
                        styles::status_red(),
                    )),
                    Line::from(vec![
                        Span::styled("Press ", styles::text_muted()),
                        Span::styled("r", styles::keybinding()),
                        Span::styled(" to retry", styles::text_muted()),
                    ]),
                ];
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .render(inner, buf);
            }
            Query::Ready(coins) => Self::render_rows(coins, inner, buf, state),
        }
    }
}
