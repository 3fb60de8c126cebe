//! Coin detail screen
//!
//! Title, then one of three bodies depending on [`DetailPhase`]:
//! - Loading: only the loader
//! - Failed: the error with retry and back hints
//! - Ready: two info panels around the description, the tab control and
//!   the active sub-view
//!
//! Everything is drawn inside a column capped at [`DETAIL_MAX_WIDTH`].
//!
//! [`DETAIL_MAX_WIDTH`]: crate::layout::DETAIL_MAX_WIDTH

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use coinview_app::state::LoadingState;
use coinview_app::{CoinDetailView, DetailPhase, DetailSummary};
use coinview_core::SubRoute;

use super::{ChartView, Loader, PriceView};
use crate::layout::{centered_column, DETAIL_MAX_WIDTH};
use crate::theme::{palette, styles};

/// Bordered panel with a label row and a value row
const PANEL_HEIGHT: u16 = 4;

const TAB_HEIGHT: u16 = 3;

/// Rows kept for the chart or price view when a tab is open
const MIN_SUB_VIEW_HEIGHT: u16 = 8;

/// Marks a description cut short by a small terminal
const ELLIPSIS: &str = "…";

/// Tabs in display order
const TABS: [(SubRoute, &str); 2] = [(SubRoute::Chart, "Chart"), (SubRoute::Price, "Price")];

pub struct CoinDetail<'a> {
    view: &'a CoinDetailView<'a>,
    loading: &'a LoadingState,
}

impl<'a> CoinDetail<'a> {
    pub fn new(view: &'a CoinDetailView<'a>, loading: &'a LoadingState) -> Self {
        Self { view, loading }
    }

    fn render_failed(error: &str, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(error.to_string(), styles::status_red())),
            Line::default(),
            Line::from(vec![
                Span::styled("[", styles::text_muted()),
                Span::styled("r", styles::keybinding()),
                Span::styled("] Retry  ", styles::text_muted()),
                Span::styled("[", styles::text_muted()),
                Span::styled("b", styles::keybinding()),
                Span::styled("] Back", styles::text_muted()),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_ready(&self, summary: &DetailSummary, area: Rect, buf: &mut Buffer) {
        let sub_view_rows = match self.view.sub_route() {
            SubRoute::None => 0,
            SubRoute::Price | SubRoute::Chart => MIN_SUB_VIEW_HEIGHT,
        };
        let spare_rows = area
            .height
            .saturating_sub(2 * PANEL_HEIGHT + TAB_HEIGHT + sub_view_rows);
        let needed_rows = description_height(&summary.description, area.width);
        let description_rows = needed_rows.min(spare_rows);

        let [panel1, description, panel2, tabs, sub_view] = Layout::vertical([
            Constraint::Length(PANEL_HEIGHT),
            Constraint::Length(description_rows),
            Constraint::Length(PANEL_HEIGHT),
            Constraint::Length(TAB_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(area);

        render_panel(
            &[
                ("RANK:", summary.rank.as_str()),
                ("SYMBOL:", summary.symbol.as_str()),
                ("OPEN SOURCE:", summary.open_source.as_str()),
            ],
            panel1,
            buf,
        );

        render_description(
            &summary.description,
            needed_rows > description_rows,
            description,
            buf,
        );

        render_panel(
            &[
                ("TOTAL SUPLY:", summary.total_supply.as_str()),
                ("MAX SUPLY:", summary.max_supply.as_str()),
            ],
            panel2,
            buf,
        );

        render_tabs(self.view.sub_route(), tabs, buf);

        match self.view.sub_route() {
            SubRoute::None => {}
            SubRoute::Price => {
                PriceView::new(self.view.quote(), self.view.quote_currency).render(sub_view, buf)
            }
            SubRoute::Chart => ChartView::new(
                self.view.history.clone(),
                self.view.quote_currency,
                self.loading,
            )
            .render(sub_view, buf),
        }
    }
}

/// Rows the description needs once word-wrapped to `width`
fn description_height(text: &str, width: u16) -> u16 {
    if width == 0 || text.trim().is_empty() {
        return 0;
    }
    let width = width as usize;
    let rows: usize = text.lines().map(|line| wrapped_rows(line, width)).sum();
    rows.min(u16::MAX as usize) as u16
}

/// Greedy word wrap; words wider than the row spill onto the next rows
fn wrapped_rows(line: &str, width: usize) -> usize {
    let mut rows = 1;
    let mut column = 0;
    for word in line.split_whitespace() {
        let word_width = word.width();
        if column > 0 && column + 1 + word_width <= width {
            column += 1 + word_width;
            continue;
        }
        if column > 0 {
            rows += 1;
        }
        let spill = word_width.saturating_sub(1) / width;
        rows += spill;
        column = word_width - spill * width;
    }
    rows
}

/// Draw the description, ending with an ellipsis row when it does not fit
fn render_description(text: &str, truncated: bool, area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }
    let paragraph = Paragraph::new(text)
        .style(styles::text_secondary())
        .wrap(Wrap { trim: true });
    if !truncated {
        paragraph.render(area, buf);
        return;
    }

    let [text_area, ellipsis_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    paragraph.render(text_area, buf);
    Paragraph::new(Span::styled(ELLIPSIS, styles::text_muted())).render(ellipsis_area, buf);
}

/// Draw labelled figures side by side in one bordered panel
fn render_panel(items: &[(&str, &str)], area: Rect, buf: &mut Buffer) {
    let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.height == 0 || inner.width == 0 || items.is_empty() {
        return;
    }

    let columns = Layout::horizontal(vec![Constraint::Fill(1); items.len()]).split(inner);
    for ((label, value), column) in items.iter().zip(columns.iter()) {
        Paragraph::new(vec![
            Line::from(Span::styled(*label, styles::text_muted())),
            Line::from(Span::styled(*value, styles::text_primary())),
        ])
        .alignment(Alignment::Center)
        .render(*column, buf);
    }
}

/// Draw the tab control; only the tab matching `active` gets the accent
fn render_tabs(active: SubRoute, area: Rect, buf: &mut Buffer) {
    let columns = Layout::horizontal([Constraint::Fill(1); TABS.len()]).split(area);
    for ((route, label), column) in TABS.iter().zip(columns.iter()) {
        let is_active = *route == active;
        let block = styles::glass_block(is_active);
        let inner = block.inner(*column);
        block.render(*column, buf);

        let style = if is_active {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        Paragraph::new(Line::from(Span::styled(*label, style)))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

impl Widget for CoinDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let column = centered_column(area, DETAIL_MAX_WIDTH);
        if column.height == 0 || column.width == 0 {
            return;
        }

        let [title_area, _, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(column);

        Paragraph::new(Line::from(Span::styled(
            self.view.title(),
            styles::accent_bold(),
        )))
        .alignment(Alignment::Center)
        .render(title_area, buf);

        match self.view.phase() {
            DetailPhase::Loading => Loader::new(self.loading).render(body, buf),
            DetailPhase::Failed(error) => Self::render_failed(&error, body, buf),
            DetailPhase::Ready => {
                if let Some(summary) = self.view.summary() {
                    self.render_ready(&summary, body, buf);
                }
            }
        }
    }
}
