//! Price sub-view: current quote and change per time window

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use coinview_core::{format_percent, format_price, TickerQuote};

use crate::theme::styles;

const LABEL_WIDTH: usize = 14;

pub struct PriceView<'a> {
    quote: Option<&'a TickerQuote>,
    currency: &'a str,
}

impl<'a> PriceView<'a> {
    pub fn new(quote: Option<&'a TickerQuote>, currency: &'a str) -> Self {
        Self { quote, currency }
    }

    fn figure_line(label: &str, value: String, change: Option<f64>) -> Line<'static> {
        let mut spans = vec![
            Span::styled(format!("{label:<LABEL_WIDTH$}"), styles::text_secondary()),
            Span::styled(value, styles::text_primary()),
        ];
        if let Some(change) = change {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(format_percent(change), styles::change(change)));
        }
        Line::from(spans)
    }

    fn figures(&self, quote: &TickerQuote) -> Vec<Line<'static>> {
        let mut lines = vec![
            Self::figure_line("Price", format_price(quote.price, self.currency), None),
            Self::figure_line(
                "Volume 24h",
                format_price(quote.volume_24h, self.currency),
                Some(quote.volume_24h_change_24h),
            ),
            Self::figure_line(
                "Market cap",
                format_price(quote.market_cap, self.currency),
                Some(quote.market_cap_change_24h),
            ),
        ];

        if let Some(ath) = quote.ath_price {
            let date = quote
                .ath_date
                .map(|d| format!(" on {}", d.format("%Y-%m-%d")))
                .unwrap_or_default();
            lines.push(Self::figure_line(
                "All-time high",
                format!("{}{date}", format_price(ath, self.currency)),
                quote.percent_from_price_ath,
            ));
        }
        lines
    }

    fn changes(quote: &TickerQuote) -> Vec<Line<'static>> {
        quote
            .percent_changes()
            .into_iter()
            .map(|(window, value)| {
                Line::from(vec![
                    Span::styled(format!("{window:>4}  "), styles::text_muted()),
                    Span::styled(format_percent(value), styles::change(value)),
                ])
            })
            .collect()
    }
}

impl Widget for PriceView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let Some(quote) = self.quote else {
            Paragraph::new(Line::from(Span::styled(
                format!("No {} quote available", self.currency),
                styles::text_muted(),
            )))
            .render(area, buf);
            return;
        };

        let [figures_area, changes_area] =
            Layout::horizontal([Constraint::Min(30), Constraint::Length(16)]).areas(area);

        Paragraph::new(self.figures(quote)).render(figures_area, buf);
        Paragraph::new(Self::changes(quote)).render(changes_area, buf);
    }
}
