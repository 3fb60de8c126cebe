//! Chart sub-view: closing prices over the configured window

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph, Widget},
};

use coinview_app::state::LoadingState;
use coinview_app::Query;
use coinview_core::{format_price, OhlcvPoint};

use super::Loader;
use crate::theme::{palette, styles};

pub struct ChartView<'a> {
    history: Query<&'a Vec<OhlcvPoint>>,
    currency: &'a str,
    loading: &'a LoadingState,
}

impl<'a> ChartView<'a> {
    pub fn new(
        history: Query<&'a Vec<OhlcvPoint>>,
        currency: &'a str,
        loading: &'a LoadingState,
    ) -> Self {
        Self {
            history,
            currency,
            loading,
        }
    }
}

/// Lowest and highest close, widened so a flat series still has height
fn y_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    let (min, max) = points.iter().fold((f64::MAX, f64::MIN), |(lo, hi), &(_, y)| {
        (lo.min(y), hi.max(y))
    });
    if min > max {
        return [0.0, 1.0];
    }
    let pad = ((max - min) * 0.05).max(max.abs() * 0.001).max(f64::EPSILON);
    [min - pad, max + pad]
}

fn render_message(area: Rect, buf: &mut Buffer, line: Line<'_>) {
    let top = area.y + area.height / 2;
    let row = Rect {
        y: top,
        height: area.height.saturating_sub(top - area.y),
        ..area
    };
    Paragraph::new(line)
        .alignment(Alignment::Center)
        .render(row, buf);
}

impl Widget for ChartView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let candles = match self.history {
            Query::Pending => {
                Loader::new(self.loading).render(area, buf);
                return;
            }
            Query::Failed(error) => {
                render_message(
                    area,
                    buf,
                    Line::from(Span::styled(
                        format!("Failed to load price history: {error}"),
                        styles::status_red(),
                    )),
                );
                return;
            }
            Query::Ready(candles) => candles,
        };

        let (Some(first), Some(last)) = (candles.first(), candles.last()) else {
            render_message(
                area,
                buf,
                Line::from(Span::styled("No price history", styles::text_muted())),
            );
            return;
        };

        let points: Vec<(f64, f64)> = candles
            .iter()
            .enumerate()
            .map(|(i, candle)| (i as f64, candle.close))
            .collect();
        let [y_min, y_max] = y_bounds(&points);
        let x_max = (points.len().saturating_sub(1) as f64).max(1.0);

        let dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette::CHART_LINE))
            .data(&points);

        let axis_style = Style::default().fg(palette::CHART_AXIS);
        let x_axis = Axis::default()
            .style(axis_style)
            .bounds([0.0, x_max])
            .labels([
                Span::styled(first.time_open.format("%b %d").to_string(), styles::text_muted()),
                Span::styled(last.time_open.format("%b %d").to_string(), styles::text_muted()),
            ]);
        let y_axis = Axis::default()
            .style(axis_style)
            .bounds([y_min, y_max])
            .labels([
                Span::styled(format_price(y_min, self.currency), styles::text_muted()),
                Span::styled(format_price(y_max, self.currency), styles::text_muted()),
            ]);

        Chart::new(vec![dataset])
            .x_axis(x_axis)
            .y_axis(y_axis)
            .render(area, buf);
    }
}
