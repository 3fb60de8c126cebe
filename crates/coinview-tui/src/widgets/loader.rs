//! Loading indicator

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use coinview_app::state::LoadingState;
use coinview_app::LOADING_TITLE;

use crate::theme::styles;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner, the loading label and the current flavour message, centered
pub struct Loader<'a> {
    loading: &'a LoadingState,
}

impl<'a> Loader<'a> {
    pub fn new(loading: &'a LoadingState) -> Self {
        Self { loading }
    }

    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[(self.loading.animation_frame % SPINNER_FRAMES.len() as u64) as usize]
    }
}

impl Widget for Loader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let lines = vec![
            Line::from(vec![
                Span::styled(self.spinner(), styles::keybinding()),
                Span::raw(" "),
                Span::styled(LOADING_TITLE, styles::text_primary()),
            ]),
            Line::from(Span::styled(
                self.loading.message.as_str(),
                styles::text_muted(),
            )),
        ];

        // Vertically center the two lines
        let top = area.y + area.height.saturating_sub(2) / 2;
        let inner = Rect {
            y: top,
            height: area.height.saturating_sub(top - area.y),
            ..area
        };
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
