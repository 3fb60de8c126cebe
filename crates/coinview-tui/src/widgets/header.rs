//! Header bar widget
//!
//! Shows the app name, the current path and the key hints of the view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Which set of key hints to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintSet {
    CoinList,
    CoinDetail,
}

impl HintSet {
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            HintSet::CoinList => &[
                ("↑↓", "Move"),
                ("Enter", "Open"),
                ("r", "Refresh"),
                ("q", "Quit"),
            ],
            HintSet::CoinDetail => &[
                ("c", "Chart"),
                ("p", "Price"),
                ("b", "Back"),
                ("r", "Refresh"),
                ("q", "Quit"),
            ],
        }
    }
}

/// Main header showing app name, path and keybindings
pub struct MainHeader<'a> {
    path: &'a str,
    hints: HintSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(path: &'a str, hints: HintSet) -> Self {
        Self { path, hints }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled("coinview", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.path, styles::text_secondary()),
        ]);
        let left_width = left_line.width() as u16;

        let mut shortcuts = Vec::new();
        for (key, label) in self.hints.hints() {
            shortcuts.push(Span::styled("[", styles::text_muted()));
            shortcuts.push(Span::styled(*key, styles::keybinding()));
            shortcuts.push(Span::styled(format!("] {label}  "), styles::text_muted()));
        }
        let shortcuts_line = Line::from(shortcuts);
        let shortcuts_width = shortcuts_line.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-align hints when they fit beside the path
        if left_width + shortcuts_width + 2 <= inner.width {
            let shortcuts_x = inner.x + inner.width - shortcuts_width;
            buf.set_line(shortcuts_x, inner.y, &shortcuts_line, shortcuts_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_renders_name_and_path() {
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(
            MainHeader::new("/btc-bitcoin/chart", HintSet::CoinDetail),
            term.area(),
        );

        assert!(term.buffer_contains("coinview"));
        assert!(term.buffer_contains("/btc-bitcoin/chart"));
        assert!(term.buffer_contains("[b] Back"));
    }

    #[test]
    fn test_header_list_hints() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new("/", HintSet::CoinList), term.area());

        assert!(term.buffer_contains("[Enter] Open"));
        assert!(!term.buffer_contains("Back"));
    }

    #[test]
    fn test_header_drops_hints_when_narrow() {
        let mut term = TestTerminal::with_size(30, 3);
        term.render_widget(MainHeader::new("/btc-bitcoin", HintSet::CoinDetail), term.area());

        assert!(term.buffer_contains("coinview"));
        assert!(!term.buffer_contains("Quit"));
    }
}
