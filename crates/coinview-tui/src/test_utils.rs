//! Test utilities for TUI rendering verification
//!
//! Provides helpers for testing widgets and full-screen rendering
//! using ratatui's TestBackend.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

use coinview_api::test_utils::{test_coin, test_info, test_ticker};
use coinview_app::config::Settings;
use coinview_app::{AppState, Message};
use coinview_core::{Location, Route, SubRoute};

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a new test terminal with custom dimensions
    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draws a frame using a custom rendering function (e.g. `render::view`).
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    /// Get the underlying buffer for assertions
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Row index of the first line containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        let buffer = self.buffer();
        (0..buffer.area.height).find(|&y| get_line_content(buffer, y).contains(text))
    }

    /// Cell position of the first occurrence of `text`
    pub fn find_text(&self, text: &str) -> Option<(u16, u16)> {
        let buffer = self.buffer();
        (0..buffer.area.height).find_map(|y| {
            let line = get_line_content(buffer, y);
            let byte_index = line.find(text)?;
            Some((line[..byte_index].chars().count() as u16, y))
        })
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert buffer to string representation
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

/// Get content of a specific line
pub fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// Check a bare buffer for text (for widget tests that skip the terminal)
pub fn buf_contains(buf: &Buffer, text: &str) -> bool {
    buffer_to_string(buf).contains(text)
}

/// State positioned on a coin with nothing settled yet
pub fn detail_state(coin_id: &str, sub_route: SubRoute, carried_name: Option<&str>) -> AppState {
    let route = Route::coin(coin_id, sub_route);
    let location = match carried_name {
        Some(name) => Location::with_name(route, name),
        None => Location::new(route),
    };
    let mut state = AppState::with_settings(Settings::default(), location);
    coinview_app::handler::update(&mut state, Message::Start);
    state
}

/// Settle the metadata and ticker lookups for `btc-bitcoin`
pub fn settle_bitcoin(state: &mut AppState) {
    coinview_app::handler::update(
        state,
        Message::CoinInfoFetched {
            coin_id: "btc-bitcoin".to_string(),
            result: Ok(Box::new(test_info("btc-bitcoin", "Bitcoin", "BTC", true))),
        },
    );
    coinview_app::handler::update(
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

/// State on the coin list with three coins loaded
pub fn list_state() -> AppState {
    let mut state = AppState::new();
    coinview_app::handler::update(&mut state, Message::Start);
    coinview_app::handler::update(
        &mut state,
        Message::CoinsFetched {
            result: Ok(vec![
                test_coin("btc-bitcoin", "Bitcoin", "BTC", 1),
                test_coin("eth-ethereum", "Ethereum", "ETH", 2),
                test_coin("usdt-tether", "Tether", "USDT", 3),
            ]),
        },
    );
    state
}
