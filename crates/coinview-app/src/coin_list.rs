//! Coin list selection state
//!
//! The list itself lives in the query store; this only tracks which row is
//! highlighted and how far the table is scrolled.

/// Rows moved by PageUp/PageDown
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoinListState {
    /// Highlighted row
    pub selected_index: usize,
    /// First visible row, maintained by the renderer
    pub scroll_offset: usize,
}

impl CoinListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate selection up (stops at the first row)
    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Navigate selection down (stops at the last row)
    pub fn select_next(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1).min(count - 1);
    }

    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(PAGE_SIZE);
    }

    pub fn page_down(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + PAGE_SIZE).min(count - 1);
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self, count: usize) {
        self.selected_index = count.saturating_sub(1);
    }

    /// Pull the selection back inside a list that shrank
    pub fn clamp(&mut self, count: usize) {
        self.selected_index = self.selected_index.min(count.saturating_sub(1));
    }

    /// Keep the selection visible in a window of `height` rows
    pub fn adjust_scroll(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + height {
            self.scroll_offset = self.selected_index + 1 - height;
        }
    }
}
