//! Message types for the application (TEA pattern)

use coinview_core::{AssetInfo, AssetTicker, CoinSummary, Location, OhlcvPoint, SubRoute};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Mount the initial location
    Start,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Push a new location
    Navigate(Location),
    /// Pop back to the previous location
    Back,
    /// Switch the detail sub-view (replaces the current location)
    SelectTab(SubRoute),
    /// Cycle between the detail tabs
    NextTab,
    /// Refetch the lookups of the current view
    Refresh,

    // ─────────────────────────────────────────────────────────
    // Coin List Messages
    // ─────────────────────────────────────────────────────────
    SelectPrevious,
    SelectNext,
    SelectPageUp,
    SelectPageDown,
    SelectFirst,
    SelectLast,
    /// Open the detail view of the highlighted coin
    OpenSelected,

    // ─────────────────────────────────────────────────────────
    // Fetch Results
    // ─────────────────────────────────────────────────────────
    /// Coin list lookup settled
    CoinsFetched {
        result: Result<Vec<CoinSummary>, String>,
    },
    /// Coin metadata lookup settled
    CoinInfoFetched {
        coin_id: String,
        result: Result<Box<AssetInfo>, String>,
    },
    /// Coin ticker lookup settled
    CoinTickersFetched {
        coin_id: String,
        result: Result<Box<AssetTicker>, String>,
    },
    /// Price history lookup settled
    CoinHistoryFetched {
        coin_id: String,
        result: Result<Vec<OhlcvPoint>, String>,
    },
}
