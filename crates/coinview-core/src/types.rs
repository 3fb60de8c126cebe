//! Application-wide state types

use serde::Serialize;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Kind of remote lookup; half of every query key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// Coin list
    Coins,
    /// Coin metadata
    Info,
    /// Coin ticker/market data
    Tickers,
    /// Daily price history
    History,
}

impl QueryKind {
    pub fn label(&self) -> &'static str {
        match self {
            QueryKind::Coins => "coins",
            QueryKind::Info => "info",
            QueryKind::Tickers => "tickers",
            QueryKind::History => "history",
        }
    }
}
