//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `navigation`: Location changes and the lookups they mount
//! - `fetch`: Settling lookup results into the query store
//! - `keys`: Key event handlers per view

pub(crate) mod fetch;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch the coin list
    FetchCoins,

    /// Fetch metadata for one coin
    FetchCoinInfo { coin_id: String },

    /// Fetch ticker/market data for one coin
    FetchCoinTickers { coin_id: String },

    /// Fetch daily price history for one coin
    FetchCoinHistory { coin_id: String, days: u32 },
}

impl UpdateAction {
    /// Coin id the action is keyed by, if any
    pub fn coin_id(&self) -> Option<&str> {
        match self {
            UpdateAction::FetchCoins => None,
            UpdateAction::FetchCoinInfo { coin_id }
            | UpdateAction::FetchCoinTickers { coin_id }
            | UpdateAction::FetchCoinHistory { coin_id, .. } => Some(coin_id),
        }
    }
}

/// Result of processing a message
///
/// A single message may mount several lookups at once (the detail view
/// issues its metadata and ticker fetches together), so actions are a list.
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Actions for the event loop to perform, in order
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            actions: Vec::new(),
        }
    }

    pub fn actions(actions: Vec<UpdateAction>) -> Self {
        Self {
            message: None,
            actions,
        }
    }
}
