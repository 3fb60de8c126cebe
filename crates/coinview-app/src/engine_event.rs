//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use coinview_core::QueryKind;

use crate::coin_detail::DetailSummary;

/// Domain events emitted by the Engine
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The location on screen changed
    Navigated {
        path: String,
        carried_name: Option<String>,
    },

    /// A lookup settled (successfully or not)
    QuerySettled {
        kind: QueryKind,
        id: String,
        error: Option<String>,
    },

    /// The detail view on screen became ready
    DetailReady {
        coin_id: String,
        title: String,
        summary: DetailSummary,
    },

    /// The detail view on screen failed
    DetailFailed { coin_id: String, error: String },

    /// The coin list on screen finished loading
    CoinsLoaded { count: usize },

    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Short name for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::Navigated { .. } => "navigated",
            EngineEvent::QuerySettled { .. } => "query_settled",
            EngineEvent::DetailReady { .. } => "detail_ready",
            EngineEvent::DetailFailed { .. } => "detail_failed",
            EngineEvent::CoinsLoaded { .. } => "coins_loaded",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
