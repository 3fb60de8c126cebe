//! Headless mode - JSON event output for scripting and E2E testing
//!
//! Instead of drawing the TUI, coinview prints one JSON object per line
//! (NDJSON) for each engine event and exits once the requested view is
//! ready or has failed.
//!
//! # Example Output
//!
//! ```json
//! {"event":"navigated","path":"/btc-bitcoin","carried_name":null,"timestamp":1704700001000}
//! {"event":"query_settled","kind":"info","id":"btc-bitcoin","error":null,"timestamp":1704700001210}
//! {"event":"query_settled","kind":"tickers","id":"btc-bitcoin","error":null,"timestamp":1704700001250}
//! {"event":"detail_ready","coin_id":"btc-bitcoin","title":"Bitcoin","summary":{...},"timestamp":1704700001250}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use coinview_app::{DetailSummary, EngineEvent};
use coinview_core::QueryKind;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The location on screen changed
    Navigated {
        path: String,
        carried_name: Option<String>,
        timestamp: i64,
    },

    /// A lookup settled
    QuerySettled {
        kind: QueryKind,
        id: String,
        error: Option<String>,
        timestamp: i64,
    },

    /// Detail view finished loading
    DetailReady {
        coin_id: String,
        title: String,
        summary: DetailSummary,
        timestamp: i64,
    },

    /// Detail view failed to load
    DetailFailed {
        coin_id: String,
        error: String,
        timestamp: i64,
    },

    /// Coin list finished loading
    CoinsLoaded { count: usize, timestamp: i64 },

    /// Error outside of a view (e.g. the coin list failed)
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Map an engine event; `Shutdown` has no headless counterpart
    pub fn from_engine(event: EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        let mapped = match event {
            EngineEvent::Navigated { path, carried_name } => Self::Navigated {
                path,
                carried_name,
                timestamp,
            },
            EngineEvent::QuerySettled { kind, id, error } => Self::QuerySettled {
                kind,
                id,
                error,
                timestamp,
            },
            EngineEvent::DetailReady {
                coin_id,
                title,
                summary,
            } => Self::DetailReady {
                coin_id,
                title,
                summary,
                timestamp,
            },
            EngineEvent::DetailFailed { coin_id, error } => Self::DetailFailed {
                coin_id,
                error,
                timestamp,
            },
            EngineEvent::CoinsLoaded { count } => Self::CoinsLoaded { count, timestamp },
            EngineEvent::Shutdown => return None,
        };
        Some(mapped)
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
