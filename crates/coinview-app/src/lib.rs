//! coinview-app - Application state and orchestration for coinview
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the keyed query store behind every remote lookup, the coin
//! detail view model, configuration loading and the Engine shared by the
//! TUI and headless runners.

pub mod actions;
pub mod coin_detail;
pub mod coin_list;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod query;
pub mod signals;
pub mod state;

// Re-export primary types
pub use coin_detail::{CoinDetailView, DetailPhase, DetailSummary, LOADING_TITLE};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use query::{FetchDecision, Query, QueryKey, QueryStore};
pub use state::AppState;
