//! # coinview-core - Core Domain Types
//!
//! Foundation crate for coinview. Provides the coin records, routes,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Coin Records (`coin`)
//! - [`AssetInfo`] - Coin metadata (description, flags, classification)
//! - [`AssetTicker`] / [`TickerQuote`] - Supply figures and quotes per currency
//! - [`CoinSummary`] - Entry of the coin list
//! - [`OhlcvPoint`] - Daily candle for the price chart
//!
//! ### Routing (`route`)
//! - [`Route`], [`SubRoute`] - Parsed paths
//! - [`Location`] - Route plus the display name carried by navigation
//! - [`CoinParams`] - What the detail view resolves from its location
//! - [`History`] - Back stack
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use coinview_core::prelude::*;
//! ```

pub mod coin;
pub mod error;
pub mod logging;
pub mod route;
pub mod types;

/// Prelude for common imports used throughout all coinview crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use coin::{
    format_amount, format_percent, format_price, top_coins, AssetInfo, AssetTicker, CoinSummary,
    OhlcvPoint, TickerQuote,
};
pub use error::{Error, Result, ResultExt};
pub use route::{CoinParams, History, Location, Route, SubRoute};
pub use types::{AppPhase, QueryKind};
