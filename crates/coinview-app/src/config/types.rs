//! Configuration types

use std::time::Duration;

use coinview_api::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_QUOTE_CURRENCY};
use serde::{Deserialize, Serialize};

/// Settings from config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub cache: CacheSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Connection settings for the API client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api.base_url.clone(),
            quote_currency: self.api.quote_currency.clone(),
            timeout: Duration::from_secs(self.api.timeout_secs.max(1)),
        }
    }

    /// How long a settled lookup is reused before it is fetched again
    pub fn stale_after(&self) -> Duration {
        Duration::from_secs(self.cache.stale_secs)
    }
}

/// Remote API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// API root, e.g. `https://api.coinpaprika.com/v1/`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Currency tickers are quoted in
    #[serde(default = "default_quote_currency")]
    pub quote_currency: String,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            quote_currency: default_quote_currency(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_quote_currency() -> String {
    DEFAULT_QUOTE_CURRENCY.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Query cache settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Seconds a settled lookup stays fresh (0 = refetch on every visit)
    #[serde(default = "default_stale_secs")]
    pub stale_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            stale_secs: default_stale_secs(),
        }
    }
}

fn default_stale_secs() -> u64 {
    30
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Number of coins shown in the list
    #[serde(default = "default_coins_limit")]
    pub coins_limit: usize,

    /// Days of history drawn by the chart
    #[serde(default = "default_chart_days")]
    pub chart_days: u32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            coins_limit: default_coins_limit(),
            chart_days: default_chart_days(),
        }
    }
}

fn default_coins_limit() -> usize {
    100
}

fn default_chart_days() -> u32 {
    21
}
