//! HTTP client for the CoinPaprika REST API
//!
//! Endpoints used:
//!
//! | lookup   | endpoint                                                   |
//! |----------|------------------------------------------------------------|
//! | coins    | `GET coins`                                                |
//! | info     | `GET coins/{id}`                                           |
//! | tickers  | `GET tickers/{id}?quotes={Q}`                              |
//! | history  | `GET coins/{id}/ohlcv/historical?start={date}&end={date}`  |

use std::time::Duration;

use chrono::{NaiveDate, Utc};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use coinview_core::prelude::*;
use coinview_core::{AssetInfo, AssetTicker, CoinSummary, OhlcvPoint};

use crate::provider::CoinProvider;

/// Default public API root
pub const DEFAULT_BASE_URL: &str = "https://api.coinpaprika.com/v1/";

/// Default quote currency for tickers
pub const DEFAULT_QUOTE_CURRENCY: &str = "USD";

/// Connection settings for [`PaprikaClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub quote_currency: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            quote_currency: DEFAULT_QUOTE_CURRENCY.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// CoinPaprika client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct PaprikaClient {
    http: reqwest::Client,
    base_url: Url,
    quote_currency: String,
}

impl PaprikaClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("coinview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::api(format!("failed to build HTTP client: {e}")))?;

        info!("API client ready: {}", base_url);

        Ok(Self {
            http,
            base_url,
            quote_currency: config.quote_currency.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn quote_currency(&self) -> &str {
        &self.quote_currency
    }

    /// GET a URL and decode its JSON body
    ///
    /// A 404 on a coin-scoped endpoint becomes [`Error::NotFound`].
    async fn get_json<T: DeserializeOwned>(&self, url: Url, coin_id: Option<&str>) -> Result<T> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::api(format!("{url}: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = coin_id {
                return Err(Error::not_found(id));
            }
        }
        if !status.is_success() {
            warn!("GET {} returned {}", url, status);
            return Err(Error::api_status(status.as_u16(), url.as_str()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::api(format!("{url}: failed to read body: {e}")))?;

        Ok(serde_json::from_str(&body)?)
    }
}

impl CoinProvider for PaprikaClient {
    async fn fetch_coins(&self) -> Result<Vec<CoinSummary>> {
        let url = coins_url(&self.base_url)?;
        self.get_json(url, None).await
    }

    async fn fetch_coin_info(&self, coin_id: &str) -> Result<AssetInfo> {
        let url = coin_info_url(&self.base_url, coin_id)?;
        self.get_json(url, Some(coin_id)).await
    }

    async fn fetch_coin_tickers(&self, coin_id: &str) -> Result<AssetTicker> {
        let url = coin_tickers_url(&self.base_url, coin_id, &self.quote_currency)?;
        self.get_json(url, Some(coin_id)).await
    }

    async fn fetch_coin_history(&self, coin_id: &str, days: u32) -> Result<Vec<OhlcvPoint>> {
        let end = Utc::now().date_naive();
        let start = end - chrono::Duration::days(i64::from(days.max(1)));
        let url = coin_history_url(&self.base_url, coin_id, start, end)?;
        self.get_json(url, Some(coin_id)).await
    }
}

// ─────────────────────────────────────────────────────────────────
// URL Builders
// ─────────────────────────────────────────────────────────────────

/// Parse the configured API root, making sure it ends with a slash
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&normalized)
        .map_err(|e| Error::config_invalid(format!("api.base_url {raw:?}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(Error::config_invalid(format!(
            "api.base_url {raw:?} cannot carry a path"
        )));
    }
    Ok(url)
}

/// Append path segments to the API root (segments are percent-encoded)
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| Error::config_invalid(format!("api.base_url {base} cannot carry a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub fn coins_url(base: &Url) -> Result<Url> {
    endpoint(base, &["coins"])
}

pub fn coin_info_url(base: &Url, coin_id: &str) -> Result<Url> {
    endpoint(base, &["coins", coin_id])
}

pub fn coin_tickers_url(base: &Url, coin_id: &str, quote_currency: &str) -> Result<Url> {
    let mut url = endpoint(base, &["tickers", coin_id])?;
    url.query_pairs_mut().append_pair("quotes", quote_currency);
    Ok(url)
}

pub fn coin_history_url(base: &Url, coin_id: &str, start: NaiveDate, end: NaiveDate) -> Result<Url> {
    let mut url = endpoint(base, &["coins", coin_id, "ohlcv", "historical"])?;
    url.query_pairs_mut()
        .append_pair("start", &start.format("%Y-%m-%d").to_string())
        .append_pair("end", &end.format("%Y-%m-%d").to_string());
    Ok(url)
}
