//! Keyed query store for remote lookups
//!
//! Every lookup is keyed by `(QueryKind, id)`. Views read their own keys
//! only, so a result that arrives for an identifier the user has already
//! navigated away from is stored under that identifier and never shown in
//! the current view.
//!
//! Reuse policy:
//! - an in-flight lookup is never issued twice;
//! - a settled value younger than the stale window is reused as-is;
//! - an older value stays visible while it is fetched again;
//! - a failed lookup without a value is always fetched again.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use coinview_core::{AssetInfo, AssetTicker, CoinSummary, OhlcvPoint, QueryKind};

/// Status of one lookup as seen by a view
#[derive(Debug, Clone, PartialEq)]
pub enum Query<T> {
    /// Not settled yet (or never requested)
    Pending,
    /// Settled with a value
    Ready(T),
    /// Settled with an error and no value to fall back on
    Failed(String),
}

impl<T> Query<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Query::Pending)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Query::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Query::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Identity of a lookup
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub kind: QueryKind,
    pub id: String,
}

impl QueryKey {
    pub fn coins() -> Self {
        Self {
            kind: QueryKind::Coins,
            id: String::new(),
        }
    }

    pub fn info(coin_id: impl Into<String>) -> Self {
        Self {
            kind: QueryKind::Info,
            id: coin_id.into(),
        }
    }

    pub fn tickers(coin_id: impl Into<String>) -> Self {
        Self {
            kind: QueryKind::Tickers,
            id: coin_id.into(),
        }
    }

    pub fn history(coin_id: impl Into<String>) -> Self {
        Self {
            kind: QueryKind::History,
            id: coin_id.into(),
        }
    }
}

/// Outcome of [`QueryStore::begin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDecision {
    /// Issue a request now
    Fetch,
    /// A request is in flight or the value is fresh
    Reuse,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    value: Option<T>,
    error: Option<String>,
    in_flight: bool,
    updated_at: Option<Instant>,
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Self {
            value: None,
            error: None,
            in_flight: false,
            updated_at: None,
        }
    }
}

/// Lookups of one kind, keyed by id
#[derive(Debug, Clone)]
pub struct QueryMap<T> {
    entries: HashMap<String, Entry<T>>,
}

impl<T> Default for QueryMap<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> QueryMap<T> {
    /// Current status for an id
    pub fn get(&self, id: &str) -> Query<&T> {
        match self.entries.get(id) {
            Some(Entry {
                value: Some(value), ..
            }) => Query::Ready(value),
            Some(Entry {
                error: Some(error),
                in_flight: false,
                ..
            }) => Query::Failed(error.clone()),
            _ => Query::Pending,
        }
    }

    /// Whether a request for this id is outstanding
    pub fn is_in_flight(&self, id: &str) -> bool {
        self.entries.get(id).is_some_and(|e| e.in_flight)
    }

    fn begin(&mut self, id: &str, now: Instant, stale_after: Duration) -> FetchDecision {
        let entry = self.entries.entry(id.to_string()).or_default();

        if entry.in_flight {
            return FetchDecision::Reuse;
        }

        let fresh = entry.value.is_some()
            && entry
                .updated_at
                .is_some_and(|at| now.saturating_duration_since(at) < stale_after);
        if fresh {
            return FetchDecision::Reuse;
        }

        entry.in_flight = true;
        entry.error = None;
        FetchDecision::Fetch
    }

    /// Record the outcome of a request
    ///
    /// A failed refetch keeps the previous value visible.
    pub fn settle(&mut self, id: &str, result: Result<T, String>, now: Instant) {
        let entry = self.entries.entry(id.to_string()).or_default();
        entry.in_flight = false;
        match result {
            Ok(value) => {
                entry.value = Some(value);
                entry.error = None;
                entry.updated_at = Some(now);
            }
            Err(error) => {
                entry.error = Some(error);
            }
        }
    }

    fn invalidate(&mut self, id: &str) {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.updated_at = None;
        }
    }
}

/// All lookups of the application
#[derive(Debug, Clone)]
pub struct QueryStore {
    stale_after: Duration,
    pub coins: QueryMap<Vec<CoinSummary>>,
    pub info: QueryMap<AssetInfo>,
    pub tickers: QueryMap<AssetTicker>,
    pub history: QueryMap<Vec<OhlcvPoint>>,
}

impl QueryStore {
    pub fn new(stale_after: Duration) -> Self {
        Self {
            stale_after,
            coins: QueryMap::default(),
            info: QueryMap::default(),
            tickers: QueryMap::default(),
            history: QueryMap::default(),
        }
    }

    /// Decide whether a lookup must be issued, marking it in flight if so
    pub fn begin(&mut self, key: &QueryKey, now: Instant) -> FetchDecision {
        let stale_after = self.stale_after;
        match key.kind {
            QueryKind::Coins => self.coins.begin(&key.id, now, stale_after),
            QueryKind::Info => self.info.begin(&key.id, now, stale_after),
            QueryKind::Tickers => self.tickers.begin(&key.id, now, stale_after),
            QueryKind::History => self.history.begin(&key.id, now, stale_after),
        }
    }

    /// Force the next [`QueryStore::begin`] for this key to fetch
    pub fn invalidate(&mut self, key: &QueryKey) {
        match key.kind {
            QueryKind::Coins => self.coins.invalidate(&key.id),
            QueryKind::Info => self.info.invalidate(&key.id),
            QueryKind::Tickers => self.tickers.invalidate(&key.id),
            QueryKind::History => self.history.invalidate(&key.id),
        }
    }

    pub fn is_in_flight(&self, key: &QueryKey) -> bool {
        match key.kind {
            QueryKind::Coins => self.coins.is_in_flight(&key.id),
            QueryKind::Info => self.info.is_in_flight(&key.id),
            QueryKind::Tickers => self.tickers.is_in_flight(&key.id),
            QueryKind::History => self.history.is_in_flight(&key.id),
        }
    }
}
