//! Routes, locations and navigation history
//!
//! Paths follow the web client's shape:
//!
//! | path               | route                                   |
//! |--------------------|-----------------------------------------|
//! | `/`                | [`Route::Coins`]                        |
//! | `/:coinId`         | [`Route::Coin`] with [`SubRoute::None`] |
//! | `/:coinId/price`   | [`Route::Coin`] with [`SubRoute::Price`]|
//! | `/:coinId/chart`   | [`Route::Coin`] with [`SubRoute::Chart`]|
//!
//! A second segment that is not `price` or `chart` still selects the coin
//! (the parent route matches non-exactly) but no sub-route.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Sub-view shown below the detail tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubRoute {
    /// Bare coin path, tabs shown without a body
    #[default]
    None,
    Price,
    Chart,
}

impl SubRoute {
    /// Path suffix for this sub-route, if any
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            SubRoute::None => None,
            SubRoute::Price => Some("price"),
            SubRoute::Chart => Some("chart"),
        }
    }

    /// Exact match against a path segment
    pub fn from_segment(segment: &str) -> Self {
        match segment {
            "price" => SubRoute::Price,
            "chart" => SubRoute::Chart,
            _ => SubRoute::None,
        }
    }
}

/// Parsed application route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Coin list (`/`)
    Coins,
    /// Coin detail (`/:coinId[/price|/chart]`)
    Coin { coin_id: String, sub_route: SubRoute },
}

impl Route {
    pub fn coin(coin_id: impl Into<String>, sub_route: SubRoute) -> Self {
        Route::Coin {
            coin_id: coin_id.into(),
            sub_route,
        }
    }

    /// Parse an absolute path into a route
    pub fn parse(path: &str) -> Result<Self> {
        let rest = path
            .strip_prefix('/')
            .ok_or_else(|| Error::invalid_route(path))?;

        let mut segments = rest.split('/').filter(|s| !s.is_empty());
        match segments.next() {
            None => Ok(Route::Coins),
            Some(coin_id) => {
                let sub_route = segments
                    .next()
                    .map(SubRoute::from_segment)
                    .unwrap_or_default();
                Ok(Route::coin(coin_id, sub_route))
            }
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Coins => "/".to_string(),
            Route::Coin { coin_id, sub_route } => match sub_route.suffix() {
                Some(suffix) => format!("/{coin_id}/{suffix}"),
                None => format!("/{coin_id}"),
            },
        }
    }

    /// Coin identifier if this is a detail route
    pub fn coin_id(&self) -> Option<&str> {
        match self {
            Route::Coins => None,
            Route::Coin { coin_id, .. } => Some(coin_id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// A navigation target plus the state handed over by the navigating view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub route: Route,
    /// Display name known to the previous view. Absent on direct entry.
    pub carried_name: Option<String>,
}

impl Location {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            carried_name: None,
        }
    }

    pub fn with_name(route: Route, name: impl Into<String>) -> Self {
        Self {
            route,
            carried_name: Some(name.into()),
        }
    }

    /// Resolve detail-view parameters; `None` for non-detail routes
    pub fn coin_params(&self) -> Option<CoinParams> {
        match &self.route {
            Route::Coins => None,
            Route::Coin { coin_id, sub_route } => Some(CoinParams {
                coin_id: coin_id.clone(),
                carried_name: self.carried_name.clone(),
                sub_route: *sub_route,
            }),
        }
    }
}

/// Parameters the detail view derives from its location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinParams {
    pub coin_id: String,
    pub carried_name: Option<String>,
    pub sub_route: SubRoute,
}

impl CoinParams {
    pub fn price_active(&self) -> bool {
        self.sub_route == SubRoute::Price
    }

    pub fn chart_active(&self) -> bool {
        self.sub_route == SubRoute::Chart
    }
}

/// Back stack of visited locations
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    pub fn current(&self) -> &Location {
        // Invariant: never empty, `back` keeps the first entry.
        &self.entries[self.entries.len() - 1]
    }

    pub fn push(&mut self, location: Location) {
        self.entries.push(location);
    }

    /// Replace the current entry (tab switches do not grow the stack)
    pub fn replace(&mut self, location: Location) {
        if let Some(last) = self.entries.last_mut() {
            *last = location;
        }
    }

    /// Go back one entry. Returns `false` at the first entry.
    pub fn back(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Number of entries, the current one included
    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}
