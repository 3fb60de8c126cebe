//! coinview - A terminal viewer for cryptocurrency details
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{info, warn};

use coinview_api::PaprikaClient;
use coinview_app::config;
use coinview_app::Engine;
use coinview_core::{logging, Location, ResultExt, Route, SubRoute};

/// coinview - A terminal viewer for cryptocurrency details
#[derive(Parser, Debug)]
#[command(name = "coinview")]
#[command(about = "A terminal viewer for cryptocurrency details", long_about = None)]
struct Args {
    /// Coin to open directly (e.g. btc-bitcoin); the coin list otherwise
    #[arg(value_name = "COIN_ID")]
    coin_id: Option<String>,

    /// Tab to open on the coin
    #[arg(long, value_enum)]
    tab: Option<Tab>,

    /// Config file (defaults to <config_dir>/coinview/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Tab {
    Price,
    Chart,
}

impl From<Tab> for SubRoute {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Price => SubRoute::Price,
            Tab::Chart => SubRoute::Chart,
        }
    }
}

/// Location to start on: a bookmarked coin carries no name
fn initial_location(coin_id: Option<String>, tab: Option<Tab>) -> Location {
    match coin_id {
        Some(coin_id) => {
            let sub_route = tab.map(SubRoute::from).unwrap_or_default();
            Location::new(Route::coin(coin_id, sub_route))
        }
        None => {
            if tab.is_some() {
                warn!("--tab ignored without a COIN_ID");
            }
            Location::new(Route::Coins)
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;

    let config_path = args.config.unwrap_or_else(config::default_config_path);
    let settings = config::load_or_init_settings(&config_path);
    info!("Using config {}", config_path.display());

    let client =
        PaprikaClient::new(&settings.client_config()).context("Failed to build API client")?;
    let initial = initial_location(args.coin_id, args.tab);
    let engine = Engine::new(settings, initial, client);

    if args.headless {
        coinview::run_headless(engine).await?;
    } else {
        coinview::run(engine).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_id_opens_detail_without_name() {
        let location = initial_location(Some("btc-bitcoin".to_string()), Some(Tab::Chart));
        assert_eq!(location.route, Route::coin("btc-bitcoin", SubRoute::Chart));
        assert!(location.carried_name.is_none());
    }

    #[test]
    fn test_no_coin_id_opens_list() {
        let location = initial_location(None, Some(Tab::Price));
        assert_eq!(location.route, Route::Coins);
    }

    #[test]
    fn test_args_parse_tab() {
        let args = Args::parse_from(["coinview", "eth-ethereum", "--tab", "price", "--headless"]);
        assert_eq!(args.coin_id.as_deref(), Some("eth-ethereum"));
        assert!(matches!(args.tab, Some(Tab::Price)));
        assert!(args.headless);
    }
}
