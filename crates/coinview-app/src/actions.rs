//! Action handlers: UpdateAction dispatch and background fetch tasks
//!
//! Each fetch runs in its own tokio task that owns a clone of the provider
//! and of the message sender. Results come back as messages keyed by the
//! coin id they were issued for.

use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use coinview_api::CoinProvider;
use coinview_core::Error;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action<P>(action: UpdateAction, provider: &P, msg_tx: mpsc::Sender<Message>)
where
    P: CoinProvider + Clone + Sync + 'static,
{
    let provider = provider.clone();
    debug!("Dispatching {:?}", action);

    match action {
        UpdateAction::FetchCoins => {
            tokio::spawn(async move {
                let result = provider
                    .fetch_coins()
                    .await
                    .map_err(|e| failure_message("coins", e));
                send(&msg_tx, Message::CoinsFetched { result }).await;
            });
        }

        UpdateAction::FetchCoinInfo { coin_id } => {
            tokio::spawn(async move {
                let result = provider
                    .fetch_coin_info(&coin_id)
                    .await
                    .map(Box::new)
                    .map_err(|e| failure_message(&format!("info for {coin_id}"), e));
                send(&msg_tx, Message::CoinInfoFetched { coin_id, result }).await;
            });
        }

        UpdateAction::FetchCoinTickers { coin_id } => {
            tokio::spawn(async move {
                let result = provider
                    .fetch_coin_tickers(&coin_id)
                    .await
                    .map(Box::new)
                    .map_err(|e| failure_message(&format!("ticker for {coin_id}"), e));
                send(&msg_tx, Message::CoinTickersFetched { coin_id, result }).await;
            });
        }

        UpdateAction::FetchCoinHistory { coin_id, days } => {
            tokio::spawn(async move {
                let result = provider
                    .fetch_coin_history(&coin_id, days)
                    .await
                    .map_err(|e| failure_message(&format!("history for {coin_id}"), e));
                send(&msg_tx, Message::CoinHistoryFetched { coin_id, result }).await;
            });
        }
    }
}

/// Log a failed fetch and turn it into the text carried by the result message
fn failure_message(what: &str, e: Error) -> String {
    if e.is_recoverable() {
        warn!("Fetching {} failed: {}", what, e);
    } else {
        error!("Fetching {} failed: {:?}", what, e);
    }
    e.to_string()
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        // Receiver dropped during shutdown
        warn!("Message channel closed, dropping fetch result");
    }
}
