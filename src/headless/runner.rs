//! Headless mode runner - main event loop without TUI
//!
//! Drives the engine until the view it started on is ready or has failed,
//! forwarding every engine event as a [`HeadlessEvent`].

use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{info, warn};

use coinview_api::CoinProvider;
use coinview_app::{Engine, EngineEvent};
use coinview_core::prelude::*;
use coinview_core::{Location, QueryKind, Route};

use super::HeadlessEvent;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless<P>(engine: Engine<P>) -> Result<()>
where
    P: CoinProvider + Clone + Sync + 'static,
{
    info!("coinview starting in HEADLESS mode");
    let result = drive(engine, |event| event.emit()).await;
    info!("coinview headless mode exiting");
    result
}

/// Event loop behind [`run_headless`], with the output sink injected
pub async fn drive<P, F>(mut engine: Engine<P>, mut sink: F) -> Result<()>
where
    P: CoinProvider + Clone + Sync + 'static,
    F: FnMut(HeadlessEvent),
{
    let target = engine.state.location().clone();
    let mut events = engine.subscribe();

    engine.start();

    let result = loop {
        if forward_events(&mut events, &target, &mut sink) {
            break Ok(());
        }

        if engine.should_quit() {
            info!("Quit requested");
            break Ok(());
        }

        match engine.recv_message().await {
            Some(msg) => engine.process_message(msg),
            None => {
                let err = Error::ChannelClosed;
                sink(HeadlessEvent::error(err.to_string(), err.is_fatal()));
                break Err(err);
            }
        }
    };

    engine.shutdown();
    result
}

/// Forward pending engine events; `true` once `target` has settled
fn forward_events<F>(
    events: &mut broadcast::Receiver<EngineEvent>,
    target: &Location,
    sink: &mut F,
) -> bool
where
    F: FnMut(HeadlessEvent),
{
    let mut finished = false;
    loop {
        let event = match events.try_recv() {
            Ok(event) => event,
            Err(TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} engine events", skipped);
                continue;
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        };

        if let EngineEvent::QuerySettled {
            kind: QueryKind::Coins,
            error: Some(error),
            ..
        } = &event
        {
            if target.route == Route::Coins {
                sink(HeadlessEvent::error(
                    format!("Failed to load coins: {error}"),
                    true,
                ));
                finished = true;
            }
        }

        finished |= settles_target(&event, target);

        if let Some(headless) = HeadlessEvent::from_engine(event) {
            sink(headless);
        }
    }
    finished
}

fn settles_target(event: &EngineEvent, target: &Location) -> bool {
    match (event, &target.route) {
        (EngineEvent::DetailReady { coin_id, .. }, Route::Coin { coin_id: target_id, .. })
        | (EngineEvent::DetailFailed { coin_id, .. }, Route::Coin { coin_id: target_id, .. }) => {
            coin_id == target_id
        }
        (EngineEvent::CoinsLoaded { .. }, Route::Coins) => true,
        _ => false,
    }
}
