//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the unified message channel and the data
//! provider. Both runners feed it messages and read state back; external
//! consumers can subscribe to [`EngineEvent`]s.

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use coinview_api::CoinProvider;
use coinview_core::{Location, QueryKind};

use crate::coin_detail::DetailPhase;
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::query::Query;
use crate::signals;
use crate::state::AppState;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit the matching EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    location: Location,
    detail_phase: Option<DetailPhase>,
    coins_loaded: Option<usize>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        let detail_phase = state
            .coin_params()
            .map(|params| state.coin_detail(&params).phase());

        let coins_loaded = match (state.coin_params(), state.coins()) {
            (None, Query::Ready(coins)) => Some(coins.len()),
            _ => None,
        };

        Self {
            location: state.location().clone(),
            detail_phase,
            coins_loaded,
        }
    }
}

/// Orchestration engine for coinview.
pub struct Engine<P> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, fetch tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Data source shared by every fetch task
    provider: P,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl<P> Engine<P>
where
    P: CoinProvider + Clone + Sync + 'static,
{
    /// Create a new Engine positioned at `initial`.
    ///
    /// Must be called inside a tokio runtime: the signal handler is spawned
    /// here. Nothing is fetched until [`Engine::start`].
    pub fn new(settings: Settings, initial: Location, provider: P) -> Self {
        let state = AppState::with_settings(settings, initial);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            provider,
            event_tx,
        }
    }

    /// Mount the initial location, issuing its fetches
    pub fn start(&mut self) {
        info!("Starting at {}", self.state.location().route);
        let initial = self.state.location().clone();
        self.emit(EngineEvent::Navigated {
            path: initial.route.path(),
            carried_name: initial.carried_name,
        });
        self.process_message(Message::Start);
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        let settled = settled_query(&msg);
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.provider, &self.msg_tx);

        let post = StateSnapshot::capture(&self.state);
        if let Some((kind, id, error)) = settled {
            self.emit(EngineEvent::QuerySettled { kind, id, error });
        }
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message. The engine holds a sender, so this only
    /// returns `None` if every clone was dropped.
    pub async fn recv_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Announce shutdown to subscribers
    pub fn shutdown(&mut self) {
        info!("Engine shutting down");
        self.emit(EngineEvent::Shutdown);
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        let moved = pre.location != post.location;

        if moved {
            self.emit(EngineEvent::Navigated {
                path: post.location.route.path(),
                carried_name: post.location.carried_name.clone(),
            });
        }

        if moved || pre.detail_phase != post.detail_phase {
            if let Some(params) = self.state.coin_params() {
                let view = self.state.coin_detail(&params);
                match &post.detail_phase {
                    Some(DetailPhase::Ready) => {
                        if let Some(summary) = view.summary() {
                            self.emit(EngineEvent::DetailReady {
                                coin_id: params.coin_id.clone(),
                                title: view.title(),
                                summary,
                            });
                        }
                    }
                    Some(DetailPhase::Failed(error)) => {
                        self.emit(EngineEvent::DetailFailed {
                            coin_id: params.coin_id.clone(),
                            error: error.clone(),
                        });
                    }
                    _ => {}
                }
            }
        }

        if let Some(count) = post.coins_loaded {
            if moved || pre.coins_loaded != post.coins_loaded {
                self.emit(EngineEvent::CoinsLoaded { count });
            }
        }
    }

    fn emit(&self, event: EngineEvent) {
        debug!("Engine event: {}", event.event_type());
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}

/// Key and outcome of a fetch-result message
fn settled_query(msg: &Message) -> Option<(QueryKind, String, Option<String>)> {
    fn err<T>(result: &Result<T, String>) -> Option<String> {
        result.as_ref().err().cloned()
    }

    match msg {
        Message::CoinsFetched { result } => Some((QueryKind::Coins, String::new(), err(result))),
        Message::CoinInfoFetched { coin_id, result } => {
            Some((QueryKind::Info, coin_id.clone(), err(result)))
        }
        Message::CoinTickersFetched { coin_id, result } => {
            Some((QueryKind::Tickers, coin_id.clone(), err(result)))
        }
        Message::CoinHistoryFetched { coin_id, result } => {
            Some((QueryKind::History, coin_id.clone(), err(result)))
        }
        _ => None,
    }
}
