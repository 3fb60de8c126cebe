//! Message processing
//!
//! Runs a message through the TEA update function, follows up on chained
//! messages and dispatches every resulting action.

use tokio::sync::mpsc;

use coinview_api::CoinProvider;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<P>(
    state: &mut AppState,
    message: Message,
    provider: &P,
    msg_tx: &mpsc::Sender<Message>,
) where
    P: CoinProvider + Clone + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        for action in result.actions {
            handle_action(action, provider, msg_tx.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
