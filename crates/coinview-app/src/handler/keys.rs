//! Key event handlers for the two views

use coinview_core::SubRoute;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on the view on screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Char('r') => return Some(Message::Refresh),
        _ => {}
    }

    if state.coin_params().is_some() {
        handle_key_detail(key)
    } else {
        handle_key_list(key)
    }
}

/// Handle key events on the coin list
fn handle_key_list(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::PageUp => Some(Message::SelectPageUp),
        InputKey::PageDown => Some(Message::SelectPageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),
        InputKey::Enter => Some(Message::OpenSelected),
        _ => None,
    }
}

/// Handle key events on the coin detail view
fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('c') => Some(Message::SelectTab(SubRoute::Chart)),
        InputKey::Char('p') => Some(Message::SelectTab(SubRoute::Price)),
        InputKey::Tab | InputKey::BackTab => Some(Message::NextTab),
        InputKey::Esc | InputKey::Backspace | InputKey::Char('b') => Some(Message::Back),
        _ => None,
    }
}
