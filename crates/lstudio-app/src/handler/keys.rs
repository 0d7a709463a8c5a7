//! Key event handlers for each focused panel

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on the focused panel
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Bindings that work regardless of focus
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrevious),
        InputKey::PageUp => return Some(Message::PageUp),
        InputKey::PageDown => return Some(Message::PageDown),
        _ => {}
    }

    match state.focus {
        Focus::Title => handle_key_title(state, key),
        Focus::Strategies => handle_key_strategies(state, key),
        Focus::Content => handle_key_content(key),
    }
}

/// Title input: printable keys edit the text
fn handle_key_title(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => {
            let mut text = state.title.clone();
            text.push(c);
            Some(Message::TitleInput { text })
        }

        InputKey::Backspace => {
            let mut text = state.title.clone();
            text.pop()?;
            Some(Message::TitleInput { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::TitleInput {
            text: String::new(),
        }),

        InputKey::Enter | InputKey::Down | InputKey::Esc => {
            Some(Message::Focus(Focus::Strategies))
        }

        _ => None,
    }
}

fn handle_key_strategies(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::StrategyCursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::StrategyCursorDown),
        InputKey::Enter => Some(Message::SelectStrategy {
            index: state.strategy_cursor,
        }),
        _ => handle_key_global(key),
    }
}

fn handle_key_content(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::Left | InputKey::Char('h') => Some(Message::PreviousStep),
        InputKey::Right | InputKey::Char('l') => Some(Message::NextStep),

        // 1-9 jump straight to a step
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Some(Message::SelectStep(index))
        }

        _ => handle_key_global(key),
    }
}

/// Action keys shared by every panel except the title input
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('s') => Some(Message::ExplainStrategy),
        InputKey::Char('i') => Some(Message::ExplainLesson),
        InputKey::Char('b') | InputKey::Esc => Some(Message::ShowPlan),
        InputKey::Char('e') => Some(Message::Export),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
