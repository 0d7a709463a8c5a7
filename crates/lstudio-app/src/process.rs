//! Message processing
//!
//! Runs the TEA update loop for one incoming message: follow-up messages are
//! processed in the same cycle and actions are dispatched as background tasks.

use std::sync::Arc;

use tokio::sync::mpsc;

use lstudio_gen::{GenerationService, Generator};

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    generator: &Arc<Generator<S>>,
) where
    S: GenerationService + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), generator);
        }

        msg = result.message;
    }
}
