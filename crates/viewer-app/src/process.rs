//! Message processing
//!
//! Runs a message and its follow-ups through the TEA update function and
//! dispatches the resulting actions.

use tokio::sync::{mpsc, watch};

use crate::actions::handle_action;
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function.
///
/// Returns the host-facing actions (file picker requests) for the caller to
/// forward; everything else is spawned here.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    shutdown_rx: &watch::Receiver<bool>,
) -> Vec<UpdateAction> {
    let mut host_actions = Vec::new();

    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        match result.action {
            Some(UpdateAction::OpenFilePicker) => host_actions.push(UpdateAction::OpenFilePicker),
            Some(action) => handle_action(action, msg_tx.clone(), shutdown_rx.clone()),
            None => {}
        }

        // Continue with follow-up message
        msg = result.message;
    }

    host_actions
}
