//! Message processing loop

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::auth::AuthProvider;
use crate::handler;
use crate::message::Message;
use crate::session_store::SessionStore;
use crate::state::AppState;

/// Process a message through the TEA update function.
///
/// Follow-up messages are processed immediately; actions are dispatched as
/// they are produced.
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    auth: &Arc<A>,
    store: &Arc<dyn SessionStore>,
) where
    A: AuthProvider + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), auth, store);
        }

        msg = result.message;
    }
}
