//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use mealprep_core::ResultExt;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::auth::AuthProvider;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::session_store::SessionStore;

/// Execute an action produced by `update`
pub fn handle_action<A>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    auth: &Arc<A>,
    store: &Arc<dyn SessionStore>,
) where
    A: AuthProvider + Send + Sync + 'static,
{
    match action {
        UpdateAction::Login { credentials } => {
            let auth = Arc::clone(auth);
            tokio::spawn(async move {
                let email = credentials.email.clone();
                let msg = match auth.login(credentials).await {
                    Ok((token, user)) => Message::LoginSucceeded { token, user },
                    Err(e) => {
                        if e.is_recoverable() {
                            info!("Login for {} refused: {}", email, e);
                        } else {
                            warn!("Login for {} failed: {:?}", email, e);
                        }
                        Message::LoginFailed {
                            error: e.to_string(),
                        }
                    }
                };
                if msg_tx.send(msg).await.is_err() {
                    warn!("Message channel closed before login completed");
                }
            });
        }

        // The session stays valid in memory when the store fails
        UpdateAction::PersistSession(stored) => {
            let _ = store.save(&stored).context("Failed to persist session");
        }

        UpdateAction::ClearStoredSession => {
            let _ = store.clear().context("Failed to clear stored session");
        }
    }
}
