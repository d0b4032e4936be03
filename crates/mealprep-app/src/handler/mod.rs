//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `navigation`: Guarded navigation, history, sidebar and focus
//! - `user_menu`: User menu handlers
//! - `session`: Login and logout handlers

pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod session;
pub(crate) mod update;
pub(crate) mod user_menu;


use crate::login::Credentials;
use crate::message::Message;
use crate::session_store::StoredSession;

// Re-export main entry point
pub use keys::handle_key;
pub use navigation::resolve_target;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Ask the auth provider to sign in
    Login { credentials: Credentials },

    /// Write the session to the session store
    PersistSession(StoredSession),

    /// Remove the session from the session store
    ClearStoredSession,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
