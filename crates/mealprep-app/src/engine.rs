//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the session store and
//! the auth provider. Both runners feed it messages and read state from it.

use std::sync::Arc;

use mealprep_core::{AppPhase, Session};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

use crate::auth::{AuthProvider, OfflineAuthProvider};
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::session_store::SessionStore;
use crate::state::AppState;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    phase: AppPhase,
    current_path: String,
    authenticated: bool,
    menu_open: bool,
    sidebar_open: bool,
    redirect_count: u64,
    login_error: Option<String>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            phase: state.phase,
            current_path: state.nav.current_path.clone(),
            authenticated: state.session.is_authenticated(),
            menu_open: state.nav.user_menu.is_open(),
            sidebar_open: state.nav.sidebar.is_open(),
            redirect_count: state.nav.redirect_count,
            login_error: state.login.error.clone(),
        }
    }
}

/// Orchestration engine for the dashboard.
///
/// Encapsulates all state shared between the TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - Session store and auth provider
/// - Event broadcasting for external consumers
pub struct Engine<A = OfflineAuthProvider> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, login tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    auth: Arc<A>,

    store: Arc<dyn SessionStore>,

    /// Subscribers receive EngineEvents after each message processing cycle.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl<A> Engine<A>
where
    A: AuthProvider + Send + Sync + 'static,
{
    /// Create an engine, restoring any session kept in `store`.
    ///
    /// Does not navigate; call [`Engine::start`] once the runner is ready.
    pub fn new(settings: Settings, store: Arc<dyn SessionStore>, auth: A) -> Self {
        let mut state = AppState::with_settings(settings);

        match store.load() {
            Ok(Some(stored)) => {
                debug!("Restored stored session");
                state.session = stored.into_session();
            }
            Ok(None) => {}
            Err(e) => warn!("Ignoring stored session: {}", e),
        }

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            auth: Arc::new(auth),
            store,
            event_tx,
        }
    }

    /// Replace the session for this run without touching the store
    pub fn set_session(&mut self, session: Session) {
        self.state.session = session;
    }

    /// Resolve the configured start route (through the session guard)
    pub fn start(&mut self) {
        self.start_at(self.state.settings.behavior.start_route.clone());
    }

    /// Resolve an explicit start route (through the session guard)
    pub fn start_at(&mut self, path: impl Into<String>) {
        let path = path.into();
        info!("Starting at {}", path);
        self.process_message(Message::Navigate { path });
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind, older events are dropped
    /// (`broadcast::error::RecvError::Lagged`).
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Emits EngineEvents based on state changes detected by comparing
    /// before/after snapshots.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.auth, &self.store);

        let post = StateSnapshot::capture(&self.state);
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

    /// Wait for the next message from the channel and process it.
    ///
    /// Returns false if the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub async fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        info!("Engine shut down");
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if post.redirect_count != pre.redirect_count {
            if let Some(redirect) = &self.state.nav.last_redirect {
                self.emit(EngineEvent::Redirected {
                    from: redirect.from.clone(),
                    to: redirect.to.clone(),
                });
            }
        }

        // The first resolved route counts as a change even when the path is the same
        let started = pre.phase == AppPhase::Initializing && post.phase == AppPhase::Running;
        if started || pre.current_path != post.current_path {
            self.emit(EngineEvent::RouteChanged {
                from: pre.current_path.clone(),
                to: post.current_path.clone(),
            });
        }

        if !pre.authenticated && post.authenticated {
            let email = self
                .state
                .session
                .user()
                .map(|u| u.email.clone())
                .unwrap_or_default();
            self.emit(EngineEvent::SessionStarted { email });
        } else if pre.authenticated && !post.authenticated {
            self.emit(EngineEvent::SessionEnded);
        }

        if post.login_error != pre.login_error {
            if let Some(error) = &post.login_error {
                self.emit(EngineEvent::LoginFailed {
                    error: error.clone(),
                });
            }
        }

        if pre.menu_open != post.menu_open {
            self.emit(EngineEvent::UserMenuToggled {
                open: post.menu_open,
            });
        }

        if pre.sidebar_open != post.sidebar_open {
            self.emit(EngineEvent::SidebarToggled {
                open: post.sidebar_open,
            });
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// send() only fails when nobody is subscribed.
    fn emit(&self, event: EngineEvent) {
        debug!("Engine event: {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}
