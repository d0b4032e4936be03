//! # mealprep-app - Application State and Orchestration
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! MealPrepper dashboard. It contains the application state, message
//! handling, the session guard, the sidebar and user menu controllers, and
//! the Engine that ties them together for both runners.
//!
//! ## TEA Pattern
//!
//! - **Model**: [`state::AppState`] - Complete application state
//! - **Message**: [`message::Message`] - All possible events/actions
//! - **Update**: [`handler::update()`] - Pure state transitions
//! - **View**: Implemented in `mealprep-tui` (not this crate)
//!
//! ## Engine
//!
//! [`Engine`] owns the state, the message channel, the session store and the
//! auth provider. Subscribe to [`EngineEvent`]s with [`Engine::subscribe()`].
//!
//! ## Main Modules
//!
//! - [`guard`] - Session guard (`authorize`, `logout`)
//! - [`navigation`] - Sidebar links, disclosures, history
//! - [`user_menu`] - User menu entries and state
//! - [`dashboard`] - Quick action and stat card descriptors
//! - [`page`] - Page model ([`page::PageDocument`])
//! - [`login`] / [`auth`] - Login form and the auth provider seam
//! - [`session_store`] - Session persistence
//! - [`config`] - Configuration file parsing

pub mod actions;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod engine;
pub mod engine_event;
pub mod guard;
pub mod handler;
pub mod input_key;
pub mod login;
pub mod message;
pub mod navigation;
pub mod page;
pub mod process;
pub mod session_store;
pub mod signals;
pub mod state;
pub mod user_menu;

// Re-export primary types
pub use auth::{AuthProvider, LocalAuthProvider, OfflineAuthProvider};
pub use config::Settings;
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use session_store::{
    store_from_settings, FileSessionStore, MemorySessionStore, SessionStore, StoredSession,
};
pub use state::{AppState, Focus, UiMode};
