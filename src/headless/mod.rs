//! Headless mode - JSON event output for scripted sessions
//!
//! Runs the dashboard without a terminal UI. Commands are read from stdin
//! one per line and state changes are written to stdout as structured JSON
//! events, so test scripts never have to parse ANSI escape codes.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type, along with event-specific data.
//!
//! # Example Output
//!
//! ```json
//! {"event":"redirected","from":"/","to":"/login","timestamp":1704700001000}
//! {"event":"navigated","from":"/","to":"/login","timestamp":1704700001000}
//! {"event":"session_started","email":"cook@example.com","timestamp":1704700002000}
//! {"event":"menu_toggled","open":true,"timestamp":1704700003000}
//! ```

pub mod command;
pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use mealprep_app::{AppState, EngineEvent};
use mealprep_core::Viewport;
use serde::Serialize;
use tracing::error;

/// A sidebar link as reported in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSnapshot {
    pub label: String,
    pub path: String,
    pub active: bool,
}

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// The current path changed (or the start route resolved)
    Navigated {
        from: String,
        to: String,
        timestamp: i64,
    },

    /// The session guard sent the visitor elsewhere
    Redirected {
        from: String,
        to: String,
        timestamp: i64,
    },

    SessionStarted { email: String, timestamp: i64 },

    SessionEnded { timestamp: i64 },

    MenuToggled { open: bool, timestamp: i64 },

    SidebarToggled { open: bool, timestamp: i64 },

    /// Current page, answering a `snapshot` command
    Snapshot {
        path: String,
        title: String,
        authenticated: bool,
        user: Option<String>,
        viewport: Viewport,
        menu_open: bool,
        sidebar_visible: bool,
        sidebar: Vec<LinkSnapshot>,
        targets: Vec<String>,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Write this event as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Headless counterpart of an engine event.
    ///
    /// A rejected login becomes a non-fatal `error`; shutdown has no line.
    pub fn from_engine_event(event: &EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        let event = match event {
            EngineEvent::RouteChanged { from, to } => Self::Navigated {
                from: from.clone(),
                to: to.clone(),
                timestamp,
            },
            EngineEvent::Redirected { from, to } => Self::Redirected {
                from: from.clone(),
                to: to.clone(),
                timestamp,
            },
            EngineEvent::SessionStarted { email } => Self::SessionStarted {
                email: email.clone(),
                timestamp,
            },
            EngineEvent::SessionEnded => Self::SessionEnded { timestamp },
            EngineEvent::LoginFailed { error } => Self::error(error.clone(), false),
            EngineEvent::UserMenuToggled { open } => Self::MenuToggled {
                open: *open,
                timestamp,
            },
            EngineEvent::SidebarToggled { open } => Self::SidebarToggled {
                open: *open,
                timestamp,
            },
            EngineEvent::Shutdown => return None,
        };
        Some(event)
    }

    pub fn snapshot(state: &AppState) -> Self {
        let document = state.document();
        let sidebar = if state.is_sidebar_visible() {
            document
                .nav
                .iter()
                .map(|link| LinkSnapshot {
                    label: link.label.to_string(),
                    path: link.path.to_string(),
                    active: link.active,
                })
                .collect()
        } else {
            Vec::new()
        };

        Self::Snapshot {
            path: document.path,
            title: document.title,
            authenticated: state.session.is_authenticated(),
            user: state.session.user().map(|u| u.display_name().to_string()),
            viewport: state.viewport,
            menu_open: state.nav.user_menu.is_open(),
            sidebar_visible: state.is_sidebar_visible(),
            sidebar,
            targets: document
                .focus_targets
                .iter()
                .map(|t| t.accessible_label.clone())
                .collect(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
