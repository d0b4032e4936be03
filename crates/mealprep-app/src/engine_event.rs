//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON lines.

/// Domain events emitted by the Engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// The current path changed
    RouteChanged { from: String, to: String },

    /// The session guard sent the user elsewhere
    Redirected { from: String, to: String },

    // ─────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────
    /// A user signed in
    SessionStarted { email: String },

    /// The session was cleared
    SessionEnded,

    /// The auth provider refused a login
    LoginFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Disclosures
    // ─────────────────────────────────────────────────────────
    UserMenuToggled { open: bool },

    SidebarToggled { open: bool },

    // ─────────────────────────────────────────────────────────
    // Engine Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Short label for this event type (for logging/debugging)
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::RouteChanged { .. } => "route_changed",
            Self::Redirected { .. } => "redirected",
            Self::SessionStarted { .. } => "session_started",
            Self::SessionEnded => "session_ended",
            Self::LoginFailed { .. } => "login_failed",
            Self::UserMenuToggled { .. } => "user_menu_toggled",
            Self::SidebarToggled { .. } => "sidebar_toggled",
            Self::Shutdown => "shutdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_labels_are_unique() {
        let events = [
            EngineEvent::RouteChanged {
                from: "/".into(),
                to: "/recipes".into(),
            },
            EngineEvent::Redirected {
                from: "/".into(),
                to: "/login".into(),
            },
            EngineEvent::SessionStarted {
                email: "a@b.co".into(),
            },
            EngineEvent::SessionEnded,
            EngineEvent::LoginFailed {
                error: "nope".into(),
            },
            EngineEvent::UserMenuToggled { open: true },
            EngineEvent::SidebarToggled { open: false },
            EngineEvent::Shutdown,
        ];

        let mut labels: Vec<_> = events.iter().map(|e| e.event_type()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), events.len());
    }
}
