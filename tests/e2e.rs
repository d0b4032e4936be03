//! End-to-end scenarios for the MealPrepper dashboard
//!
//! Each scenario drives a real [`Engine`] and checks both the state and a
//! full-screen render on ratatui's `TestBackend`.
//!
//! Run with: cargo test --test e2e

mod e2e {
    mod auth_flow;
    mod navigation;
    mod responsive;
}

use std::sync::Arc;
use std::time::Duration;

use mealprep_app::config::{SessionSettings, StoreKind};
use mealprep_app::{Engine, MemorySessionStore, Message, OfflineAuthProvider, Settings};
use mealprep_core::{CurrentUser, Session, SessionToken};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tempfile::TempDir;

// ─────────────────────────────────────────────────────────
// Test Data Helpers
// ─────────────────────────────────────────────────────────

pub const DESKTOP: (u16, u16) = (120, 40);
pub const TABLET: (u16, u16) = (80, 24);
/// A 375px phone screen
pub const PHONE: (u16, u16) = (40, 30);

pub fn test_user() -> CurrentUser {
    CurrentUser::new("ada@example.com").with_full_name("Ada")
}

/// Settings that keep the session file inside `dir`
pub fn file_store_settings(dir: &TempDir) -> Settings {
    Settings {
        session: SessionSettings {
            store: StoreKind::File,
            path: Some(dir.path().join("session.json")),
        },
        ..Settings::default()
    }
}

/// Engine with an empty in-memory store, sized to `size`
pub fn anonymous_engine(size: (u16, u16)) -> Engine {
    let mut engine = Engine::new(
        Settings::default(),
        Arc::new(MemorySessionStore::new()),
        OfflineAuthProvider::default(),
    );
    resize(&mut engine, size);
    engine
}

/// Engine signed in as [`test_user`], started on the dashboard
pub fn signed_in_engine(size: (u16, u16)) -> Engine {
    let mut engine = anonymous_engine(size);
    engine.set_session(Session::authenticated(
        SessionToken::new("test-token"),
        Some(test_user()),
    ));
    engine.start();
    engine
}

pub fn resize(engine: &mut Engine, (width, height): (u16, u16)) {
    engine.process_message(Message::Resize { width, height });
}

pub fn goto(engine: &mut Engine, path: &str) {
    engine.process_message(Message::Navigate {
        path: path.to_string(),
    });
}

/// Wait for the in-flight login to report back
pub async fn settle_login(engine: &mut Engine) {
    while engine.state.login.submitting {
        let processed = tokio::time::timeout(Duration::from_secs(2), engine.process_next())
            .await
            .expect("login did not finish");
        assert!(processed);
    }
}

/// Render the current state and return the screen rows
pub fn screen(engine: &Engine) -> Vec<String> {
    let (width, height) = engine.state.terminal_size;
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal
        .draw(|frame| mealprep_tui::view(frame, &engine.state))
        .expect("draw");

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

pub fn screen_contains(engine: &Engine, needle: &str) -> bool {
    screen(engine).iter().any(|row| row.contains(needle))
}
