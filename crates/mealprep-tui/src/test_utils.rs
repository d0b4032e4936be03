//! Rendering test helpers
//!
//! # Example
//!
//! ```ignore
//! let mut term = TestTerminal::with_size(80, 24);
//! term.draw_with(|frame| view(frame, &state));
//! assert!(term.buffer_contains("Quick Actions"));
//! ```

use mealprep_app::{AppState, Engine, MemorySessionStore, OfflineAuthProvider, Settings};
use mealprep_core::{CurrentUser, Session, SessionToken};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use std::sync::Arc;

/// A [`TestBackend`] terminal with text queries over the last drawn frame
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        self.buffer().area
    }

    /// Draw a single widget into `area`
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.draw_with(|frame| frame.render_widget(widget, area));
    }

    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Screen rows as plain text
    pub fn rows(&self) -> Vec<String> {
        let buffer = self.buffer();
        let Rect { width, height, .. } = buffer.area;
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.rows().iter().any(|row| row.contains(text))
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        self.rows()
            .get(usize::from(line))
            .is_some_and(|row| row.contains(text))
    }

    pub fn find_line(&self, text: &str) -> Option<u16> {
        self.rows()
            .iter()
            .position(|row| row.contains(text))
            .and_then(|y| u16::try_from(y).ok())
    }

    /// The whole screen, one row per line
    pub fn content(&self) -> String {
        self.rows().join("\n")
    }
}

/// A signed-in user for rendering tests
pub fn test_user() -> CurrentUser {
    CurrentUser::new("ada@example.com").with_full_name("Ada")
}

/// AppState for a signed-in user at `path`, sized to `width` x `height`
pub fn signed_in_state(path: &str, width: u16, height: u16) -> AppState {
    let mut engine = test_engine(Some(test_user()));
    engine.process_message(mealprep_app::Message::Resize { width, height });
    engine.start_at(path);
    engine.state
}

/// AppState for an anonymous visitor at `path`
pub fn anonymous_state(path: &str, width: u16, height: u16) -> AppState {
    let mut engine = test_engine(None);
    engine.process_message(mealprep_app::Message::Resize { width, height });
    engine.start_at(path);
    engine.state
}

fn test_engine(user: Option<CurrentUser>) -> Engine {
    let mut engine = Engine::new(
        Settings::default(),
        Arc::new(MemorySessionStore::new()),
        OfflineAuthProvider::default(),
    );
    if let Some(user) = user {
        engine.set_session(Session::authenticated(SessionToken::new("test-token"), Some(user)));
    }
    engine
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_area_matches_requested_size() {
        let term = TestTerminal::with_size(40, 30);
        assert_eq!(term.area(), Rect::new(0, 0, 40, 30));
    }

    #[test]
    fn test_text_queries() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("\nHello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert_eq!(term.find_line("Hello"), Some(1));
        assert!(term.line_contains(1, "World"));
        assert!(!term.line_contains(9, "World"));
        assert_eq!(term.content().lines().count(), 5);
    }

    #[test]
    fn test_signed_in_state_helper() {
        let state = signed_in_state("/recipes", 40, 30);
        assert_eq!(state.current_path(), "/recipes");
        assert!(state.session.is_authenticated());
        assert_eq!(state.viewport, mealprep_core::Viewport::Mobile);
    }
}
