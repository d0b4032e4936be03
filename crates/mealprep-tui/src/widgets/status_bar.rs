//! Status bar widget
//!
//! Key hints for the current input mode, plus the page title (or the
//! focused link's accessible label) on wide terminals.

use mealprep_app::{AppState, Focus, UiMode};
use mealprep_core::Viewport;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// `(key, description)` pairs for the current mode
    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.state.ui_mode() {
            UiMode::UserMenu => vec![("↑↓", "move"), ("↵", "select"), ("esc", "close")],
            UiMode::Login => vec![("tab", "next field"), ("↵", "log in"), ("^c", "quit")],
            UiMode::Normal => {
                let mut hints = vec![("1-5", "go"), ("tab", "focus"), ("↵", "open")];
                if self.state.viewport.has_collapsible_sidebar() {
                    hints.push(("m", "menu"));
                }
                hints.extend([("u", "account"), ("b", "back"), ("q", "quit")]);
                hints
            }
        }
    }

    /// Accessible label of the focused content link, else the page title
    fn context_text(&self) -> String {
        let focused = match self.state.focus {
            Focus::Content => self
                .state
                .focus_targets()
                .into_iter()
                .nth(self.state.content_index),
            Focus::Sidebar => None,
        };
        match focused {
            Some(target) => target.accessible_label,
            None => self.state.document().title,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = Vec::new();
        for (key, description) in self.hints() {
            spans.push(Span::styled(format!(" {}", key), styles::keybinding()));
            spans.push(Span::styled(format!(" {} ", description), styles::text_muted()));
        }
        let hints = Line::from(spans);
        let hints_width = hints.width() as u16;
        hints.render(area, buf);

        if self.state.viewport == Viewport::Desktop {
            let title = self.context_text();
            let title_width = title.width() as u16;
            if hints_width + title_width + 2 <= area.width {
                Line::from(Span::styled(title, styles::text_secondary())).render(
                    Rect {
                        x: area.right() - title_width - 1,
                        width: title_width,
                        ..area
                    },
                    buf,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{anonymous_state, signed_in_state, TestTerminal};

    #[test]
    fn test_normal_mode_hints() {
        let state = signed_in_state("/", 80, 24);
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("1-5 go"));
        assert!(term.buffer_contains("q quit"));
        assert!(!term.buffer_contains("m menu"));
    }

    #[test]
    fn test_mobile_hints_mention_sidebar_toggle() {
        let state = signed_in_state("/", 40, 30);
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("m menu"));
    }

    #[test]
    fn test_login_hints() {
        let state = anonymous_state("/login", 80, 24);
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("log in"));
    }

    #[test]
    fn test_desktop_shows_page_title() {
        let state = signed_in_state("/recipes", 120, 40);
        let mut term = TestTerminal::with_size(120, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("Recipes - MealPrepper"));
    }

    #[test]
    fn test_focused_card_link_is_announced() {
        let mut state = signed_in_state("/", 120, 40);
        state.focus = Focus::Content;
        state.content_index = 2;
        let mut term = TestTerminal::with_size(120, 1);
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("Shopping List: View List"));
        assert!(!term.buffer_contains("Dashboard - MealPrepper"));
    }
}
