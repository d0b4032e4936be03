//! Custom widget components

mod dashboard;
mod document;
mod login_form;
pub mod overlay;
mod quick_action_card;
mod sidebar;
mod stat_card;
mod status_bar;
mod top_bar;
mod user_menu;

pub use dashboard::{DashboardLayout, DashboardView};
pub use document::DocumentView;
pub use login_form::LoginForm;
pub use quick_action_card::QuickActionCard;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use status_bar::StatusBar;
pub use top_bar::{trigger_label, TopBar};
pub use user_menu::UserMenuPopup;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap by display width.
///
/// Words longer than `width` are split mid-word. Always returns at least one
/// line.
pub fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        for c in word.chars() {
            if current.width() + c.width().unwrap_or(0) > width {
                lines.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Cut `text` to at most `width` columns, marking the cut with `…`
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::new();
    for c in text.chars() {
        if result.width() + c.width().unwrap_or(0) + 1 > width {
            break;
        }
        result.push(c);
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_lines_breaks_on_words() {
        let lines = wrap_lines(
            "Start creating recipes and meal plans to make the most of MealPrepper.",
            36,
        );
        assert_eq!(
            lines,
            vec![
                "Start creating recipes and meal",
                "plans to make the most of",
                "MealPrepper."
            ]
        );
    }

    #[test]
    fn test_wrap_lines_splits_long_words() {
        assert_eq!(wrap_lines("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_lines_empty_text() {
        assert_eq!(wrap_lines("", 10), vec![String::new()]);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Ada", 10), "Ada");
        assert_eq!(truncate_to_width("Ada Lovelace", 6), "Ada L…");
        assert_eq!(truncate_to_width("Ada", 0), "");
    }
}
