//! User account menu
//!
//! A disclosure opened from the top bar trigger with two entries:
//! "User Settings" and "Log Out".

use serde::Serialize;

use crate::navigation::Disclosure;

/// Accessible label of the trigger button
pub const TRIGGER_LABEL: &str = "Open user menu";

/// An entry of the user menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserMenuItem {
    Settings,
    LogOut,
}

impl UserMenuItem {
    pub const ALL: [UserMenuItem; 2] = [UserMenuItem::Settings, UserMenuItem::LogOut];

    pub fn accessible_label(&self) -> &'static str {
        match self {
            UserMenuItem::Settings => "User Settings",
            UserMenuItem::LogOut => "Log Out",
        }
    }

    /// Match a label case-insensitively ("settings", "log out", "logout")
    pub fn from_label(label: &str) -> Option<Self> {
        let needle: String = label
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        match needle.as_str() {
            "settings" | "usersettings" => Some(UserMenuItem::Settings),
            "logout" => Some(UserMenuItem::LogOut),
            _ => None,
        }
    }
}

/// Menu open state plus the highlighted entry
#[derive(Debug, Clone, Default)]
pub struct UserMenuState {
    pub disclosure: Disclosure,
    pub highlighted: usize,
}

impl UserMenuState {
    pub fn is_open(&self) -> bool {
        self.disclosure.is_open()
    }

    pub fn toggle(&mut self) {
        self.disclosure.toggle();
        self.highlighted = 0;
    }

    /// Close; returns true if the menu was open
    pub fn close(&mut self) -> bool {
        self.highlighted = 0;
        self.disclosure.close()
    }

    pub fn highlight_next(&mut self) {
        self.highlighted = (self.highlighted + 1) % UserMenuItem::ALL.len();
    }

    pub fn highlight_previous(&mut self) {
        self.highlighted = self
            .highlighted
            .checked_sub(1)
            .unwrap_or(UserMenuItem::ALL.len() - 1);
    }

    pub fn highlighted_item(&self) -> UserMenuItem {
        UserMenuItem::ALL[self.highlighted.min(UserMenuItem::ALL.len() - 1)]
    }
}
