//! Key event handlers for different UI modes

use mealprep_core::{paths, sidebar_routes};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C in every mode
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode() {
        UiMode::Login => handle_key_login(key),
        UiMode::UserMenu => handle_key_user_menu(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Login form: printable keys are typed into the focused field
fn handle_key_login(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::LoginInput(c)),
        InputKey::Backspace => Some(Message::LoginBackspace),
        InputKey::Tab | InputKey::BackTab | InputKey::Up | InputKey::Down => {
            Some(Message::SwitchLoginField)
        }
        InputKey::Enter => Some(Message::SubmitLogin),
        _ => None,
    }
}

/// User menu open: menu keys drive the menu, anything else dismisses it
fn handle_key_user_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::UserMenuUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::UserMenuDown),
        InputKey::Enter => Some(Message::ActivateUserMenuSelection),
        InputKey::Char('u') => Some(Message::ToggleUserMenu),
        _ => Some(Message::DismissUserMenu),
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(digit) = key.digit() {
        return (digit <= sidebar_routes().count())
            .then_some(Message::NavigateToSidebarIndex(digit - 1));
    }

    match key {
        InputKey::Char('q') => Some(Message::Quit),

        // Disclosures
        InputKey::Char('u') => Some(Message::ToggleUserMenu),
        InputKey::Char('m') => Some(Message::ToggleSidebar),
        InputKey::Esc if state.nav.sidebar.is_open() => Some(Message::CloseSidebar),

        // Focus and selection
        InputKey::Tab | InputKey::BackTab => Some(Message::CycleFocus),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Enter => Some(Message::ActivateSelection),

        // Navigation
        InputKey::Char('b') | InputKey::Backspace => Some(Message::NavigateBack),
        InputKey::Char(',') => Some(Message::Navigate {
            path: paths::SETTINGS.to_string(),
        }),

        _ => None,
    }
}
