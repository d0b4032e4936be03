//! Main update function - handles state transitions (TEA pattern)

use mealprep_core::AppPhase;
use tracing::debug;

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, navigation, session, user_menu, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::Resize { width, height } => {
            if state.apply_terminal_size(width, height) {
                debug!("Viewport is now {:?} ({} columns)", state.viewport, width);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate { path } => navigation::navigate(state, &path),
        Message::NavigateBack => navigation::navigate_back(state),
        Message::NavigateToSidebarIndex(index) => navigation::navigate_to_sidebar_index(state, index),
        Message::ActivateTarget(needle) => match navigation::resolve_target(state, &needle) {
            Some(msg) => UpdateResult::message(msg),
            None => {
                debug!("Nothing to activate for {:?}", needle);
                UpdateResult::none()
            }
        },

        // ─────────────────────────────────────────────────────────
        // Sidebar / Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleSidebar => navigation::toggle_sidebar(state),
        Message::CloseSidebar => navigation::close_sidebar(state),
        Message::CycleFocus => navigation::cycle_focus(state),
        Message::SelectPrevious => navigation::select_previous(state),
        Message::SelectNext => navigation::select_next(state),
        Message::ActivateSelection => navigation::activate_selection(state),

        // ─────────────────────────────────────────────────────────
        // User Menu Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleUserMenu => user_menu::toggle(state),
        Message::DismissUserMenu => user_menu::dismiss(state),
        Message::UserMenuUp => {
            state.nav.user_menu.highlight_previous();
            UpdateResult::none()
        }
        Message::UserMenuDown => {
            state.nav.user_menu.highlight_next();
            UpdateResult::none()
        }
        Message::ActivateUserMenuSelection => user_menu::activate_selection(state),
        Message::SelectUserMenuItem(item) => user_menu::select(state, item),

        // ─────────────────────────────────────────────────────────
        // Session Messages
        // ─────────────────────────────────────────────────────────
        Message::Logout => session::logout(state),
        Message::LoginInput(c) => {
            state.login.push_char(c);
            UpdateResult::none()
        }
        Message::LoginBackspace => {
            state.login.backspace();
            UpdateResult::none()
        }
        Message::SwitchLoginField => {
            state.login.focused = state.login.focused.next();
            UpdateResult::none()
        }
        Message::SetLoginField { field, value } => {
            *state.login.field_mut(field) = value;
            UpdateResult::none()
        }
        Message::SubmitLogin => session::submit_login(state),
        Message::LoginSucceeded { token, user } => session::login_succeeded(state, token, user),
        Message::LoginFailed { error } => session::login_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Dashboard Messages
        // ─────────────────────────────────────────────────────────
        Message::StatsUpdated(stats) => {
            state.stats = stats;
            UpdateResult::none()
        }
    }
}
