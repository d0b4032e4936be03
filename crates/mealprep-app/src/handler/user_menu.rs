//! User menu handlers

use mealprep_core::paths;
use tracing::debug;

use crate::message::Message;
use crate::state::AppState;
use crate::user_menu::UserMenuItem;

use super::{navigation, UpdateResult};

/// Trigger button: Closed -> Open, Open -> Closed
pub fn toggle(state: &mut AppState) -> UpdateResult {
    if !state.page_kind().has_shell() {
        return UpdateResult::none();
    }
    state.nav.user_menu.toggle();
    debug!("User menu open: {}", state.nav.user_menu.is_open());
    UpdateResult::none()
}

/// Outside interaction
pub fn dismiss(state: &mut AppState) -> UpdateResult {
    state.nav.user_menu.close();
    UpdateResult::none()
}

pub fn activate_selection(state: &mut AppState) -> UpdateResult {
    if !state.nav.user_menu.is_open() {
        return UpdateResult::none();
    }
    let item = state.nav.user_menu.highlighted_item();
    UpdateResult::message(Message::SelectUserMenuItem(item))
}

pub fn select(state: &mut AppState, item: UserMenuItem) -> UpdateResult {
    state.nav.user_menu.close();
    match item {
        UserMenuItem::Settings => navigation::navigate(state, paths::SETTINGS),
        UserMenuItem::LogOut => UpdateResult::message(Message::Logout),
    }
}
