//! Login and logout handlers

use mealprep_core::{paths, CurrentUser, SessionToken};
use tracing::{info, warn};

use crate::guard;
use crate::login;
use crate::session_store::StoredSession;
use crate::state::AppState;

use super::{navigation, UpdateAction, UpdateResult};

/// Clear the session, forget history and land on the login page
pub fn logout(state: &mut AppState) -> UpdateResult {
    let target = match guard::logout(&mut state.session) {
        guard::Access::Redirect(to) => to,
        guard::Access::Allow => paths::LOGIN,
    };

    state.nav.history.clear();
    state.nav.redirect_after_login = None;
    state.login.reset_after_logout();
    navigation::commit(state, target, false);

    info!("Signed out");
    UpdateResult::action(UpdateAction::ClearStoredSession)
}

/// Validate the form and hand the credentials to the auth provider
pub fn submit_login(state: &mut AppState) -> UpdateResult {
    if state.login.submitting {
        return UpdateResult::none();
    }

    match login::validate(&state.login.email, &state.login.password) {
        Ok(credentials) => {
            state.login.error = None;
            state.login.submitting = true;
            UpdateResult::action(UpdateAction::Login { credentials })
        }
        Err(error) => {
            state.login.error = Some(error.to_string());
            UpdateResult::none()
        }
    }
}

pub fn login_succeeded(
    state: &mut AppState,
    token: SessionToken,
    user: CurrentUser,
) -> UpdateResult {
    state.session.set(token.clone(), Some(user.clone()));
    state.login.submitting = false;
    state.login.error = None;
    state.login.password.clear();

    let target = state
        .nav
        .redirect_after_login
        .take()
        .unwrap_or_else(|| paths::DASHBOARD.to_string());

    navigation::navigate(state, &target);
    state.nav.history.clear();

    UpdateResult::action(UpdateAction::PersistSession(StoredSession::new(
        token,
        Some(user),
    )))
}

pub fn login_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Login failed: {}", error);
    state.login.submitting = false;
    state.login.error = Some(error);
    UpdateResult::none()
}
