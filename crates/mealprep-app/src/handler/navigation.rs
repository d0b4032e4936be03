//! Guarded navigation, history, sidebar and focus handlers

use mealprep_core::{normalize_path, paths, sidebar_routes, AppPhase};
use tracing::{debug, info};

use crate::dashboard::find_quick_action;
use crate::guard::{self, Access};
use crate::message::Message;
use crate::page::PageKind;
use crate::state::{AppState, Focus, Redirect};
use crate::user_menu::UserMenuItem;

use super::UpdateResult;

/// Navigate to `path`, running the session guard first
pub fn navigate(state: &mut AppState, path: &str) -> UpdateResult {
    let target = normalize_path(path);

    match guard::authorize(&target, &state.session) {
        Access::Allow => commit(state, &target, true),
        Access::Redirect(to) => {
            if to == paths::LOGIN && target != paths::LOGIN {
                state.nav.redirect_after_login = Some(target.clone());
            }
            info!("Redirecting {} -> {}", target, to);
            state.nav.last_redirect = Some(Redirect {
                from: target,
                to: to.to_string(),
            });
            state.nav.redirect_count += 1;
            commit(state, to, true);
        }
    }

    UpdateResult::none()
}

/// Apply a path that has already passed the guard
pub(crate) fn commit(state: &mut AppState, path: &str, record_history: bool) {
    let previous = state.nav.current_path.clone();
    if record_history && state.phase != AppPhase::Initializing && previous != path {
        state.nav.history.push(previous);
    }

    state.set_current_path(path);

    // Navigating closes both disclosures
    state.nav.sidebar.close();
    state.nav.user_menu.close();
    if !state.is_sidebar_visible() {
        state.focus = Focus::Content;
    }

    if state.phase == AppPhase::Initializing {
        state.phase = AppPhase::Running;
    }
    debug!("Now at {}", state.nav.current_path);
}

/// Go back to the most recent different path
pub fn navigate_back(state: &mut AppState) -> UpdateResult {
    while let Some(path) = state.nav.history.pop() {
        if path == state.nav.current_path {
            continue;
        }

        // The guard still applies: history may hold pages that are now protected
        match guard::authorize(&path, &state.session) {
            Access::Allow => commit(state, &path, false),
            Access::Redirect(_) => return navigate(state, &path),
        }
        return UpdateResult::none();
    }

    debug!("History is empty");
    UpdateResult::none()
}

pub fn navigate_to_sidebar_index(state: &mut AppState, index: usize) -> UpdateResult {
    match sidebar_routes().nth(index) {
        Some(route) => {
            state.sidebar_index = index;
            navigate(state, route.path)
        }
        None => UpdateResult::none(),
    }
}

/// Find the message a click on `needle` (test id or label) stands for.
///
/// Searches dashboard cards (by test id, title or action label), content
/// links, visible sidebar links, then the open user menu. Returns `None`
/// when nothing on screen matches.
pub fn resolve_target(state: &AppState, needle: &str) -> Option<Message> {
    let needle = needle.trim();
    let matches_label = |label: &str| label.eq_ignore_ascii_case(needle);

    if state.page_kind() == PageKind::Dashboard {
        if let Some(action) = find_quick_action(needle) {
            return Some(Message::Navigate {
                path: action.href.to_string(),
            });
        }
    }

    if let Some(target) = state
        .focus_targets()
        .into_iter()
        .find(|t| {
            t.test_id == Some(needle)
                || matches_label(t.label.as_str())
                || matches_label(t.accessible_label.as_str())
        })
    {
        return Some(Message::Navigate {
            path: target.href.to_string(),
        });
    }

    if state.is_sidebar_visible() {
        if let Some(link) = state.nav_links().into_iter().find(|l| matches_label(l.label)) {
            return Some(Message::Navigate {
                path: link.path.to_string(),
            });
        }
    }

    if state.nav.user_menu.is_open() {
        if let Some(item) = UserMenuItem::from_label(needle) {
            return Some(Message::SelectUserMenuItem(item));
        }
    }

    None
}

/// Flip the mobile panel. Inert when the sidebar is always shown.
pub fn toggle_sidebar(state: &mut AppState) -> UpdateResult {
    if !state.viewport.has_collapsible_sidebar() || !state.page_kind().has_shell() {
        debug!("Sidebar toggle ignored on {:?}", state.viewport);
        return UpdateResult::none();
    }

    state.nav.sidebar.toggle();
    state.focus = if state.nav.sidebar.is_open() {
        Focus::Sidebar
    } else {
        Focus::Content
    };
    UpdateResult::none()
}

pub fn close_sidebar(state: &mut AppState) -> UpdateResult {
    if state.nav.sidebar.close() {
        state.focus = Focus::Content;
    }
    UpdateResult::none()
}

pub fn cycle_focus(state: &mut AppState) -> UpdateResult {
    state.focus = match state.focus {
        Focus::Content if state.is_sidebar_visible() => Focus::Sidebar,
        _ => Focus::Content,
    };
    UpdateResult::none()
}

pub fn select_previous(state: &mut AppState) -> UpdateResult {
    match state.focus {
        Focus::Sidebar => {
            let len = sidebar_routes().count();
            state.sidebar_index = state.sidebar_index.checked_sub(1).unwrap_or(len - 1);
        }
        Focus::Content => {
            let len = state.focus_targets().len();
            if len > 0 {
                state.content_index = state.content_index.checked_sub(1).unwrap_or(len - 1);
            }
        }
    }
    UpdateResult::none()
}

pub fn select_next(state: &mut AppState) -> UpdateResult {
    match state.focus {
        Focus::Sidebar => {
            let len = sidebar_routes().count();
            state.sidebar_index = (state.sidebar_index + 1) % len;
        }
        Focus::Content => {
            let len = state.focus_targets().len();
            if len > 0 {
                state.content_index = (state.content_index + 1) % len;
            }
        }
    }
    UpdateResult::none()
}

pub fn activate_selection(state: &mut AppState) -> UpdateResult {
    match state.focus {
        Focus::Sidebar => {
            let index = state.sidebar_index;
            navigate_to_sidebar_index(state, index)
        }
        Focus::Content => {
            let href = state
                .focus_targets()
                .get(state.content_index)
                .map(|t| t.href);
            match href {
                Some(href) => navigate(state, href),
                None => UpdateResult::none(),
            }
        }
    }
}
