//! Mouse click resolution
//!
//! Maps a click position to the message the clicked element sends, using
//! the same layout functions as the renderer.

use mealprep_app::login::LoginField;
use mealprep_app::user_menu::UserMenuItem;
use mealprep_app::{AppState, Message};
use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::layout;
use crate::render;
use crate::theme::icons::IconSet;
use crate::widgets::{trigger_label, LoginForm};

/// Message for a left click at (`column`, `row`) on a screen of size `area`
pub fn message_for_click(state: &AppState, area: Rect, column: u16, row: u16) -> Option<Message> {
    let pos = Position::new(column, row);
    if !area.contains(pos) {
        return None;
    }

    if !state.page_kind().has_shell() {
        return login_click(state, area, pos);
    }

    let areas = layout::create(area, state.viewport, state.is_sidebar_visible());
    let icons = IconSet::new(state.settings.ui.icons);
    let menu_open = state.nav.user_menu.is_open();

    let label = trigger_label(state.session.user(), &icons, menu_open);
    let trigger = layout::menu_trigger_rect(areas.top_bar, label.width() as u16);
    if trigger.contains(pos) {
        return Some(Message::ToggleUserMenu);
    }

    if menu_open {
        let menu = layout::user_menu_rect(area, areas.top_bar);
        let item = UserMenuItem::ALL
            .iter()
            .enumerate()
            .find(|(i, _)| {
                layout::user_menu_item_rect(menu, *i).is_some_and(|r| r.contains(pos))
            })
            .map(|(_, item)| *item);
        return match item {
            Some(item) => Some(Message::SelectUserMenuItem(item)),
            None if menu.contains(pos) => None,
            None => Some(Message::DismissUserMenu),
        };
    }

    if state.viewport.has_collapsible_sidebar()
        && layout::hamburger_rect(areas.top_bar).contains(pos)
    {
        return Some(Message::ToggleSidebar);
    }

    if let Some(sidebar) = areas.sidebar {
        if sidebar.contains(pos) {
            return state
                .nav_links()
                .iter()
                .enumerate()
                .find(|(i, _)| {
                    layout::sidebar_link_rect(sidebar, *i).is_some_and(|r| r.contains(pos))
                })
                .map(|(_, link)| Message::Navigate {
                    path: link.path.to_string(),
                });
        }
        if areas.sidebar_overlay {
            return Some(Message::CloseSidebar);
        }
    }

    if areas.content.contains(pos) {
        let targets = state.focus_targets();
        return render::content_target_rects(state, areas.content)
            .into_iter()
            .find(|(_, rect)| rect.contains(pos))
            .and_then(|(index, _)| targets.get(index))
            .map(|target| {
                let id = target.test_id.unwrap_or(target.label.as_str());
                Message::ActivateTarget(id.to_string())
            });
    }

    None
}

fn login_click(state: &AppState, area: Rect, pos: Position) -> Option<Message> {
    let form = layout::login_form_rect(area);
    if LoginForm::submit_rect(form).contains(pos) {
        return Some(Message::SubmitLogin);
    }

    [LoginField::Email, LoginField::Password]
        .into_iter()
        .find(|field| LoginForm::field_rect(form, *field).contains(pos))
        .filter(|field| *field != state.login.focused)
        .map(|_| Message::SwitchLoginField)
}
