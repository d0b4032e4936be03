//! Viewport-dependent layout and disclosure scenarios

use mealprep_app::dashboard::QUICK_ACTIONS;
use mealprep_app::{Focus, Message};
use mealprep_core::Viewport;
use mealprep_tui::{hit_map, layout};
use ratatui::layout::Rect;

use crate::{resize, screen_contains, signed_in_engine, DESKTOP, PHONE, TABLET};

fn area(size: (u16, u16)) -> Rect {
    Rect::new(0, 0, size.0, size.1)
}

#[test]
fn test_viewport_follows_terminal_width() {
    let mut engine = signed_in_engine(PHONE);
    assert_eq!(engine.state.viewport, Viewport::Mobile);

    resize(&mut engine, TABLET);
    assert_eq!(engine.state.viewport, Viewport::Tablet);

    resize(&mut engine, DESKTOP);
    assert_eq!(engine.state.viewport, Viewport::Desktop);
}

#[test]
fn test_phone_keeps_all_four_cards_reachable() {
    let mut engine = signed_in_engine(PHONE);
    assert_eq!(engine.state.focus_targets().len(), QUICK_ACTIONS.len() + 1);

    engine.state.focus = Focus::Content;
    for (index, action) in QUICK_ACTIONS.iter().enumerate() {
        engine.state.content_index = index;
        assert!(
            screen_contains(&engine, &format!("→ {}", action.action_label)),
            "{} hidden on a phone",
            action.test_id
        );
    }
}

#[test]
fn test_phone_sidebar_opens_and_closes_on_navigation() {
    let mut engine = signed_in_engine(PHONE);
    assert!(!engine.state.is_sidebar_visible());
    assert!(!screen_contains(&engine, "Navigation"));

    let top_bar = layout::create(area(PHONE), engine.state.viewport, false).top_bar;
    let hamburger = layout::hamburger_rect(top_bar);
    let toggle = hit_map::message_for_click(&engine.state, area(PHONE), hamburger.x, hamburger.y)
        .expect("hamburger click");
    engine.process_message(toggle);
    assert!(engine.state.nav.sidebar.is_open());
    assert!(screen_contains(&engine, "Navigation"));

    engine.process_message(Message::NavigateToSidebarIndex(4));
    assert_eq!(engine.state.current_path(), "/items");
    assert!(!engine.state.nav.sidebar.is_open());
}

#[test]
fn test_widening_closes_phone_panel() {
    let mut engine = signed_in_engine(PHONE);
    engine.process_message(Message::ToggleSidebar);
    assert!(engine.state.nav.sidebar.is_open());

    resize(&mut engine, DESKTOP);
    assert!(!engine.state.nav.sidebar.is_open());
    assert!(engine.state.is_sidebar_visible());
}

#[test]
fn test_user_menu_closes_on_outside_click() {
    for size in [PHONE, TABLET, DESKTOP] {
        let mut engine = signed_in_engine(size);
        engine.process_message(Message::ToggleUserMenu);
        assert!(screen_contains(&engine, "User Settings"));

        // Bottom-left corner of the content, away from the menu
        let outside = hit_map::message_for_click(&engine.state, area(size), 1, size.1 - 3)
            .expect("outside click");
        engine.process_message(outside);

        assert!(!engine.state.nav.user_menu.is_open(), "{:?}", size);
        assert!(!screen_contains(&engine, "User Settings"), "{:?}", size);
    }
}
