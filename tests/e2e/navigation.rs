//! Sidebar, quick action and history scenarios

use std::collections::HashSet;

use mealprep_app::dashboard::QUICK_ACTIONS;
use mealprep_app::Message;
use mealprep_core::{list_routes, sidebar_routes, HeadingLevel};
use mealprep_tui::{hit_map, layout, render};
use ratatui::layout::Rect;

use crate::{goto, screen, screen_contains, signed_in_engine, DESKTOP, TABLET};

#[test]
fn test_greeting_survives_a_round_trip_through_every_route() {
    let mut engine = signed_in_engine(DESKTOP);
    let greeting = engine.state.document().headings[0].clone();
    assert_eq!(greeting.level, HeadingLevel::H1);

    for route in list_routes() {
        goto(&mut engine, route.path);
        goto(&mut engine, "/");

        assert_eq!(engine.state.current_path(), "/");
        assert_eq!(engine.state.document().headings[0], greeting, "{}", route.path);
        assert!(screen_contains(&engine, "Hi, Ada"), "{}", route.path);
    }
}

#[test]
fn test_exactly_one_current_page_marker() {
    let mut engine = signed_in_engine(DESKTOP);

    for route in sidebar_routes() {
        goto(&mut engine, route.path);

        let active: Vec<_> = engine
            .state
            .nav_links()
            .into_iter()
            .filter(|l| l.active)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].path, route.path);

        let rows = screen(&engine);
        let marked: Vec<_> = rows.iter().filter(|row| row.contains('▸')).collect();
        assert_eq!(marked.len(), 1, "{}", route.path);
        assert!(marked[0].contains(route.label));
    }
}

#[test]
fn test_quick_action_cards_are_four_distinct_shortcuts() {
    let engine = signed_in_engine(DESKTOP);
    assert_eq!(QUICK_ACTIONS.len(), 4);

    let ids: HashSet<_> = QUICK_ACTIONS.iter().map(|a| a.test_id).collect();
    assert_eq!(ids.len(), 4);

    let hrefs: HashSet<_> = QUICK_ACTIONS.iter().map(|a| a.href).collect();
    let expected: HashSet<_> = ["/recipes", "/meal-plans", "/shopping-list", "/items"]
        .into_iter()
        .collect();
    assert_eq!(hrefs, expected);

    for action in &QUICK_ACTIONS {
        assert!(screen_contains(&engine, action.title), "{}", action.title);
    }
}

#[test]
fn test_clicking_shopping_list_card() {
    let mut engine = signed_in_engine(DESKTOP);
    let state = &engine.state;
    let area = Rect::new(0, 0, DESKTOP.0, DESKTOP.1);
    let content = layout::create(area, state.viewport, state.is_sidebar_visible()).content;

    let index = QUICK_ACTIONS
        .iter()
        .position(|a| a.title == "Shopping List")
        .unwrap();
    let (_, card) = render::content_target_rects(state, content)[index];
    let click = hit_map::message_for_click(state, area, card.x + 1, card.y + 1).unwrap();
    engine.process_message(click);

    assert_eq!(engine.state.current_path(), "/shopping-list");
    let document = engine.state.document();
    assert_eq!(document.headings[0].text, "Shopping List");
    assert!(screen_contains(&engine, "coming soon"));
}

#[test]
fn test_get_started_link_opens_recipes() {
    let mut engine = signed_in_engine(DESKTOP);
    engine.process_message(Message::ActivateTarget("Create Your First Recipe".into()));
    assert_eq!(engine.state.current_path(), "/recipes");
}

#[test]
fn test_back_returns_to_previous_page() {
    let mut engine = signed_in_engine(TABLET);
    goto(&mut engine, "/recipes");
    goto(&mut engine, "/items");

    engine.process_message(Message::NavigateBack);
    assert_eq!(engine.state.current_path(), "/recipes");
    engine.process_message(Message::NavigateBack);
    assert_eq!(engine.state.current_path(), "/");
}

#[test]
fn test_unknown_path_shows_not_found_without_crashing() {
    let mut engine = signed_in_engine(TABLET);
    goto(&mut engine, "/pantry");

    assert_eq!(engine.state.current_path(), "/pantry");
    assert!(engine.state.nav_links().iter().all(|l| !l.active));
    assert!(screen_contains(&engine, "Not Found"));

    engine.process_message(Message::ActivateTarget("not-found-back".into()));
    assert_eq!(engine.state.current_path(), "/");
}

#[test]
fn test_registered_routes_never_mention_not_found() {
    let mut engine = signed_in_engine(DESKTOP);
    for route in list_routes() {
        goto(&mut engine, route.path);
        let rows = screen(&engine);
        assert!(
            rows.iter().all(|r| !r.contains("404") && !r.contains("Not Found")),
            "{}",
            route.path
        );
    }
}
