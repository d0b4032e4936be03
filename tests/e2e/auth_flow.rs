//! Session guard, login and logout scenarios

use std::sync::Arc;

use mealprep::{build_engine, LaunchOptions};
use mealprep_app::login::LoginField;
use mealprep_app::user_menu::UserMenuItem;
use mealprep_app::{store_from_settings, Engine, EngineEvent, Message, OfflineAuthProvider};
use mealprep_core::{list_routes, TOKEN_KEY};
use tempfile::tempdir;

use crate::{
    anonymous_engine, file_store_settings, goto, screen_contains, settle_login, signed_in_engine,
    DESKTOP, TABLET,
};

fn fill_login_form(engine: &mut Engine, email: &str, password: &str) {
    engine.process_message(Message::SetLoginField {
        field: LoginField::Email,
        value: email.to_string(),
    });
    engine.process_message(Message::SetLoginField {
        field: LoginField::Password,
        value: password.to_string(),
    });
    engine.process_message(Message::SubmitLogin);
}

#[tokio::test]
async fn test_unauthenticated_root_redirects_to_login() {
    let mut engine = anonymous_engine(DESKTOP);
    let mut events = engine.subscribe();

    engine.start();

    assert_eq!(engine.state.current_path(), "/login");
    assert_eq!(
        events.try_recv().unwrap(),
        EngineEvent::Redirected {
            from: "/".into(),
            to: "/login".into(),
        }
    );
    assert!(screen_contains(&engine, "Sign in to plan your meals."));
    assert!(!screen_contains(&engine, "Hi, "));
}

#[tokio::test]
async fn test_every_protected_route_requires_a_session() {
    for route in list_routes().iter().filter(|r| r.requires_auth) {
        let mut engine = anonymous_engine(TABLET);
        engine.start_at(route.path);
        assert_eq!(engine.state.current_path(), "/login", "{}", route.path);
    }
}

#[tokio::test]
async fn test_login_returns_to_requested_page() {
    let mut engine = anonymous_engine(DESKTOP);
    engine.start_at("/shopping-list");
    assert_eq!(engine.state.current_path(), "/login");

    fill_login_form(&mut engine, "cook@example.com", "password123");
    settle_login(&mut engine).await;

    assert!(engine.state.session.is_authenticated());
    assert_eq!(engine.state.current_path(), "/shopping-list");
    assert!(screen_contains(&engine, "Shopping List"));
}

#[tokio::test]
async fn test_short_password_is_refused_without_leaving_login() {
    let mut engine = anonymous_engine(DESKTOP);
    engine.start();

    fill_login_form(&mut engine, "cook@example.com", "pw");

    assert!(!engine.state.login.submitting);
    assert!(engine.state.login.error.is_some());
    assert_eq!(engine.state.current_path(), "/login");
}

#[tokio::test]
async fn test_signed_in_user_skips_login_page() {
    let mut engine = signed_in_engine(DESKTOP);
    goto(&mut engine, "/login");
    assert_eq!(engine.state.current_path(), "/");
}

#[tokio::test]
async fn test_logout_from_any_protected_page() {
    for route in list_routes().iter().filter(|r| r.requires_auth) {
        let mut engine = signed_in_engine(DESKTOP);
        goto(&mut engine, route.path);
        assert_eq!(engine.state.current_path(), route.path);

        engine.process_message(Message::ToggleUserMenu);
        engine.process_message(Message::SelectUserMenuItem(UserMenuItem::LogOut));

        assert!(!engine.state.session.is_authenticated(), "{}", route.path);
        assert_eq!(engine.state.current_path(), "/login");
        assert!(!engine.state.nav.user_menu.is_open());

        // Logging out again changes nothing
        engine.process_message(Message::Logout);
        assert!(!engine.state.session.is_authenticated());
        assert_eq!(engine.state.current_path(), "/login");
    }
}

#[tokio::test]
async fn test_session_survives_restart_with_file_store() {
    let dir = tempdir().unwrap();
    let settings = file_store_settings(&dir);

    let mut first = build_engine(&LaunchOptions::default(), settings.clone());
    first.start();
    assert_eq!(first.state.current_path(), "/login");
    fill_login_form(&mut first, "cook@example.com", "password123");
    settle_login(&mut first).await;
    assert!(first.state.session.is_authenticated());

    let contents = std::fs::read_to_string(dir.path().join("session.json")).unwrap();
    assert!(contents.contains(TOKEN_KEY));

    let mut second = build_engine(&LaunchOptions::default(), settings.clone());
    second.start();
    assert_eq!(second.state.current_path(), "/");
    assert_eq!(
        second.state.session.user().map(|u| u.email.as_str()),
        Some("cook@example.com")
    );

    second.process_message(Message::Logout);
    let store = store_from_settings(&settings.session);
    assert!(store.load().unwrap().is_none());
}

#[tokio::test]
async fn test_command_line_token_is_not_persisted() {
    let dir = tempdir().unwrap();
    let settings = file_store_settings(&dir);
    let options = LaunchOptions {
        token: Some("cli-token".into()),
        email: Some("cook@example.com".into()),
        ..Default::default()
    };

    let mut engine = build_engine(&options, settings.clone());
    engine.start_at("/items");
    assert_eq!(engine.state.current_path(), "/items");

    let store = store_from_settings(&settings.session);
    assert!(store.load().unwrap().is_none());
}

#[tokio::test]
async fn test_rejected_credentials_show_error() {
    let mut engine = Engine::new(
        Default::default(),
        Arc::new(mealprep_app::MemorySessionStore::new()),
        OfflineAuthProvider::default().reject("cook@example.com"),
    );
    crate::resize(&mut engine, DESKTOP);
    engine.start();

    fill_login_form(&mut engine, "cook@example.com", "password123");
    settle_login(&mut engine).await;

    assert!(!engine.state.session.is_authenticated());
    assert!(screen_contains(&engine, "Incorrect email or password"));
}
