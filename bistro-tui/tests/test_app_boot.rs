//! Test application initialization
//!
//! Verifies that the app starts at Home with the initial greeting and
//! picks up UI settings from the environment.

use bistro_tui::app::{AppState, UiConfig};
use libbistro::greeting::WELCOME;
use libbistro::{Greeting, Route, RouteView, Tab};
use serial_test::serial;

#[test]
fn test_app_initializes_to_home() {
    let state = AppState::new();

    assert_eq!(state.route(), &Route::Home);
    assert_eq!(state.navigator.active_tab(), Tab::Home);
    assert!(!state.should_quit);
}

#[test]
fn test_greeting_starts_initial() {
    let state = AppState::new();

    assert_eq!(state.greeting, Greeting::Initial);
    match state.view() {
        RouteView::Home { greeting, .. } => assert_eq!(greeting, WELCOME),
        other => panic!("Expected home view, got {:?}", other),
    }
}

#[test]
fn test_first_fetch_requested_on_boot() {
    let state = AppState::new();

    assert!(state.wants_fetch());
    assert!(!state.fetch.loading);
    assert!(state.store.is_empty());
}

#[test]
fn test_help_hidden_by_default() {
    let state = AppState::new();

    assert!(!state.help_visible);
    assert!(state.status.message.is_none());
}

#[test]
#[serial]
fn test_colors_disabled_with_no_color_env() {
    std::env::set_var("NO_COLOR", "1");
    let state = AppState::new();
    std::env::remove_var("NO_COLOR");

    assert!(!state.config.colors_enabled);
}

#[test]
#[serial]
fn test_colors_disabled_with_bistro_tui_no_color_env() {
    std::env::set_var("BISTRO_TUI_NO_COLOR", "1");
    let state = AppState::new();
    std::env::remove_var("BISTRO_TUI_NO_COLOR");

    assert!(!state.config.colors_enabled);
}

#[test]
#[serial]
fn test_tick_rate_from_env_overrides_config() {
    std::env::set_var("BISTRO_TUI_TICK_MS", "250");
    let config = UiConfig::from_config(&libbistro::config::UiConfig { tick_rate_ms: 50 });
    std::env::remove_var("BISTRO_TUI_TICK_MS");

    assert_eq!(config.tick_rate_ms, 250);
}

#[test]
#[serial]
fn test_tick_rate_from_config() {
    std::env::remove_var("BISTRO_TUI_TICK_MS");
    let config = UiConfig::from_config(&libbistro::config::UiConfig { tick_rate_ms: 50 });

    assert_eq!(config.tick_rate_ms, 50);
}

#[test]
#[serial]
fn test_tick_rate_default_100ms() {
    std::env::remove_var("BISTRO_TUI_TICK_MS");
    let state = AppState::new();

    assert_eq!(state.config.tick_rate_ms, 100);
}
