//! Test keybinding mappings to actions
//!
//! Verifies that keyboard input is mapped to the right transitions
//! through the reducer.

use bistro_tui::app::{reduce, Action, AppState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libbistro::{Greeting, Meal, Route};

fn key(code: KeyCode) -> Action {
    Action::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn press(state: AppState, code: KeyCode) -> AppState {
    reduce(state, key(code))
}

fn loaded() -> AppState {
    reduce(
        AppState::new(),
        Action::MealsLoaded(vec![
            Meal::new("52977", "Corba"),
            Meal::new("52978", "Kumpir"),
            Meal::new("53026", "Tamiya"),
        ]),
    )
}

#[test]
fn test_q_quits_application() {
    let state = press(AppState::new(), KeyCode::Char('q'));
    assert!(state.should_quit);
}

#[test]
fn test_ctrl_c_quits_application() {
    let state = reduce(
        AppState::new(),
        Action::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
    );
    assert!(state.should_quit);
}

#[test]
fn test_f1_toggles_help() {
    let state = press(AppState::new(), KeyCode::F(1));
    assert!(state.help_visible);

    let state = press(state, KeyCode::F(1));
    assert!(!state.help_visible);
}

#[test]
fn test_esc_closes_help_before_going_back() {
    let state = press(loaded(), KeyCode::Char('2'));
    let state = press(state, KeyCode::Enter);
    let state = press(state, KeyCode::F(1));

    let state = press(state, KeyCode::Esc);
    assert!(!state.help_visible);
    assert!(matches!(state.route(), Route::Detail(_)));

    let state = press(state, KeyCode::Esc);
    assert_eq!(state.route(), &Route::List);
}

#[test]
fn test_number_keys_select_tabs() {
    let state = press(AppState::new(), KeyCode::Char('2'));
    assert_eq!(state.route(), &Route::List);

    let state = press(state, KeyCode::Char('1'));
    assert_eq!(state.route(), &Route::Home);
}

#[test]
fn test_arrows_switch_tabs() {
    let state = press(AppState::new(), KeyCode::Right);
    assert_eq!(state.route(), &Route::List);

    let state = press(state, KeyCode::Left);
    assert_eq!(state.route(), &Route::Home);
}

#[test]
fn test_enter_presses_greeting_on_home() {
    let state = press(AppState::new(), KeyCode::Enter);
    assert_eq!(state.greeting, Greeting::Acknowledged);

    let state = press(state, KeyCode::Char(' '));
    assert_eq!(state.greeting, Greeting::Acknowledged);
}

#[test]
fn test_list_cursor_and_open() {
    let state = press(loaded(), KeyCode::Char('2'));
    let state = press(state, KeyCode::Down);
    let state = press(state, KeyCode::Char('j'));
    assert_eq!(state.list.cursor, 2);

    let state = press(state, KeyCode::Char('k'));
    let state = press(state, KeyCode::Enter);
    assert_eq!(state.route(), &Route::Detail("52978".to_string()));
}

#[test]
fn test_enter_on_empty_list_does_nothing() {
    let state = press(AppState::new(), KeyCode::Char('2'));
    let state = press(state, KeyCode::Enter);
    assert_eq!(state.route(), &Route::List);
}

#[test]
fn test_backspace_leaves_detail() {
    let state = press(loaded(), KeyCode::Char('2'));
    let state = press(state, KeyCode::Enter);
    let state = press(state, KeyCode::Backspace);
    assert_eq!(state.route(), &Route::List);
}

#[test]
fn test_r_requests_refresh() {
    let state = reduce(loaded(), Action::FetchStarted);
    let state = reduce(state, Action::MealsLoaded(Vec::new()));
    assert!(!state.wants_fetch());

    let state = press(state, KeyCode::Char('r'));
    assert!(state.wants_fetch());
}

#[test]
fn test_help_overlay_swallows_screen_keys() {
    let state = press(AppState::new(), KeyCode::F(1));
    let state = press(state, KeyCode::Char(' '));
    assert_eq!(state.greeting, Greeting::Initial);

    let state = press(state, KeyCode::Esc);
    let state = press(state, KeyCode::Char(' '));
    assert_eq!(state.greeting, Greeting::Acknowledged);
}
