//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`. The reducer performs no I/O: fetching happens
//! in the event loop, which feeds results back in as actions.

use super::actions::Action;
use super::state::{AppState, MealListState, StatusBarState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libbistro::{Greeting, Route, Tab};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
///
/// # Purity Guarantees
///
/// - No network requests
/// - No file I/O
/// - Deterministic (same inputs -> same output)
pub fn reduce(state: AppState, action: Action) -> AppState {
    let mut state = state;

    match action {
        // === UI Events ===
        Action::Key(key) => return handle_key(state, key),
        Action::Tick => {}
        Action::Resize(_, _) => {} // Terminal auto-handles resize

        // === Navigation ===
        Action::SelectTab(tab) => {
            state.navigator.select_tab(tab);
            state.store.clear_view();
            if tab == Tab::Home {
                // Home screen is recreated on every selection
                state.greeting = Greeting::new();
            }
        }

        Action::NextTab => {
            let tab = state.navigator.active_tab().next();
            return reduce(state, Action::SelectTab(tab));
        }

        Action::TapMeal(id) => {
            if state.navigator.tap(&id) {
                state.store.view(id);
            }
        }

        Action::Back => {
            if state.navigator.back() {
                state.store.clear_view();
            }
        }

        Action::Quit => state.should_quit = true,
        Action::ShowHelp => state.help_visible = true,
        Action::HideHelp => state.help_visible = false,

        // === Home ===
        Action::PressGreeting => {
            if *state.navigator.current() == Route::Home {
                state.greeting = state.greeting.press();
            }
        }

        // === List ===
        Action::CursorUp => {
            state.list.cursor = state.list.cursor.saturating_sub(1);
        }

        Action::CursorDown => {
            let last = state.store.len().saturating_sub(1);
            state.list.cursor = (state.list.cursor + 1).min(last);
        }

        // === Fetching ===
        Action::RefreshRequested => state.fetch.requested = true,

        Action::FetchStarted => {
            state.fetch.requested = false;
            state.fetch.loading = true;
            state.status = StatusBarState {
                message: Some("Loading meals...".to_string()),
            };
        }

        Action::MealsLoaded(meals) => {
            let count = meals.len();
            state.store.set_meals(meals);
            state.fetch.loading = false;
            state.list = MealListState {
                cursor: state.list.cursor.min(count.saturating_sub(1)),
            };
            state.status = StatusBarState {
                message: Some(format!("{} meals", count)),
            };
        }

        Action::FetchFailed(_) => {
            // No error-state UI: keep the previous batch and drop the spinner
            state.fetch.loading = false;
            state.status = StatusBarState::default();
        }
    }

    state
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return reduce(state, Action::Quit),
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return reduce(state, Action::Quit),

        (KeyCode::F(1), _) => {
            let action = if state.help_visible { Action::HideHelp } else { Action::ShowHelp };
            return reduce(state, action);
        }

        (KeyCode::Esc, _) if state.help_visible => return reduce(state, Action::HideHelp),

        // Tab bar
        (KeyCode::Char('1'), _) => return reduce(state, Action::SelectTab(Tab::Home)),
        (KeyCode::Char('2'), _) => return reduce(state, Action::SelectTab(Tab::List)),
        (KeyCode::Left, _) | (KeyCode::Right, _) | (KeyCode::Tab, _) => {
            return reduce(state, Action::NextTab);
        }

        (KeyCode::Char('r'), KeyModifiers::NONE) => {
            return reduce(state, Action::RefreshRequested);
        }

        _ => {}
    }

    // The help overlay covers the screen
    if state.help_visible {
        return state;
    }

    // Screen-specific keybindings
    match state.route().clone() {
        Route::Home => handle_home_key(state, key),
        Route::List => handle_list_key(state, key),
        Route::Detail(_) => handle_detail_key(state, key),
    }
}

fn handle_home_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => reduce(state, Action::PressGreeting),
        _ => state,
    }
}

fn handle_list_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => reduce(state, Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => reduce(state, Action::CursorDown),
        KeyCode::Enter => match state.selected_meal().map(|meal| meal.id.clone()) {
            Some(id) => reduce(state, Action::TapMeal(id)),
            None => state,
        },
        _ => state,
    }
}

fn handle_detail_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => reduce(state, Action::Back),
        _ => state,
    }
}
