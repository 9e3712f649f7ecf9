//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! every action that can modify application state.

use crossterm::event::KeyEvent;
use libbistro::{Meal, Tab};

/// Actions that trigger state transitions
///
/// Actions are plain data describing what happened. The reducer
/// (see `reducer.rs`) applies them to state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Tab bar selection; replaces the current route
    SelectTab(Tab),

    /// Switch to the other tab
    NextTab,

    /// Row tap on the list screen
    TapMeal(String),

    /// Leave the detail screen
    Back,

    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Home ===
    /// Greeting button pressed
    PressGreeting,

    // === List ===
    /// Move the row cursor up
    CursorUp,

    /// Move the row cursor down
    CursorDown,

    // === Fetching ===
    /// User asked for a fresh batch
    RefreshRequested,

    /// A fetch was spawned
    FetchStarted,

    /// A fetch delivered a batch
    MealsLoaded(Vec<Meal>),

    /// A fetch failed; the current batch stays
    FetchFailed(String),
}
