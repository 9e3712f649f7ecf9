//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).

use libbistro::{Greeting, Meal, MealStore, Navigator, Route, RouteView};

/// Root application state
///
/// Single source of truth for the whole UI. Owned by the event loop and
/// lent to render functions by reference.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Current route
    pub navigator: Navigator,

    /// Home screen greeting; recreated with the home screen
    pub greeting: Greeting,

    /// Meals of the latest fetch
    pub store: MealStore,

    /// List screen cursor
    pub list: MealListState,

    /// Fetch lifecycle
    pub fetch: FetchState,

    /// Status bar state
    pub status: StatusBarState,

    /// UI configuration
    pub config: UiConfig,
}

/// List screen state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealListState {
    /// Index of the highlighted row
    pub cursor: usize,
}

/// Fetch lifecycle flags
///
/// The reducer only raises `requested`; the event loop sees it, spawns the
/// fetch, and dispatches `FetchStarted`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchState {
    pub requested: bool,
    pub loading: bool,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(UiConfig::default())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_config(&libbistro::config::UiConfig::default())
    }
}

impl UiConfig {
    /// Build from the `[ui]` config section, letting the environment override it
    pub fn from_config(config: &libbistro::config::UiConfig) -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("BISTRO_TUI_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("BISTRO_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(config.tick_rate_ms);

        Self {
            colors_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh session at Home with the first fetch already requested
    pub fn with_config(config: UiConfig) -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            navigator: Navigator::new(),
            greeting: Greeting::new(),
            store: MealStore::new(),
            list: MealListState::default(),
            fetch: FetchState {
                requested: true,
                loading: false,
            },
            status: StatusBarState::default(),
            config,
        }
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    /// Read-only view of the current route for the renderer
    pub fn view(&self) -> RouteView<'_> {
        RouteView::resolve(self.navigator.current(), &self.store, self.greeting)
    }

    /// Meal under the list cursor
    pub fn selected_meal(&self) -> Option<&Meal> {
        self.store.meals().get(self.list.cursor)
    }

    /// Should the event loop spawn a fetch now?
    pub fn wants_fetch(&self) -> bool {
        self.fetch.requested && !self.fetch.loading
    }
}
