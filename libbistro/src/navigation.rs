//! Routes and the navigator state machine
//!
//! Route paths (`home`, `list`, `detail/{mealId}`) are decoded into [`Route`]
//! once at the boundary; everything past that point matches on the enum.
//!
//! | From   | Trigger              | To          |
//! |--------|----------------------|-------------|
//! | any    | select Home tab      | Home        |
//! | any    | select List tab      | List        |
//! | List   | tap meal row `id`    | Detail(id)  |
//! | Detail | back                 | List        |

use std::fmt;
use std::str::FromStr;

use crate::error::BistroError;

const DETAIL_PREFIX: &str = "detail/";

/// A UI destination, optionally parameterized by a meal id
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    List,
    Detail(String),
}

/// Bottom-bar destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Home,
    List,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Home, Tab::List];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::List => "List",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::List => 1,
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Tab::Home => Route::Home,
            Tab::List => Route::List,
        }
    }

    /// The other tab (there are only two)
    pub fn next(&self) -> Tab {
        match self {
            Tab::Home => Tab::List,
            Tab::List => Tab::Home,
        }
    }
}

impl FromStr for Tab {
    type Err = BistroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(Tab::Home),
            "list" => Ok(Tab::List),
            _ => Err(BistroError::InvalidInput(format!("Unknown tab: {}", s))),
        }
    }
}

impl Route {
    /// Detail route for `meal_id`
    ///
    /// The id must be non-empty and free of `/` so the route displays as a
    /// path that parses back to itself.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty id or one containing `/`.
    pub fn detail(meal_id: impl Into<String>) -> Result<Route, BistroError> {
        let meal_id = meal_id.into();
        if meal_id.is_empty() || meal_id.contains('/') {
            return Err(BistroError::InvalidInput(format!(
                "Detail route needs a meal id without '/': {:?}",
                meal_id
            )));
        }
        Ok(Route::Detail(meal_id))
    }

    /// Meal id carried by a Detail route
    pub fn meal_id(&self) -> Option<&str> {
        match self {
            Route::Detail(id) => Some(id),
            _ => None,
        }
    }

    /// Tab highlighted while this route is shown
    pub fn tab(&self) -> Tab {
        match self {
            Route::Home => Tab::Home,
            Route::List | Route::Detail(_) => Tab::List,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "home"),
            Route::List => write!(f, "list"),
            Route::Detail(id) => write!(f, "{}{}", DETAIL_PREFIX, id),
        }
    }
}

impl FromStr for Route {
    type Err = BistroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Route::Home),
            "list" => Ok(Route::List),
            _ => match s.strip_prefix(DETAIL_PREFIX) {
                Some(id) => Route::detail(id),
                None => Err(BistroError::InvalidInput(format!("Unknown route: {}", s))),
            },
        }
    }
}

/// Current route of the app session. Starts at Home and never terminates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Route,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn active_tab(&self) -> Tab {
        self.current.tab()
    }

    /// Tab selection replaces the current route, whatever it is.
    ///
    /// Selecting Home always yields a freshly created home screen, so any
    /// state owned by that screen starts over.
    pub fn select_tab(&mut self, tab: Tab) -> &Route {
        tracing::debug!(from = %self.current, to = tab.title(), "Tab selected");
        self.current = tab.route();
        &self.current
    }

    /// Row tap on the list screen. Ignored from any other route, and for
    /// ids that cannot form a detail path.
    pub fn tap(&mut self, meal_id: &str) -> bool {
        if self.current != Route::List {
            tracing::debug!(route = %self.current, meal_id, "Ignoring tap outside list");
            return false;
        }
        match Route::detail(meal_id) {
            Ok(route) => {
                self.current = route;
                tracing::debug!(route = %self.current, "Opened meal");
                true
            }
            Err(e) => {
                tracing::warn!(meal_id, error = %e, "Ignoring tap on unroutable meal id");
                false
            }
        }
    }

    /// Pop Detail back to List. Home and List have nothing to pop.
    pub fn back(&mut self) -> bool {
        match self.current {
            Route::Detail(_) => {
                self.current = Route::List;
                tracing::debug!("Back to list");
                true
            }
            Route::Home | Route::List => false,
        }
    }
}
