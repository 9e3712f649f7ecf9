//! Read-only per-route views handed to renderers

use crate::greeting::{self, Greeting};
use crate::navigation::Route;
use crate::store::MealStore;
use crate::types::Meal;

/// What a renderer needs to draw the current route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteView<'a> {
    Home {
        title: &'static str,
        greeting: &'static str,
        button: &'static str,
    },
    List {
        meals: &'a [Meal],
    },
    /// `meal` is `None` when the id is not in the current batch; render nothing
    Detail {
        meal: Option<&'a Meal>,
    },
}

impl<'a> RouteView<'a> {
    pub fn resolve(route: &Route, store: &'a MealStore, greeting: Greeting) -> Self {
        match route {
            Route::Home => RouteView::Home {
                title: greeting::TITLE,
                greeting: greeting.text(),
                button: greeting::BUTTON_LABEL,
            },
            Route::List => RouteView::List {
                meals: store.meals(),
            },
            Route::Detail(id) => {
                let meal = store.find_by_id(id);
                if meal.is_none() {
                    tracing::debug!(meal_id = %id, "Detail requested for unknown meal");
                }
                RouteView::Detail { meal }
            }
        }
    }
}
