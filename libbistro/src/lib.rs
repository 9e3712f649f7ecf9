//! Bistro - a restaurant greeting and meal browser
//!
//! This library holds the front-end independent core: the meal model, the
//! selection store, the navigator and greeting state machines, per-route
//! views, and access to TheMealDB.

pub mod config;
pub mod error;
pub mod greeting;
pub mod logging;
pub mod navigation;
pub mod provider;
pub mod service;
pub mod store;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use config::Config;
pub use error::{BistroError, Result};
pub use greeting::Greeting;
pub use navigation::{Navigator, Route, Tab};
pub use store::MealStore;
pub use types::Meal;
pub use view::RouteView;
