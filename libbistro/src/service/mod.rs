//! Fetch service for Bistro
//!
//! `MealService` is the single entry point front-ends use to obtain meals. It
//! owns the configured provider and an event bus, and reports every fetch as
//! a start event followed by exactly one of `MealsUpdated` or `FetchFailed`.
//!
//! # Example
//!
//! ```no_run
//! use libbistro::service::MealService;
//! use libbistro::store::MealStore;
//!
//! # async fn example() -> libbistro::Result<()> {
//! let service = MealService::new()?;
//! let mut store = MealStore::new();
//! store.set_meals(service.refresh().await?);
//! # Ok(())
//! # }
//! ```

pub mod events;

use std::sync::Arc;

use self::events::{Event, EventBus, EventReceiver};
use crate::provider::mock::MockProvider;
use crate::provider::themealdb::TheMealDbProvider;
use crate::provider::MealProvider;
use crate::types::Meal;
use crate::{Config, Result};

/// Service facade over a meal provider
#[derive(Clone)]
pub struct MealService {
    provider: Arc<dyn MealProvider>,
    event_bus: EventBus,
}

impl MealService {
    /// Create a service from the config file at the default location
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let config = Config::load_or_default()?;
        Self::from_config(&config)
    }

    /// Create a TheMealDB-backed service from a config
    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = TheMealDbProvider::new(&config.api)?;
        Ok(Self::with_provider(Arc::new(provider)))
    }

    /// Create a service that serves the built-in sample meals offline
    pub fn mock() -> Self {
        Self::with_provider(Arc::new(MockProvider::sample()))
    }

    /// Create a service around any provider
    pub fn with_provider(provider: Arc<dyn MealProvider>) -> Self {
        Self {
            provider,
            event_bus: EventBus::new(16),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Subscribe to fetch events
    pub fn subscribe(&self) -> EventReceiver {
        self.event_bus.subscribe()
    }

    /// Fetch a fresh batch from the provider
    ///
    /// # Errors
    ///
    /// Returns the provider's error after publishing it as `FetchFailed`.
    pub async fn refresh(&self) -> Result<Vec<Meal>> {
        let provider = self.provider.name().to_string();
        self.event_bus.emit(Event::FetchStarted {
            provider: provider.clone(),
        });

        match self.provider.fetch_meals().await {
            Ok(meals) => {
                tracing::info!(%provider, count = meals.len(), "Meals updated");
                self.event_bus.emit(Event::MealsUpdated {
                    provider,
                    count: meals.len(),
                });
                Ok(meals)
            }
            Err(e) => {
                tracing::warn!(%provider, error = %e, "Meal fetch failed");
                self.event_bus.emit(Event::FetchFailed {
                    provider,
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }
}
