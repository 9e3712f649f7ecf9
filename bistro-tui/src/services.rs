//! Service layer adapter for TUI
//!
//! Bridges the async `MealService` to the synchronous TUI event loop.
//!
//! # Architecture
//!
//! - `ServiceHandle`: wraps `MealService` and owns a tokio runtime
//! - Fetching: spawns an async task, hands back a crossbeam receiver that
//!   yields exactly one outcome
//! - The event loop drains the receiver with `try_recv` and turns the
//!   outcome into an action via [`outcome_action`]
//!
//! # Example
//!
//! ```no_run
//! use bistro_tui::services::{ServiceHandle, outcome_action};
//! use libbistro::service::MealService;
//!
//! # fn example() -> bistro_tui::error::Result<()> {
//! let services = ServiceHandle::new(MealService::mock())?;
//! let rx = services.refresh();
//!
//! // In the event loop
//! if let Ok(outcome) = rx.try_recv() {
//!     let _action = outcome_action(outcome);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crossbeam_channel::{bounded, Receiver};
use libbistro::provider::themealdb::TheMealDbProvider;
use libbistro::service::MealService;
use libbistro::{Config, Meal};

use crate::app::Action;
use crate::error::Result;

/// Result of one fetch, as delivered to the event loop
pub type FetchOutcome = libbistro::Result<Vec<Meal>>;

/// Service handle for TUI operations
pub struct ServiceHandle {
    service: MealService,
    runtime: tokio::runtime::Runtime,
}

impl ServiceHandle {
    /// Create a new service handle around `service`
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn new(service: MealService) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        Ok(Self { service, runtime })
    }

    /// Create a TheMealDB-backed handle, optionally overriding the search term
    ///
    /// # Errors
    ///
    /// Returns `TuiError::Service` if the HTTP client cannot be built, or an
    /// I/O error if the runtime cannot be created.
    pub fn from_config(config: &Config, search: Option<String>) -> Result<Self> {
        let mut provider = TheMealDbProvider::new(&config.api)?;
        if let Some(term) = search {
            provider = provider.with_search(term);
        }
        Self::new(MealService::with_provider(Arc::new(provider)))
    }

    pub fn provider_name(&self) -> &str {
        self.service.provider_name()
    }

    /// Start a fetch without blocking the UI
    ///
    /// The returned receiver yields one outcome. If the handle is dropped
    /// first, the receiver reports disconnection instead.
    pub fn refresh(&self) -> Receiver<FetchOutcome> {
        let (tx, rx) = bounded(1);
        let service = self.service.clone();

        self.runtime.spawn(async move {
            let outcome = service.refresh().await;
            if tx.send(outcome).is_err() {
                tracing::debug!("Fetch finished after the UI stopped listening");
            }
        });

        rx
    }
}

/// Map a fetch outcome to the action the reducer understands
pub fn outcome_action(outcome: FetchOutcome) -> Action {
    match outcome {
        Ok(meals) => Action::MealsLoaded(meals),
        Err(e) => Action::FetchFailed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libbistro::error::ProviderError;
    use libbistro::provider::mock::MockProvider;
    use std::time::Duration;

    #[test]
    fn test_from_config_uses_themealdb() {
        let services = ServiceHandle::from_config(&Config::default_config(), Some("soup".to_string())).unwrap();
        assert_eq!(services.provider_name(), "themealdb");
    }

    #[test]
    fn test_refresh_delivers_one_outcome() {
        let services = ServiceHandle::new(MealService::mock()).unwrap();
        assert_eq!(services.provider_name(), "mock");

        let rx = services.refresh();
        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();

        match outcome_action(outcome) {
            Action::MealsLoaded(meals) => assert_eq!(meals.len(), 3),
            other => panic!("Expected MealsLoaded, got {:?}", other),
        }
    }

    #[test]
    fn test_refresh_failure_becomes_fetch_failed() {
        let provider = MockProvider::failing(ProviderError::Network("Connection refused".to_string()));
        let services = ServiceHandle::new(MealService::with_provider(Arc::new(provider))).unwrap();

        let outcome = services.refresh().recv_timeout(Duration::from_secs(5)).unwrap();

        match outcome_action(outcome) {
            Action::FetchFailed(error) => assert!(error.contains("Connection refused")),
            other => panic!("Expected FetchFailed, got {:?}", other),
        }
    }
}
