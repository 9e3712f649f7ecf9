//! Meal data providers
//!
//! A provider supplies one ordered batch of meals per call. The UI never
//! talks to a provider directly; the fetch service (see `service`) calls it
//! and publishes the outcome.
//!
//! # Examples
//!
//! ```no_run
//! use libbistro::config::ApiConfig;
//! use libbistro::provider::{MealProvider, themealdb::TheMealDbProvider};
//!
//! # async fn example() -> libbistro::Result<()> {
//! let provider = TheMealDbProvider::new(&ApiConfig::default())?;
//! let meals = provider.fetch_meals().await?;
//! println!("{} returned {} meals", provider.name(), meals.len());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Meal;

pub mod themealdb;

// Available outside tests so the binaries can run offline with `--mock`
pub mod mock;

/// Source of meal batches
#[async_trait]
pub trait MealProvider: Send + Sync {
    /// Fetch the current batch of meals
    ///
    /// The batch is delivered whole; an empty batch is a success.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` if the source cannot be reached or its
    /// response cannot be decoded.
    async fn fetch_meals(&self) -> Result<Vec<Meal>>;

    /// Short lowercase identifier used in logs (e.g. "themealdb", "mock")
    fn name(&self) -> &str;
}
