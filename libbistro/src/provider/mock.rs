//! Mock provider implementation
//!
//! Serves a fixed batch (or a fixed failure) without network access. Used by
//! tests and by the binaries' `--mock` flag.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::error::{ProviderError, Result};
use crate::provider::MealProvider;
use crate::types::Meal;

/// Mock provider for tests and offline runs
#[derive(Debug, Clone)]
pub struct MockProvider {
    meals: Vec<Meal>,
    error: Option<ProviderError>,
    delay: Duration,
    fetch_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a mock that always returns `meals`
    pub fn new(meals: Vec<Meal>) -> Self {
        Self {
            meals,
            error: None,
            delay: Duration::ZERO,
            fetch_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock serving [`sample_meals`]
    pub fn sample() -> Self {
        Self::new(sample_meals())
    }

    /// Create a mock whose every fetch fails with `error`
    pub fn failing(error: ProviderError) -> Self {
        Self {
            error: Some(error),
            ..Self::new(Vec::new())
        }
    }

    /// Simulate network latency
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of times `fetch_meals` was called
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MealProvider for MockProvider {
    async fn fetch_meals(&self) -> Result<Vec<Meal>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.error {
            Some(ref error) => Err(error.clone().into()),
            None => Ok(self.meals.clone()),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// A small batch shaped like TheMealDB's default search results
pub fn sample_meals() -> Vec<Meal> {
    vec![
        Meal::new("52977", "Corba")
            .with_category("Side")
            .with_thumbnail("https://www.themealdb.com/images/media/meals/58oia61564916529.jpg")
            .with_instructions(
                "Pick through your lentils for any foreign debris, rinse them 2 or 3 times, \
                 drain, and set aside. Simmer with onion, carrot and tomato paste until soft, \
                 then blend and season.",
            ),
        Meal::new("52978", "Kumpir")
            .with_category("Side")
            .with_thumbnail("https://www.themealdb.com/images/media/meals/mlchx21564916997.jpg")
            .with_instructions(
                "Bake the potatoes until soft. Split, mash the insides with butter and cheese, \
                 and top with your favourite fillings.",
            ),
        Meal::new("53026", "Tamiya")
            .with_category("Vegetarian")
            .with_thumbnail("https://www.themealdb.com/images/media/meals/n3xxd91598732796.jpg")
            .with_instructions(
                "Soak the beans overnight. Blend with herbs, onion and spices, shape into \
                 patties and deep fry until golden.",
            ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_batch() {
        let provider = MockProvider::sample();

        let meals = provider.fetch_meals().await.unwrap();
        assert_eq!(meals.len(), 3);
        assert_eq!(meals[0].id, "52977");
        assert_eq!(provider.fetch_count(), 1);
        assert_eq!(provider.name(), "mock");
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let provider = MockProvider::failing(ProviderError::Network("Connection refused".to_string()));

        let err = provider.fetch_meals().await.unwrap_err();
        assert!(err.to_string().contains("Connection refused"));
        assert_eq!(provider.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_with_delay() {
        let provider = MockProvider::new(Vec::new()).with_delay(Duration::from_millis(30));

        let start = std::time::Instant::now();
        let meals = provider.fetch_meals().await.unwrap();

        assert!(meals.is_empty());
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_clones_share_fetch_count() {
        let provider = MockProvider::sample();
        let clone = provider.clone();

        clone.fetch_meals().await.unwrap();
        assert_eq!(provider.fetch_count(), 1);
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let meals = sample_meals();
        let mut ids: Vec<&str> = meals.iter().map(|m| m.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), meals.len());
    }
}
