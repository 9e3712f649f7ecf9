//! TheMealDB HTTP provider

use std::time::Duration;

use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::error::{ProviderError, Result};
use crate::provider::MealProvider;
use crate::types::{Meal, MealsEnvelope};

/// Fetches meals from `GET {base_url}/search.php?s={search}`
#[derive(Debug, Clone)]
pub struct TheMealDbProvider {
    inner: reqwest::Client,
    base_url: String,
    search: String,
}

impl TheMealDbProvider {
    /// Creates a provider from the `[api]` section of the config.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            inner,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            search: config.search.clone(),
        })
    }

    /// Returns a copy searching for `term` instead of the configured term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl MealProvider for TheMealDbProvider {
    async fn fetch_meals(&self) -> Result<Vec<Meal>> {
        let url = self.url("search.php");
        tracing::debug!(%url, search = %self.search, "Fetching meals");

        let response = self
            .inner
            .get(&url)
            .query(&[("s", self.search.as_str())])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let meals = handle_response(response).await?;
        tracing::info!(count = meals.len(), "Fetched meals from TheMealDB");
        Ok(meals)
    }

    fn name(&self) -> &str {
        "themealdb"
    }
}

/// Decodes a successful response or maps the failure status.
async fn handle_response(response: reqwest::Response) -> Result<Vec<Meal>> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ProviderError::Network(e.to_string()))?;

    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("Unknown");
        tracing::warn!(status = status.as_u16(), "TheMealDB request failed");
        return Err(ProviderError::Status(status.as_u16(), reason.to_string()).into());
    }

    let envelope: MealsEnvelope =
        serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;
    Ok(envelope.into_meals())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building_trims_trailing_slash() {
        let config = ApiConfig {
            base_url: "http://localhost:8080/api/json/v1/1/".to_string(),
            ..ApiConfig::default()
        };
        let provider = TheMealDbProvider::new(&config).unwrap();
        assert_eq!(
            provider.url("search.php"),
            "http://localhost:8080/api/json/v1/1/search.php"
        );
    }

    #[test]
    fn test_with_search_overrides_config() {
        let config = ApiConfig {
            search: "soup".to_string(),
            ..ApiConfig::default()
        };
        let provider = TheMealDbProvider::new(&config).unwrap();
        assert_eq!(provider.search(), "soup");
        assert_eq!(provider.with_search("cake").search(), "cake");
    }

    #[test]
    fn test_name() {
        let provider = TheMealDbProvider::new(&ApiConfig::default()).unwrap();
        assert_eq!(provider.name(), "themealdb");
    }
}
