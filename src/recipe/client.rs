//! HTTP client for the recipe provider

use super::models::Recipe;
use crate::error::{Error, FetchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1/";

/// Source of recipes for the controller
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetch one random recipe
    async fn fetch_random(&self) -> std::result::Result<Recipe, FetchError>;

    /// Fetch the first recipe whose name matches `name`
    async fn fetch_by_name(&self, name: &str) -> std::result::Result<Recipe, FetchError>;
}

#[async_trait]
impl<T: RecipeSource + ?Sized> RecipeSource for std::sync::Arc<T> {
    async fn fetch_random(&self) -> std::result::Result<Recipe, FetchError> {
        (**self).fetch_random().await
    }

    async fn fetch_by_name(&self, name: &str) -> std::result::Result<Recipe, FetchError> {
        (**self).fetch_by_name(name).await
    }
}

/// TheMealDB client
pub struct MealDbClient {
    client: Client,
    base_url: Url,
}

impl MealDbClient {
    /// Create a client rooted at `base_url` (e.g. `https://www.themealdb.com/api/json/v1/1`)
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::HttpClient(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: directory_url(base_url)?,
        })
    }

    async fn get(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> std::result::Result<String, FetchError> {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|e| FetchError::Network(format!("Invalid endpoint {}: {}", endpoint, e)))?;
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Recipe provider returned {}", status);
            return Err(FetchError::Network(format!(
                "Recipe provider returned {}",
                status
            )));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to read response: {}", e)))
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn fetch_random(&self) -> std::result::Result<Recipe, FetchError> {
        let body = self.get("random.php", &[]).await?;
        parse_meal(&body, None)
    }

    async fn fetch_by_name(&self, name: &str) -> std::result::Result<Recipe, FetchError> {
        let body = self.get("search.php", &[("s", name)]).await?;
        parse_meal(&body, Some(name))
    }
}

#[derive(Debug, Deserialize)]
struct MealsEnvelope {
    #[serde(default)]
    meals: Option<Vec<Value>>,
}

/// Normalize a provider response body into one recipe.
///
/// Name searches match substrings, so when `exact_name` is given the meal
/// with exactly that name wins and the first meal is the fallback. An absent,
/// null or empty `meals` list is `NotFound`; anything that is not the
/// expected shape is reported as `Network`.
pub fn parse_meal(body: &str, exact_name: Option<&str>) -> std::result::Result<Recipe, FetchError> {
    let envelope: MealsEnvelope = serde_json::from_str(body)
        .map_err(|e| FetchError::Network(format!("Failed to parse response: {}", e)))?;

    let meals = envelope.meals.unwrap_or_default();
    let exact = exact_name.and_then(|name| {
        meals
            .iter()
            .position(|m| m.get("strMeal").and_then(Value::as_str) == Some(name))
    });

    let chosen = meals
        .get(exact.unwrap_or(0))
        .ok_or_else(|| FetchError::NotFound(exact_name.unwrap_or("random recipe").to_string()))?;

    chosen
        .as_object()
        .and_then(Recipe::from_meal)
        .ok_or_else(|| FetchError::Network("Meal record has no name".to_string()))
}

/// Parse `base` so that relative joins land beneath it rather than replacing its last segment
fn directory_url(base: &str) -> Result<Url> {
    let mut url = Url::parse(base)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
