use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;

use super::normalize::normalize;
use super::upstream::UpstreamRecipe;
use super::RecipeExtractor;
use crate::{ExtractedRecipe, PlannerConfig, PlannerError};

const EXTRACT_PATH: &str = "/recipes/extract";

/// Client for the Spoonacular `recipes/extract` endpoint
pub struct ExtractionClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ExtractionClient {
    /// Create a client from configuration
    pub fn new(config: &PlannerConfig) -> Result<Self, PlannerError> {
        let api_key = config.resolve_api_key()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(ExtractionClient {
            client: builder.build()?,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        ExtractionClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    async fn fetch(&self, url: &str) -> Result<ExtractedRecipe, PlannerError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, EXTRACT_PATH))
            .query(&[("url", url), ("apiKey", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(PlannerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let upstream: UpstreamRecipe = serde_json::from_str(&body)?;
        let (recipe, rule) = normalize(upstream);
        debug!(
            "Extracted '{}' (id {}) from {}, instructions via {} rule",
            recipe.title, recipe.id, url, rule
        );
        Ok(recipe)
    }
}

#[async_trait]
impl RecipeExtractor for ExtractionClient {
    fn extractor_name(&self) -> &str {
        "spoonacular"
    }

    async fn extract(&self, url: &str) -> Result<ExtractedRecipe, PlannerError> {
        self.fetch(url).await.inspect_err(|e| {
            error!("Error extracting recipe from {}: {}", url, e);
        })
    }
}
