pub mod config;
pub mod error;
pub mod extraction;
pub mod model;
pub mod render;
pub mod shell;

pub use crate::config::PlannerConfig;
pub use error::PlannerError;
pub use extraction::{ExtractionClient, RecipeExtractor};
pub use model::{ExtractedRecipe, Ingredient, Recipe};
pub use shell::{AddState, Notice, Planner, SubmitOutcome};

/// Extract a single recipe using configuration from `config.toml` and the environment
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipe = meal_planner::extract_recipe_from_url("https://example.com/pasta").await?;
/// println!("{}", recipe.title);
/// # Ok(())
/// # }
/// ```
pub async fn extract_recipe_from_url(url: &str) -> Result<ExtractedRecipe, PlannerError> {
    let config = PlannerConfig::load()?;
    let client = ExtractionClient::new(&config)?;
    client.extract(url).await
}
