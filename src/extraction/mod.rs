mod client;
mod instructions;
mod normalize;
mod upstream;

pub use client::ExtractionClient;
pub use instructions::{derive_instructions, DerivedInstructions, InstructionsRule, NO_INSTRUCTIONS};
pub use normalize::normalize;
pub use upstream::{AnalyzedInstruction, InstructionStep, UpstreamIngredient, UpstreamRecipe};

use async_trait::async_trait;

use crate::{ExtractedRecipe, PlannerError};

/// Turns a recipe page URL into a normalized recipe
#[async_trait]
pub trait RecipeExtractor: Send + Sync {
    /// Short name used in log lines
    fn extractor_name(&self) -> &str;

    async fn extract(&self, url: &str) -> Result<ExtractedRecipe, PlannerError>;
}
