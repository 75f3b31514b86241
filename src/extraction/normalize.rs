use super::instructions::{derive_instructions, InstructionsRule};
use super::upstream::UpstreamRecipe;
use crate::{ExtractedRecipe, Ingredient};

/// Map the extraction service's response onto our recipe shape
///
/// Returns the recipe together with the rule that produced its instructions.
pub fn normalize(upstream: UpstreamRecipe) -> (ExtractedRecipe, InstructionsRule) {
    let instructions = derive_instructions(
        upstream.instructions.as_deref(),
        &upstream.analyzed_instructions,
    );

    let ingredients = upstream
        .extended_ingredients
        .into_iter()
        .map(|ing| Ingredient {
            name: ing.original,
            amount: ing.amount,
            unit: ing.unit,
        })
        .collect();

    let recipe = ExtractedRecipe {
        id: upstream.id,
        title: upstream.title,
        image: upstream.image,
        servings: upstream.servings,
        ready_in_minutes: upstream.ready_in_minutes,
        ingredients,
        instructions: instructions.text,
    };

    (recipe, instructions.rule)
}
