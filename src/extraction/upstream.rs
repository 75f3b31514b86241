use serde::Deserialize;

/// Response body of the `recipes/extract` endpoint, limited to the fields we read
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamRecipe {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub servings: Option<f64>,
    #[serde(default)]
    pub ready_in_minutes: Option<f64>,
    pub extended_ingredients: Vec<UpstreamIngredient>,
    #[serde(default)]
    pub instructions: Option<String>,
    // null and missing both mean "no structured instructions"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub analyzed_instructions: Vec<AnalyzedInstruction>,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamIngredient {
    // A missing line is kept as an empty name so the list stays 1:1
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzedInstruction {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub steps: Vec<InstructionStep>,
}

#[derive(Debug, Deserialize)]
pub struct InstructionStep {
    pub step: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
