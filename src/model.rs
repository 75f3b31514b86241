use serde::{Deserialize, Serialize};

/// One line of a recipe's ingredient list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Free-text line as written by the source, e.g. "1 cup flour"
    pub name: String,
    pub amount: Option<f64>,
    pub unit: Option<String>,
}

/// A recipe as returned by the extraction client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedRecipe {
    /// Identifier assigned by the extraction service; not unique across sources
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub servings: Option<f64>,
    pub ready_in_minutes: Option<f64>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: String,
}

impl ExtractedRecipe {
    /// Attach the URL the recipe was extracted from
    pub fn with_source(self, url: impl Into<String>) -> Recipe {
        Recipe {
            id: self.id,
            title: self.title,
            image: self.image,
            servings: self.servings,
            ready_in_minutes: self.ready_in_minutes,
            ingredients: self.ingredients,
            instructions: self.instructions,
            url: url.into(),
        }
    }
}

/// A recipe held by the planner, remembering where it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub servings: Option<f64>,
    pub ready_in_minutes: Option<f64>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_source_keeps_fields() {
        let extracted = ExtractedRecipe {
            id: 7,
            title: "Soup".to_string(),
            image: None,
            servings: Some(2.0),
            ready_in_minutes: Some(30.0),
            ingredients: vec![Ingredient {
                name: "1 onion".to_string(),
                amount: Some(1.0),
                unit: None,
            }],
            instructions: "Simmer.".to_string(),
        };

        let recipe = extracted.with_source("https://x.test/soup");
        assert_eq!(recipe.url, "https://x.test/soup");
        assert_eq!(recipe.title, "Soup");
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.instructions, "Simmer.");
    }

    #[test]
    fn test_serializes_camel_case() {
        let recipe = ExtractedRecipe {
            id: 1,
            title: "Pasta".to_string(),
            image: None,
            servings: None,
            ready_in_minutes: Some(20.0),
            ingredients: vec![],
            instructions: "Boil water.".to_string(),
        }
        .with_source("https://example.com/pasta");

        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["readyInMinutes"], 20.0);
        assert_eq!(json["url"], "https://example.com/pasta");
    }
}
