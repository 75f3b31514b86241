use thiserror::Error;

/// Errors that can occur while extracting a recipe or setting up the planner
#[derive(Error, Debug)]
pub enum PlannerError {
    /// The request to the extraction service could not be completed
    #[error("Failed to fetch recipe: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The extraction service answered with a non-success status
    #[error("Extraction service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected recipe shape
    #[error("Failed to decode extraction response: {0}")]
    Decode(#[from] serde_json::Error),

    /// No access key in configuration or environment
    #[error("No API key configured (set MEAL_PLANNER__API_KEY or SPOONACULAR_API_KEY)")]
    MissingApiKey,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Writing an exported page failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
