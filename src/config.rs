use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::PlannerError;

/// Environment variable consulted when `api_key` is not configured
pub const API_KEY_ENV_FALLBACK: &str = "SPOONACULAR_API_KEY";

/// Settings for talking to the recipe extraction service
#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    /// Access key sent with every extraction request
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of the extraction service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds; unset leaves the transport default in place
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

impl PlannerConfig {
    /// Load configuration from `config.toml` (optional) and the environment
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }

    /// Resolve the access key, falling back to `SPOONACULAR_API_KEY`
    pub fn resolve_api_key(&self) -> Result<String, PlannerError> {
        self.api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| std::env::var(API_KEY_ENV_FALLBACK).ok())
            .filter(|key| !key.is_empty())
            .ok_or(PlannerError::MissingApiKey)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with MEAL_PLANNER__ prefix
/// 2. The given file, or an optional config.toml in the current directory
/// 3. Default values
///
/// Environment variable format: MEAL_PLANNER__API_KEY
pub fn load_config(path: Option<&Path>) -> Result<PlannerConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("config").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("MEAL_PLANNER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

/// Parse configuration from a TOML string, without consulting the environment
pub fn config_from_toml(source: &str) -> Result<PlannerConfig, ConfigError> {
    Config::builder()
        .add_source(File::from_str(source, FileFormat::Toml))
        .build()?
        .try_deserialize()
}

/// Serializes tests that read or mutate process environment variables
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
