//! Configuration management for the seed grader
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. An extra file passed with `--config`
//! 4. Environment variable overrides with SEED_ prefix

use std::path::Path;

use config::{builder::DefaultState, ConfigBuilder, Environment, File};
use serde::Deserialize;
use shared::{validate_standards, GradingStandards};

use crate::error::{AppError, AppResult};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Grading thresholds
    #[serde(default)]
    pub standards: GradingStandards,

    /// Report output configuration
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Report format
    pub format: OutputFormat,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Color lists are comma separated in environment variables
const COLOR_LIST_KEYS: [&str; 2] = [
    "standards.quality.grade_a.accepted_colors",
    "standards.quality.grade_b.accepted_colors",
];

impl Config {
    /// Load configuration from files and environment variables
    pub fn load(extra_file: Option<&Path>) -> AppResult<Self> {
        let environment =
            std::env::var("SEED_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        // Load environment-specific config file
        let mut builder = config::Config::builder()
            .add_source(File::with_name(&format!("config/{}", environment)).required(false));

        if let Some(path) = extra_file {
            builder = builder.add_source(File::from(path));
        }

        // Override with environment variables (SEED_ prefix)
        Self::from_builder(builder.add_source(environment_source()), &environment)
    }

    /// Apply code defaults, build and validate
    fn from_builder(builder: ConfigBuilder<DefaultState>, environment: &str) -> AppResult<Self> {
        let defaults = serde_json::to_value(GradingStandards::default())
            .map_err(|e| AppError::Configuration(e.to_string()))?;
        let builder = set_standard_defaults(builder, "standards", &defaults)?;

        let config: Config = builder
            .set_default("environment", environment)?
            .set_default("output.format", "text")?
            .build()?
            .try_deserialize()?;

        validate_standards(&config.standards)
            .map_err(|e| AppError::Configuration(e.to_string()))?;

        Ok(config)
    }
}

fn environment_source() -> Environment {
    let mut env = Environment::with_prefix("SEED")
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .try_parsing(true);
    for key in COLOR_LIST_KEYS {
        env = env.with_list_parse_key(key);
    }
    env
}

/// Register every built-in threshold as a default, one key per leaf,
/// so a source can override a single threshold inside a tier.
fn set_standard_defaults(
    mut builder: ConfigBuilder<DefaultState>,
    key: &str,
    value: &serde_json::Value,
) -> AppResult<ConfigBuilder<DefaultState>> {
    builder = match value {
        serde_json::Value::Object(fields) => {
            for (name, child) in fields {
                builder = set_standard_defaults(builder, &format!("{}.{}", key, name), child)?;
            }
            builder
        }
        // Only color lists
        serde_json::Value::Array(items) => {
            let items: Vec<String> = items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect();
            builder.set_default(key, items)?
        }
        serde_json::Value::String(text) => builder.set_default(key, text.as_str())?,
        serde_json::Value::Number(number) => match number.as_i64() {
            Some(integer) => builder.set_default(key, integer)?,
            None => builder.set_default(key, number.to_string())?,
        },
        serde_json::Value::Bool(flag) => builder.set_default(key, *flag)?,
        serde_json::Value::Null => builder,
    };
    Ok(builder)
}
