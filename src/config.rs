//! YAML configuration
//!
//! ```yaml
//! recommend:
//!   min_score: 1
//!   limit: 10
//! logging:
//!   level: info
//! ```
//!
//! Every field is optional. Command-line flags override file values.

use befriend_algorithms::RecommendConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub recommend: RecommendSettings,
    pub logging: LoggingSettings,
}

/// Recommendation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendSettings {
    /// Lowest score still recommended (values below 1 act as 1)
    pub min_score: u32,
    /// Maximum number of recommendations returned
    pub limit: Option<usize>,
}

impl Default for RecommendSettings {
    fn default() -> Self {
        Self {
            min_score: 1,
            limit: None,
        }
    }
}

impl From<&RecommendSettings> for RecommendConfig {
    fn from(settings: &RecommendSettings) -> Self {
        RecommendConfig {
            min_score: settings.min_score,
            limit: settings.limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Load a config file; `None` yields the defaults.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn recommend_config(&self) -> RecommendConfig {
        RecommendConfig::from(&self.recommend)
    }
}
