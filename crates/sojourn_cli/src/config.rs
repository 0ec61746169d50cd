//! CLI configuration management.
//!
//! Rule parameters default to the built-in 90-in-180 rule, can be set
//! in a TOML file, and are overridable per-invocation by flags.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use sojourn_core::planner::DEFAULT_SEARCH_HORIZON_DAYS;
use sojourn_core::types::{DEFAULT_ALLOWED_DAYS, DEFAULT_WINDOW_DAYS};

/// CLI configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Rolling window length in days
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Allowed days per window
    #[serde(default = "default_allowed_days")]
    pub allowed_days: u32,

    /// Maximum days past the last stay the planner searches
    #[serde(default = "default_horizon_days")]
    pub max_horizon_days: u32,
}

fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

fn default_allowed_days() -> u32 {
    DEFAULT_ALLOWED_DAYS
}

fn default_horizon_days() -> u32 {
    DEFAULT_SEARCH_HORIZON_DAYS
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            allowed_days: default_allowed_days(),
            max_horizon_days: default_horizon_days(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        let config: Self =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validated()
    }

    /// Load configuration from `path`, falling back to the built-in
    /// defaults when the file does not exist. A file that exists but
    /// fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.max_horizon_days == 0 {
            return Err(ConfigError::Parse(
                "max_horizon_days must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file: {0}")]
    Io(String),

    /// Failed to parse the configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(String),
}
