use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::version::DEFAULT_FALLBACK_KEYS;

/// Default log filter directive
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "LOOSE_VERSION_LOG";

/// Command-line configuration loaded from a JSON file
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Fields probed, in order, when records carry no explicit key
    pub fallback_keys: Vec<String>,
    /// `tracing-subscriber` filter directive
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_keys: DEFAULT_FALLBACK_KEYS.iter().map(|k| k.to_string()).collect(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load the configuration from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Log filter directive, preferring the environment over the file.
    pub fn log_filter(&self) -> String {
        log_filter_with_env(std::env::var(LOG_ENV_VAR).ok(), &self.log_level)
    }
}

fn log_filter_with_env(env_filter: Option<String>, log_level: &str) -> String {
    env_filter
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| log_level.to_string())
}
