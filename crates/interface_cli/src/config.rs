//! CLI configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Runtime configuration, layered from defaults and `CLAIMS_*` environment
/// variables (e.g. `CLAIMS_RULES_PATH`, `CLAIMS_LOG_LEVEL`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Path to the rules JSON file; built-in demo rules when unset
    pub rules_path: Option<PathBuf>,
    /// Log level filter
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            rules_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from the environment.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("CLAIMS"))
            .build()?
            .try_deserialize()
    }
}
