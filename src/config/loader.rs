use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Env var consulted when the config file carries no API token.
pub const TOKEN_ENV_VAR: &str = "LAYAR_API_TOKEN";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/layar/config.toml` on Unix/macOS, or equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("layar").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from a specific file.
    ///
    /// - If the file doesn't exist, starts from `Config::default()`.
    /// - If the file exists, parses it as TOML.
    /// - When the file carries no API token, `LAYAR_API_TOKEN` is consulted.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            Config::default()
        };

        if config.catalog.api_token.is_empty() {
            if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
                config.catalog.api_token = token;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The API token is present (file or env)
    /// - The catalog base URL is not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.api_token.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "API token is not set; add 'api_token' under [catalog] or export {}",
                    TOKEN_ENV_VAR
                ),
            });
        }

        if self.catalog.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Catalog base_url must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
