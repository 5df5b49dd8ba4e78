//! Configuration management for verdict
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use verdict::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Classifying via: {}", config.service.base_url);
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `VERDICT__<section>__<key>`
//!
//! Examples:
//! - `VERDICT__SERVICE__BASE_URL=http://classifier:8000`
//! - `VERDICT__SERVICE__REQUEST_TIMEOUT_MS=300000`
//! - `VERDICT__LOGGING__FILTER=verdict=debug`
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/verdict.toml`.
//! This can be overridden using the `VERDICT_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

pub use models::{Config, LoggingConfig, ServiceConfig};
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables (`VERDICT__*`)
    /// 2. `.env` file
    /// 3. TOML file (default: `config/verdict.toml`)
    /// 4. Default values
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is malformed or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Replace the service base address, re-checking the result
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        self.service.base_url = base_url.into();
        validation::validate(&self)?;
        Ok(self)
    }
}
