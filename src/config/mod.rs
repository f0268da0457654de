//! Configuration management for Pulseboard
//!
//! This module handles loading and validation of all service configuration.
//! Configuration comes from a YAML file, with environment variables layered
//! on top.

pub mod models;

pub use models::*;

use crate::utils::error::{PulseboardError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Default configuration file path, overridable via `PULSEBOARD_CONFIG`
pub const DEFAULT_CONFIG_PATH: &str = "config/pulseboard.yaml";

/// Main configuration struct for the service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// GitHub Copilot usage integration
    #[serde(default)]
    pub github: GitHubConfig,
    /// Sample-data seeding
    #[serde(default)]
    pub seed: SeedConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PulseboardError::config(format!("Failed to read config file: {}", e)))?;

        let mut config: Config = serde_yaml::from_str(&content)
            .map_err(|e| PulseboardError::config(format!("Failed to parse config: {}", e)))?;

        config.apply_env_overrides();
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables over defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Config::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Layer recognized environment variables on top of the loaded values
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = env::var("PULSEBOARD_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PULSEBOARD_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(mock) = env::var("PULSEBOARD_ENABLE_MOCK_API") {
            self.github.use_mock = mock == "true" || mock == "1";
        }
        if let Ok(token) = env::var("GITHUB_API_TOKEN") {
            self.github.api_token = Some(token);
        }
        if let Ok(url) = env::var("GITHUB_API_URL") {
            self.github.api_url = url;
        }
        if let Ok(version) = env::var("GITHUB_API_VERSION") {
            self.github.api_version = version;
        }
        if let Ok(org) = env::var("GITHUB_ORGANIZATION") {
            self.github.organization = Some(org);
        }
        if let Ok(team) = env::var("GITHUB_DEFAULT_TEAM") {
            self.github.default_team = Some(team);
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| PulseboardError::config(format!("Server config error: {}", e)))?;

        self.github
            .validate()
            .map_err(|e| PulseboardError::config(format!("GitHub config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }
}
