//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for explicit configuration and
//! the run_server function for automatic configuration loading.

use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::server::server::HttpServer;
use crate::utils::error::{PulseboardError, Result};
use tracing::info;

/// Server builder for explicit configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| PulseboardError::config("Configuration is required"))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    info!("Starting Pulseboard");

    let config_path =
        std::env::var("PULSEBOARD_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    info!("Loading configuration file: {}", config_path);

    let config = match Config::from_file(&config_path).await {
        Ok(config) => {
            info!("Configuration file loaded successfully");
            config
        }
        Err(e) => {
            info!(
                "Configuration file loading failed, using defaults with env overrides: {}",
                e
            );
            Config::from_env()?
        }
    };

    let server = HttpServer::new(&config).await?;
    info!(
        "Server starting at: http://{}:{}",
        config.server.host, config.server.port
    );
    info!("API endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  /metrics - Metric listing and filtering");
    info!("   GET  /dashboards - Dashboard listing and filtering");
    info!("   GET  /github/copilot/org/{{org}} - Copilot usage for an organization");
    info!("   GET  /github/copilot/team/{{id}} - Copilot usage for a team");

    server.start().await
}
