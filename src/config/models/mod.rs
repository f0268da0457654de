//! Configuration model types

pub mod github;
pub mod server;

pub use github::GitHubConfig;
pub use server::{CorsConfig, ServerConfig};

use serde::{Deserialize, Serialize};

/// Sample-data seeding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Seed sample metrics and dashboards into empty stores at startup
    #[serde(default = "default_seed_enabled")]
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: default_seed_enabled(),
        }
    }
}

fn default_seed_enabled() -> bool {
    true
}
