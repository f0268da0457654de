//! Application state shared across HTTP handlers
//!
//! The state is the one application-context object: constructed at process
//! start, injected into every handler, torn down at shutdown. There are no
//! module-level singletons and no implicit reinitialization.

use crate::config::Config;
use crate::services::{CopilotService, DashboardService, MetricService};
use crate::storage::github::CopilotStore;
use crate::storage::{
    InMemoryDashboardStore, InMemoryMetricStore, MockCopilotStore, seed::seed_sample_data,
};
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// HTTP server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Metric business logic
    pub metrics: MetricService,
    /// Dashboard business logic
    pub dashboards: DashboardService,
    /// Copilot usage fetches and derivation
    pub copilot: CopilotService,
}

impl AppState {
    /// Build stores and services from configuration and seed sample data
    pub async fn new(config: Config) -> Result<Self> {
        let metric_store = Arc::new(InMemoryMetricStore::new());
        let dashboard_store = Arc::new(InMemoryDashboardStore::new());

        let copilot_store: Arc<dyn CopilotStore> = if config.github.live_enabled() {
            info!("Using live GitHub API backend");
            Arc::new(crate::storage::GitHubCopilotClient::new(&config.github)?)
        } else {
            if !config.github.use_mock {
                warn!("GitHub API token is not set, falling back to the mock backend");
            }
            info!("Using mock GitHub usage backend");
            Arc::new(MockCopilotStore::new())
        };

        if config.seed.enabled {
            seed_sample_data(metric_store.as_ref(), dashboard_store.as_ref()).await?;
        }

        let metrics = MetricService::new(metric_store);
        let dashboards = DashboardService::new(dashboard_store, metrics.clone());
        let copilot = CopilotService::new(copilot_store);

        Ok(Self {
            config: Arc::new(config),
            metrics,
            dashboards,
            copilot,
        })
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
