//! Storage layer for Pulseboard
//!
//! Store traits isolate the services from where data actually lives: the
//! in-memory maps used today, or a real database behind the same seam
//! later. The GitHub module houses the two Copilot usage backends.

pub mod dashboards;
pub mod github;
pub mod metrics;
pub mod seed;

pub use dashboards::{DashboardFilter, DashboardStore, InMemoryDashboardStore};
pub use github::{CopilotStore, DateRange, GitHubCopilotClient, MockCopilotStore};
pub use metrics::{InMemoryMetricStore, MetricFilter, MetricStore};
