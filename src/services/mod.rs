//! Business-logic services
//!
//! Services orchestrate the stores and hold every rule the HTTP layer
//! should not: trend math, referential checks, usage derivation. Each
//! operation is a single request/response transaction.

pub mod copilot;
pub mod dashboards;
pub mod metrics;

pub use copilot::{CopilotService, UsageMetrics};
pub use dashboards::{DashboardService, DashboardUpdate, NewWidget, WidgetUpdate};
pub use metrics::{MetricService, NewMetric, ThresholdStatus};
