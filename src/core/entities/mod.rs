//! Domain entities
//!
//! Plain record types plus their factory constructors. Entities carry no
//! behavior beyond construction; all mutation goes through the services.

pub mod copilot;
pub mod dashboard;
pub mod metric;

pub use copilot::{
    CopilotAggregatedStats, CopilotOrgUsage, CopilotRepositoryStats, CopilotSuggestionStats,
    CopilotTeamUsage, CopilotUser, CopilotUserRepositoryStats, CopilotUserStats,
    OrganizationSummary, TeamSummary,
};
pub use dashboard::{Dashboard, Widget, WidgetPosition, WidgetSize, WidgetType};
pub use metric::{
    Metric, MetricMetadata, MetricPeriod, MetricThreshold, MetricType, MetricValue, TrendDirection,
};
