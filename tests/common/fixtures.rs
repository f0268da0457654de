//! Test fixtures and data factories

use pulseboard::core::entities::{
    CopilotAggregatedStats, CopilotOrgUsage, CopilotRepositoryStats, CopilotSuggestionStats,
    CopilotUser, CopilotUserStats,
};
use pulseboard::services::{CopilotService, DashboardService, MetricService};
use pulseboard::storage::{InMemoryDashboardStore, InMemoryMetricStore, MockCopilotStore};
use std::sync::Arc;

/// Metric and dashboard services over fresh in-memory stores
pub fn dashboard_services() -> (MetricService, DashboardService) {
    let metrics = MetricService::new(Arc::new(InMemoryMetricStore::new()));
    let dashboards =
        DashboardService::new(Arc::new(InMemoryDashboardStore::new()), metrics.clone());
    (metrics, dashboards)
}

/// Copilot service over the mock backend
pub fn copilot_service() -> CopilotService {
    CopilotService::new(Arc::new(MockCopilotStore::new()))
}

pub fn suggestions(shown: u64, accepted: u64) -> CopilotSuggestionStats {
    CopilotSuggestionStats { shown, accepted }
}

pub fn repo_stats(id: u64, name: &str, shown: u64, accepted: u64) -> CopilotRepositoryStats {
    CopilotRepositoryStats {
        repository_id: id,
        repository_name: name.to_string(),
        suggestions: suggestions(shown, accepted),
        active_users: 1,
    }
}

pub fn user_stats(id: u64, login: &str, shown: u64, accepted: u64) -> CopilotUserStats {
    CopilotUserStats {
        user_id: id,
        user_login: login.to_string(),
        suggestions: suggestions(shown, accepted),
        repositories: vec![],
    }
}

pub fn seat(id: u64, login: &str, active: bool) -> CopilotUser {
    CopilotUser {
        id,
        login: login.to_string(),
        name: Some(login.to_string()),
        last_activity_at: "2026-06-01T00:00:00Z".to_string(),
        last_activity_editor: active.then(|| "VS Code".to_string()),
        active,
    }
}

/// Build an organization snapshot with the given aggregate counters
pub fn org_snapshot(
    active: usize,
    total_with_access: u64,
    shown: u64,
    accepted: u64,
    repositories: Vec<CopilotRepositoryStats>,
    users: Vec<CopilotUserStats>,
) -> CopilotOrgUsage {
    CopilotOrgUsage {
        org: "acme".to_string(),
        total_users_with_access: total_with_access,
        active_users: (0..active)
            .map(|i| seat(1000 + i as u64, &format!("dev-{}", i), true))
            .collect(),
        inactive_users: (active as u64..total_with_access)
            .map(|i| seat(2000 + i, &format!("idle-{}", i), false))
            .collect(),
        aggregated: CopilotAggregatedStats {
            suggestions: suggestions(shown, accepted),
            active_users: active as u64,
            total_users: total_with_access,
            inactive_users: total_with_access.saturating_sub(active as u64),
            repositories,
        },
        users,
        start_time: "2026-05-01T00:00:00+00:00".to_string(),
        end_time: "2026-05-31T00:00:00+00:00".to_string(),
    }
}
