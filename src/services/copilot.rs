//! Copilot usage service
//!
//! Fetches usage snapshots from the configured backend and derives
//! secondary analytics from them. Derivation is pure: no mutation, no
//! persistence, one request/response transaction per call.

use crate::core::entities::{
    CopilotAggregatedStats, CopilotOrgUsage, CopilotRepositoryStats, CopilotSuggestionStats,
    CopilotTeamUsage, CopilotUserStats, OrganizationSummary, TeamSummary,
};
use crate::storage::github::{CopilotStore, DateRange};
use crate::utils::error::Result;
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::Arc;

/// Ranking lists are capped at this many entries
const TOP_N: usize = 5;

/// Entries must exceed this many shown suggestions to be ranked by
/// acceptance rate; below it the rate is not statistically meaningful.
const EFFICIENCY_FLOOR: u64 = 100;

/// Analytics derived from a usage snapshot
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetrics {
    /// Percentage of seat holders who are active
    pub usage_rate: f64,
    /// Percentage of shown suggestions that were accepted
    pub acceptance_rate: f64,
    pub suggestions_per_active_user: f64,
    pub accepted_suggestions_per_active_user: f64,
    pub most_active_repositories: Vec<CopilotRepositoryStats>,
    pub most_efficient_repositories: Vec<CopilotRepositoryStats>,
    pub most_active_users: Vec<CopilotUserStats>,
    pub most_efficient_users: Vec<CopilotUserStats>,
}

/// Service for Copilot usage data and derived analytics
#[derive(Clone)]
pub struct CopilotService {
    store: Arc<dyn CopilotStore>,
}

impl CopilotService {
    pub fn new(store: Arc<dyn CopilotStore>) -> Self {
        Self { store }
    }

    /// Usage snapshot for an organization
    pub async fn org_usage(
        &self,
        org: Option<&str>,
        range: Option<DateRange>,
    ) -> Result<CopilotOrgUsage> {
        self.store.org_usage(org, range).await
    }

    /// Usage snapshot for a team
    pub async fn team_usage(
        &self,
        team_id: u64,
        range: Option<DateRange>,
    ) -> Result<CopilotTeamUsage> {
        self.store.team_usage(team_id, range).await
    }

    /// Organizations visible to the authenticated identity
    pub async fn user_organizations(&self) -> Result<Vec<OrganizationSummary>> {
        self.store.user_organizations().await
    }

    /// Teams within an organization (`None` selects the configured one)
    pub async fn organization_teams(&self, org: Option<&str>) -> Result<Vec<TeamSummary>> {
        self.store.organization_teams(org).await
    }

    /// Derive analytics from an organization snapshot
    pub fn calculate_org_metrics(&self, usage: &CopilotOrgUsage) -> UsageMetrics {
        derive_metrics(
            usage.active_users.len() as u64,
            usage.total_users_with_access,
            &usage.aggregated,
            &usage.users,
        )
    }

    /// Derive analytics from a team snapshot
    pub fn calculate_team_metrics(&self, usage: &CopilotTeamUsage) -> UsageMetrics {
        derive_metrics(
            usage.active_members.len() as u64,
            usage.total_members_with_access,
            &usage.aggregated,
            &usage.users,
        )
    }
}

/// Shared derivation over the parts org and team snapshots have in common
///
/// `active_count` comes from the snapshot's active-entity sequence, not from
/// `aggregated.active_users`; the two are independently reported.
fn derive_metrics(
    active_count: u64,
    total_with_access: u64,
    aggregated: &CopilotAggregatedStats,
    users: &[CopilotUserStats],
) -> UsageMetrics {
    let suggestions = aggregated.suggestions;

    let usage_rate = if total_with_access > 0 {
        active_count as f64 / total_with_access as f64 * 100.0
    } else {
        0.0
    };

    let acceptance_rate = if suggestions.shown > 0 {
        suggestions.accepted as f64 / suggestions.shown as f64 * 100.0
    } else {
        0.0
    };

    let (suggestions_per_active_user, accepted_suggestions_per_active_user) = if active_count > 0 {
        (
            suggestions.shown as f64 / active_count as f64,
            suggestions.accepted as f64 / active_count as f64,
        )
    } else {
        (0.0, 0.0)
    };

    UsageMetrics {
        usage_rate,
        acceptance_rate,
        suggestions_per_active_user,
        accepted_suggestions_per_active_user,
        most_active_repositories: top_by_shown(&aggregated.repositories, |r| r.suggestions),
        most_efficient_repositories: top_by_acceptance(&aggregated.repositories, |r| {
            r.suggestions
        }),
        most_active_users: top_by_shown(users, |u| u.suggestions),
        most_efficient_users: top_by_acceptance(users, |u| u.suggestions),
    }
}

/// Top entries by shown suggestions, descending
///
/// The sort is stable, so ties keep the order of the source collection.
fn top_by_shown<T, F>(items: &[T], suggestions: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> CopilotSuggestionStats,
{
    let mut ranked = items.to_vec();
    ranked.sort_by(|a, b| suggestions(b).shown.cmp(&suggestions(a).shown));
    ranked.truncate(TOP_N);
    ranked
}

/// Top entries by acceptance rate among those past the significance floor
fn top_by_acceptance<T, F>(items: &[T], suggestions: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> CopilotSuggestionStats,
{
    let mut ranked: Vec<T> = items
        .iter()
        .filter(|item| suggestions(item).shown > EFFICIENCY_FLOOR)
        .cloned()
        .collect();
    ranked.sort_by(|a, b| {
        acceptance(suggestions(b))
            .partial_cmp(&acceptance(suggestions(a)))
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(TOP_N);
    ranked
}

fn acceptance(stats: CopilotSuggestionStats) -> f64 {
    stats.accepted as f64 / stats.shown as f64
}
