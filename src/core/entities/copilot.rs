//! GitHub Copilot usage snapshot types
//!
//! These mirror the wire shape of GitHub's Copilot usage REST API
//! (snake_case field names), so snapshots deserialize from the live API
//! without translation.

use serde::{Deserialize, Serialize};

/// A seat holder in an organization or team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopilotUser {
    pub id: u64,
    pub login: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub last_activity_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity_editor: Option<String>,
    pub active: bool,
}

/// Suggestion counters for one scope (repository, user or aggregate)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CopilotSuggestionStats {
    pub shown: u64,
    pub accepted: u64,
}

/// Per-repository usage within a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopilotRepositoryStats {
    pub repository_id: u64,
    pub repository_name: String,
    pub suggestions: CopilotSuggestionStats,
    pub active_users: u64,
}

/// A user's repository breakdown entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopilotUserRepositoryStats {
    pub repository_id: u64,
    pub repository_name: String,
    pub suggestions: CopilotSuggestionStats,
}

/// Per-user usage within a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopilotUserStats {
    pub user_id: u64,
    pub user_login: String,
    pub suggestions: CopilotSuggestionStats,
    pub repositories: Vec<CopilotUserRepositoryStats>,
}

/// Aggregated counters over the whole snapshot
///
/// `active_users` here and the length of the snapshot's active-entity
/// sequence are independently reported; neither is validated against the
/// other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopilotAggregatedStats {
    pub suggestions: CopilotSuggestionStats,
    pub active_users: u64,
    pub total_users: u64,
    pub inactive_users: u64,
    pub repositories: Vec<CopilotRepositoryStats>,
}

/// Organization-scoped usage snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopilotOrgUsage {
    pub org: String,
    pub total_users_with_access: u64,
    pub active_users: Vec<CopilotUser>,
    pub inactive_users: Vec<CopilotUser>,
    pub aggregated: CopilotAggregatedStats,
    pub users: Vec<CopilotUserStats>,
    pub start_time: String,
    pub end_time: String,
}

/// Team-scoped usage snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopilotTeamUsage {
    pub team_id: u64,
    pub team_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_slug: Option<String>,
    pub total_members_with_access: u64,
    pub active_members: Vec<CopilotUser>,
    pub inactive_members: Vec<CopilotUser>,
    pub aggregated: CopilotAggregatedStats,
    pub users: Vec<CopilotUserStats>,
    pub start_time: String,
    pub end_time: String,
}

/// Organization directory entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationSummary {
    pub id: u64,
    pub login: String,
}

/// Team directory entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSummary {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}
