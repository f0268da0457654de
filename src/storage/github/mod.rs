//! GitHub Copilot usage backends
//!
//! The `CopilotStore` trait abstracts where usage snapshots come from:
//! either the live GitHub REST API or the mock generator. Which one backs
//! the services is a configuration decision; the contracts are identical.

pub mod client;
pub mod mock;

pub use client::GitHubCopilotClient;
pub use mock::MockCopilotStore;

use crate::core::entities::{CopilotOrgUsage, CopilotTeamUsage, OrganizationSummary, TeamSummary};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Reporting window for a usage query
///
/// Passed through to the backend verbatim; an inverted range
/// (`end_date < start_date`) is caller-defined and not rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Source of Copilot usage snapshots and GitHub directory listings
#[async_trait]
pub trait CopilotStore: Send + Sync {
    /// Usage snapshot for an organization; `None` selects the configured one
    async fn org_usage(
        &self,
        org: Option<&str>,
        range: Option<DateRange>,
    ) -> Result<CopilotOrgUsage>;

    /// Usage snapshot for a team
    async fn team_usage(&self, team_id: u64, range: Option<DateRange>)
    -> Result<CopilotTeamUsage>;

    /// Organizations visible to the authenticated identity
    async fn user_organizations(&self) -> Result<Vec<OrganizationSummary>>;

    /// Teams within an organization; `None` selects the configured one
    async fn organization_teams(&self, org: Option<&str>) -> Result<Vec<TeamSummary>>;
}
