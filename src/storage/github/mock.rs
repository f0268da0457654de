//! Mock Copilot usage backend
//!
//! Fabricates snapshots that resemble real GitHub Copilot usage data:
//! fifteen active and eight inactive seat holders, six repositories, and a
//! 30-80% acceptance band. The exact random values are not a contract;
//! only the shape and the internal totals are.

use super::{CopilotStore, DateRange};
use crate::core::entities::{
    CopilotAggregatedStats, CopilotOrgUsage, CopilotRepositoryStats, CopilotSuggestionStats,
    CopilotTeamUsage, CopilotUser, CopilotUserRepositoryStats, CopilotUserStats,
    OrganizationSummary, TeamSummary,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use tracing::debug;

const ACTIVE_USERS: usize = 15;
const INACTIVE_USERS: usize = 8;
const TEAM_ACTIVE_MEMBERS: usize = 5;
const TEAM_INACTIVE_MEMBERS: usize = 3;

const EDITORS: [&str; 5] = ["VS Code", "Visual Studio", "JetBrains", "Vim", "Neovim"];

const REPOSITORIES: [(u64, &str); 6] = [
    (1, "frontend-app"),
    (2, "backend-api"),
    (3, "shared-libs"),
    (4, "internal-tools"),
    (5, "docs-site"),
    (6, "mobile-app"),
];

/// Mock usage backend
#[derive(Debug, Clone, Default)]
pub struct MockCopilotStore;

impl MockCopilotStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CopilotStore for MockCopilotStore {
    async fn org_usage(
        &self,
        org: Option<&str>,
        range: Option<DateRange>,
    ) -> Result<CopilotOrgUsage> {
        debug!(
            "Serving mock organization Copilot usage for: {}",
            org.unwrap_or("default org")
        );

        let now = Utc::now();
        let start = range.map_or(now - Duration::days(30), |r| r.start_date);
        let end = range.map_or(now, |r| r.end_date);

        Ok(generate_org_usage(
            org.unwrap_or("mock-organization"),
            start,
            end,
        ))
    }

    async fn team_usage(
        &self,
        team_id: u64,
        range: Option<DateRange>,
    ) -> Result<CopilotTeamUsage> {
        debug!("Serving mock team Copilot usage for team: {}", team_id);

        let org = self.org_usage(Some("mock-org"), range).await?;

        // The team is a subset of the organization
        let active_members: Vec<CopilotUser> =
            org.active_users.iter().take(TEAM_ACTIVE_MEMBERS).cloned().collect();
        let inactive_members: Vec<CopilotUser> = org
            .inactive_users
            .iter()
            .take(TEAM_INACTIVE_MEMBERS)
            .cloned()
            .collect();

        let member_ids: HashSet<u64> = active_members.iter().map(|m| m.id).collect();
        let users: Vec<CopilotUserStats> = org
            .users
            .iter()
            .filter(|u| member_ids.contains(&u.user_id))
            .cloned()
            .collect();

        let suggestions = total_suggestions(&users);

        // Keep only repositories the team members touched
        let team_repo_ids: HashSet<u64> = users
            .iter()
            .flat_map(|u| u.repositories.iter().map(|r| r.repository_id))
            .collect();
        let repositories: Vec<CopilotRepositoryStats> = org
            .aggregated
            .repositories
            .iter()
            .filter(|r| team_repo_ids.contains(&r.repository_id))
            .cloned()
            .collect();

        let slug = format!("team-{}", team_id);
        Ok(CopilotTeamUsage {
            team_id,
            team_name: slug.clone(),
            team_slug: Some(slug),
            total_members_with_access: (active_members.len() + inactive_members.len()) as u64,
            aggregated: CopilotAggregatedStats {
                suggestions,
                active_users: active_members.len() as u64,
                total_users: (active_members.len() + inactive_members.len()) as u64,
                inactive_users: inactive_members.len() as u64,
                repositories,
            },
            active_members,
            inactive_members,
            users,
            start_time: org.start_time,
            end_time: org.end_time,
        })
    }

    async fn user_organizations(&self) -> Result<Vec<OrganizationSummary>> {
        debug!("Serving mock organization directory");

        Ok(vec![
            OrganizationSummary {
                id: 1,
                login: "mock-organization".to_string(),
            },
            OrganizationSummary {
                id: 2,
                login: "mock-labs".to_string(),
            },
        ])
    }

    async fn organization_teams(&self, _org: Option<&str>) -> Result<Vec<TeamSummary>> {
        debug!("Serving mock team directory");

        Ok(vec![
            team(101, "Engineering", "engineering"),
            team(102, "Design", "design"),
            team(103, "Product", "product"),
            team(104, "Platform", "platform"),
            team(105, "DevOps", "devops"),
        ])
    }
}

fn team(id: u64, name: &str, slug: &str) -> TeamSummary {
    TeamSummary {
        id,
        name: name.to_string(),
        slug: Some(slug.to_string()),
    }
}

fn generate_org_usage(org: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> CopilotOrgUsage {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    let active_users: Vec<CopilotUser> = (0..ACTIVE_USERS)
        .map(|i| CopilotUser {
            id: 1000 + i as u64,
            login: format!("active-user-{}", i),
            name: Some(format!("Active User {}", i)),
            last_activity_at: (now - Duration::seconds(rng.gen_range(0..7 * 86_400))).to_rfc3339(),
            last_activity_editor: Some(EDITORS[rng.gen_range(0..EDITORS.len())].to_string()),
            active: true,
        })
        .collect();

    let inactive_users: Vec<CopilotUser> = (0..INACTIVE_USERS)
        .map(|i| CopilotUser {
            id: 2000 + i as u64,
            login: format!("inactive-user-{}", i),
            name: Some(format!("Inactive User {}", i)),
            last_activity_at: (now - Duration::days(rng.gen_range(30..90))).to_rfc3339(),
            last_activity_editor: None,
            active: false,
        })
        .collect();

    let repositories: Vec<CopilotRepositoryStats> = REPOSITORIES
        .iter()
        .map(|(id, name)| {
            let shown = rng.gen_range(1_000..11_000);
            let accepted = (shown as f64 * rng.gen_range(0.3..0.8)) as u64;
            CopilotRepositoryStats {
                repository_id: *id,
                repository_name: name.to_string(),
                suggestions: CopilotSuggestionStats { shown, accepted },
                active_users: rng.gen_range(1..=ACTIVE_USERS as u64),
            }
        })
        .collect();

    let users: Vec<CopilotUserStats> = active_users
        .iter()
        .map(|user| {
            // Each user works on one to four repositories
            let mut picks: Vec<&(u64, &str)> = REPOSITORIES.iter().collect();
            picks.shuffle(&mut rng);
            let user_repos: Vec<CopilotUserRepositoryStats> = picks
                .into_iter()
                .take(rng.gen_range(1..=4))
                .map(|(id, name)| {
                    let shown = rng.gen_range(100..2_100);
                    let accepted = (shown as f64 * rng.gen_range(0.3..0.8)) as u64;
                    CopilotUserRepositoryStats {
                        repository_id: *id,
                        repository_name: name.to_string(),
                        suggestions: CopilotSuggestionStats { shown, accepted },
                    }
                })
                .collect();

            CopilotUserStats {
                user_id: user.id,
                user_login: user.login.clone(),
                suggestions: CopilotSuggestionStats {
                    shown: user_repos.iter().map(|r| r.suggestions.shown).sum(),
                    accepted: user_repos.iter().map(|r| r.suggestions.accepted).sum(),
                },
                repositories: user_repos,
            }
        })
        .collect();

    let suggestions = total_suggestions(&users);

    CopilotOrgUsage {
        org: org.to_string(),
        total_users_with_access: (active_users.len() + inactive_users.len()) as u64,
        aggregated: CopilotAggregatedStats {
            suggestions,
            active_users: active_users.len() as u64,
            total_users: (active_users.len() + inactive_users.len()) as u64,
            inactive_users: inactive_users.len() as u64,
            repositories,
        },
        active_users,
        inactive_users,
        users,
        start_time: start.to_rfc3339(),
        end_time: end.to_rfc3339(),
    }
}

fn total_suggestions(users: &[CopilotUserStats]) -> CopilotSuggestionStats {
    CopilotSuggestionStats {
        shown: users.iter().map(|u| u.suggestions.shown).sum(),
        accepted: users.iter().map(|u| u.suggestions.accepted).sum(),
    }
}
