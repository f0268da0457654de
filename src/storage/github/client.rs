//! Live GitHub API backend
//!
//! Thin pass-through client over GitHub's Copilot usage endpoints. Requests
//! carry the bearer token and API-version headers; non-success responses
//! become `Upstream` errors embedding the upstream message. No retries and
//! no local recovery: a failed call propagates to the caller.

use super::{CopilotStore, DateRange};
use crate::config::GitHubConfig;
use crate::core::entities::{CopilotOrgUsage, CopilotTeamUsage, OrganizationSummary, TeamSummary};
use crate::utils::error::{PulseboardError, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";

/// Client for GitHub's Copilot usage REST API
#[derive(Debug, Clone)]
pub struct GitHubCopilotClient {
    client: reqwest::Client,
    base_url: String,
    organization: Option<String>,
}

impl GitHubCopilotClient {
    /// Create a client from the GitHub configuration
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let token = config
            .api_token
            .as_deref()
            .ok_or_else(|| PulseboardError::config("GitHub API token is not set"))?;
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| PulseboardError::config(format!("Invalid GitHub API token: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            API_VERSION_HEADER,
            HeaderValue::from_str(&config.api_version)
                .map_err(|e| PulseboardError::config(format!("Invalid API version: {}", e)))?,
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("pulseboard"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(PulseboardError::HttpClient)?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            organization: config.organization.clone(),
        })
    }

    /// Execute a GET request and deserialize the JSON response
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GitHub API request: GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| PulseboardError::upstream(None, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body).unwrap_or_else(|| "Unknown error".to_string());
            warn!("GitHub API returned {} for {}: {}", status, url, message);
            return Err(PulseboardError::upstream(Some(status.as_u16()), message));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| PulseboardError::upstream(None, format!("Malformed response: {}", e)))
    }

    fn range_params(range: Option<DateRange>) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(range) = range {
            params.push(("start_time", range.start_date.to_rfc3339()));
            params.push(("end_time", range.end_date.to_rfc3339()));
        }
        params
    }
}

#[async_trait]
impl CopilotStore for GitHubCopilotClient {
    async fn org_usage(
        &self,
        org: Option<&str>,
        range: Option<DateRange>,
    ) -> Result<CopilotOrgUsage> {
        let org = org
            .or(self.organization.as_deref())
            .ok_or_else(|| PulseboardError::validation("No organization specified"))?;

        self.get_json(
            &format!("/orgs/{}/copilot/usage", org),
            &Self::range_params(range),
        )
        .await
    }

    async fn team_usage(
        &self,
        team_id: u64,
        range: Option<DateRange>,
    ) -> Result<CopilotTeamUsage> {
        self.get_json(
            &format!("/teams/{}/copilot/usage", team_id),
            &Self::range_params(range),
        )
        .await
    }

    async fn user_organizations(&self) -> Result<Vec<OrganizationSummary>> {
        self.get_json("/user/orgs", &[]).await
    }

    async fn organization_teams(&self, org: Option<&str>) -> Result<Vec<TeamSummary>> {
        let org = org
            .or(self.organization.as_deref())
            .ok_or_else(|| PulseboardError::validation("No organization specified"))?;

        self.get_json(&format!("/orgs/{}/teams", org), &[]).await
    }
}

/// Pull the `message` field out of a GitHub error body, if present
fn extract_error_message(body: &str) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .or_else(|| Some(body.to_string())),
        Err(_) => Some(body.to_string()),
    }
}
