//! GitHub integration configuration

use serde::{Deserialize, Serialize};

/// GitHub Copilot usage API configuration
///
/// Selects which backend serves usage snapshots: the random mock generator
/// or the live GitHub REST API. The service contracts are identical either
/// way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Serve mock usage data instead of calling the GitHub API
    #[serde(default = "default_true")]
    pub use_mock: bool,
    /// API token for the live GitHub API
    pub api_token: Option<String>,
    /// Base URL of the GitHub REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Value sent in the X-GitHub-Api-Version header
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Organization queried when a request names none
    pub organization: Option<String>,
    /// Team listed by the default-team directory endpoint
    pub default_team: Option<String>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            use_mock: true,
            api_token: None,
            api_url: default_api_url(),
            api_version: default_api_version(),
            organization: None,
            default_team: None,
        }
    }
}

impl GitHubConfig {
    /// Whether the live API backend can be used
    ///
    /// Requires the mock toggle off and a token present; without a token the
    /// service falls back to the mock backend.
    pub fn live_enabled(&self) -> bool {
        !self.use_mock && self.api_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Validate GitHub configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_url.is_empty() {
            return Err("GitHub API URL cannot be empty".to_string());
        }
        if self.api_version.is_empty() {
            return Err("GitHub API version cannot be empty".to_string());
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_api_version() -> String {
    "2022-11-28".to_string()
}
