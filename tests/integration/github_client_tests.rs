//! Live GitHub client tests against a wiremock server

use crate::common::org_snapshot;
use chrono::{TimeZone, Utc};
use pulseboard::PulseboardError;
use pulseboard::config::GitHubConfig;
use pulseboard::storage::github::{CopilotStore, DateRange, GitHubCopilotClient};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GitHubCopilotClient {
    let config = GitHubConfig {
        use_mock: false,
        api_token: Some("test-token".to_string()),
        api_url: server.uri(),
        organization: Some("acme".to_string()),
        ..Default::default()
    };
    GitHubCopilotClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_org_usage_sends_auth_and_version_headers() {
    let server = MockServer::start().await;
    let snapshot = org_snapshot(2, 3, 500, 250, vec![], vec![]);

    Mock::given(method("GET"))
        .and(path("/orgs/acme/copilot/usage"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Accept", "application/vnd.github+json"))
        .and(header("X-GitHub-Api-Version", "2022-11-28"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&snapshot))
        .expect(1)
        .mount(&server)
        .await;

    let usage = client_for(&server)
        .org_usage(Some("acme"), None)
        .await
        .unwrap();

    assert_eq!(usage.org, "acme");
    assert_eq!(usage.total_users_with_access, 3);
    assert_eq!(usage.aggregated.suggestions.shown, 500);
}

#[tokio::test]
async fn test_org_usage_falls_back_to_configured_organization() {
    let server = MockServer::start().await;
    let snapshot = org_snapshot(1, 1, 10, 5, vec![], vec![]);

    Mock::given(method("GET"))
        .and(path("/orgs/acme/copilot/usage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&snapshot))
        .expect(1)
        .mount(&server)
        .await;

    // No org named in the call; the configured one is used
    let usage = client_for(&server).org_usage(None, None).await.unwrap();
    assert_eq!(usage.org, "acme");
}

#[tokio::test]
async fn test_date_range_is_forwarded_as_query_params() {
    let server = MockServer::start().await;
    let snapshot = org_snapshot(1, 1, 10, 5, vec![], vec![]);

    let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2026, 1, 31, 0, 0, 0).unwrap();

    Mock::given(method("GET"))
        .and(path("/orgs/acme/copilot/usage"))
        .and(query_param("start_time", start.to_rfc3339()))
        .and(query_param("end_time", end.to_rfc3339()))
        .respond_with(ResponseTemplate::new(200).set_body_json(&snapshot))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .org_usage(
            Some("acme"),
            Some(DateRange {
                start_date: start,
                end_date: end,
            }),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_team_usage_uses_numeric_team_path() {
    let server = MockServer::start().await;
    let org = org_snapshot(2, 2, 100, 60, vec![], vec![]);
    let team = json!({
        "team_id": 55,
        "team_name": "platform",
        "total_members_with_access": 2,
        "active_members": org.active_users,
        "inactive_members": [],
        "aggregated": org.aggregated,
        "users": org.users,
        "start_time": org.start_time,
        "end_time": org.end_time
    });

    Mock::given(method("GET"))
        .and(path("/teams/55/copilot/usage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&team))
        .expect(1)
        .mount(&server)
        .await;

    let usage = client_for(&server).team_usage(55, None).await.unwrap();
    assert_eq!(usage.team_id, 55);
    assert_eq!(usage.team_name, "platform");
}

#[tokio::test]
async fn test_upstream_error_embeds_github_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/copilot/usage"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({
                "message": "Resource not accessible by integration"
            })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .org_usage(Some("acme"), None)
        .await
        .unwrap_err();

    match err {
        PulseboardError::Upstream { status, message } => {
            assert_eq!(status, Some(403));
            assert!(message.contains("Resource not accessible"));
        }
        other => panic!("expected Upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_network_failure_has_no_upstream_status() {
    // Nothing listens here; the connection fails outright
    let config = GitHubConfig {
        use_mock: false,
        api_token: Some("test-token".to_string()),
        api_url: "http://127.0.0.1:1".to_string(),
        ..Default::default()
    };
    let client = GitHubCopilotClient::new(&config).unwrap();

    let err = client.org_usage(Some("acme"), None).await.unwrap_err();
    match err {
        PulseboardError::Upstream { status, .. } => assert_eq!(status, None),
        other => panic!("expected Upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_directory_listings_tolerate_extra_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "login": "acme", "url": "https://api.github.com/orgs/acme", "description": "" }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 9, "name": "Platform", "slug": "platform", "privacy": "closed" },
            { "id": 10, "name": "Design", "slug": "design", "privacy": "closed" }
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let orgs = client.user_organizations().await.unwrap();
    assert_eq!(orgs.len(), 1);
    assert_eq!(orgs[0].login, "acme");

    // None resolves to the configured organization
    let teams = client.organization_teams(None).await.unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].slug.as_deref(), Some("platform"));
}
