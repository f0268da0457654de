//! Usage-derivation tests over handcrafted snapshots

use crate::common::{copilot_service, org_snapshot, repo_stats, user_stats};

#[test]
fn test_documented_snapshot_scenario() {
    // 1000 shown / 650 accepted, 8 of 10 seats active
    let usage = org_snapshot(8, 10, 1000, 650, vec![], vec![]);
    let metrics = copilot_service().calculate_org_metrics(&usage);

    assert!((metrics.acceptance_rate - 65.0).abs() < 1e-9);
    assert!((metrics.usage_rate - 80.0).abs() < 1e-9);
}

#[test]
fn test_empty_snapshot_yields_zero_rates() {
    let usage = org_snapshot(0, 0, 0, 0, vec![], vec![]);
    let metrics = copilot_service().calculate_org_metrics(&usage);

    assert_eq!(metrics.acceptance_rate, 0.0);
    assert_eq!(metrics.usage_rate, 0.0);
    assert!(metrics.most_active_repositories.is_empty());
    assert!(metrics.most_efficient_users.is_empty());
}

#[test]
fn test_rankings_cap_at_five_and_respect_floor() {
    let repositories: Vec<_> = (1..=8)
        .map(|i| repo_stats(i, &format!("repo-{}", i), i * 200, i * 90))
        .collect();
    let users: Vec<_> = (1..=8)
        .map(|i| user_stats(i, &format!("dev-{}", i), i * 150, i * 60))
        .collect();
    let usage = org_snapshot(8, 8, 9000, 3600, repositories, users);

    let metrics = copilot_service().calculate_org_metrics(&usage);

    assert_eq!(metrics.most_active_repositories.len(), 5);
    assert_eq!(metrics.most_active_users.len(), 5);
    // Descending by shown
    let shown: Vec<u64> = metrics
        .most_active_repositories
        .iter()
        .map(|r| r.suggestions.shown)
        .collect();
    assert_eq!(shown, vec![1600, 1400, 1200, 1000, 800]);

    for repo in &metrics.most_efficient_repositories {
        assert!(repo.suggestions.shown > 100);
    }
    for user in &metrics.most_efficient_users {
        assert!(user.suggestions.shown > 100);
    }
}

#[test]
fn test_efficiency_ranking_orders_by_acceptance_rate() {
    let repositories = vec![
        repo_stats(1, "steady", 1000, 500),  // 50%
        repo_stats(2, "sharp", 200, 180),    // 90%
        repo_stats(3, "noisy", 5000, 1500),  // 30%
        repo_stats(4, "sampled", 90, 89),    // under the floor
    ];
    let usage = org_snapshot(4, 4, 6290, 2269, repositories, vec![]);

    let metrics = copilot_service().calculate_org_metrics(&usage);
    let names: Vec<&str> = metrics
        .most_efficient_repositories
        .iter()
        .map(|r| r.repository_name.as_str())
        .collect();
    assert_eq!(names, vec!["sharp", "steady", "noisy"]);
}

#[tokio::test]
async fn test_mock_backend_snapshots_derive_cleanly() {
    let service = copilot_service();

    let org = service.org_usage(Some("acme"), None).await.unwrap();
    let metrics = service.calculate_org_metrics(&org);
    assert!((0.0..=100.0).contains(&metrics.usage_rate));
    assert!((0.0..=100.0).contains(&metrics.acceptance_rate));
    assert!(metrics.suggestions_per_active_user >= metrics.accepted_suggestions_per_active_user);

    let team = service.team_usage(7, None).await.unwrap();
    let metrics = service.calculate_team_metrics(&team);
    assert!((0.0..=100.0).contains(&metrics.usage_rate));
    assert!((0.0..=100.0).contains(&metrics.acceptance_rate));
}
