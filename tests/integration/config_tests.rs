//! Configuration loading tests

use pulseboard::{Config, PulseboardError};
use std::io::Write;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn test_load_full_config_file() {
    let file = write_config(
        r#"
server:
  host: 0.0.0.0
  port: 9191
  cors:
    enabled: true
github:
  use_mock: true
  organization: acme
  default_team: platform
seed:
  enabled: false
"#,
    );

    let config = Config::from_file(file.path()).await.unwrap();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9191);
    assert_eq!(config.github.organization.as_deref(), Some("acme"));
    assert_eq!(config.github.default_team.as_deref(), Some("platform"));
    assert!(!config.seed.enabled);
}

#[tokio::test]
async fn test_partial_file_fills_defaults() {
    let file = write_config("server:\n  port: 3000\n");

    let config = Config::from_file(file.path()).await.unwrap();
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert!(config.github.use_mock);
    assert_eq!(config.github.api_url, "https://api.github.com");
    assert!(config.seed.enabled);
}

#[tokio::test]
async fn test_missing_file_is_config_error() {
    let err = Config::from_file("definitely/not/here.yaml")
        .await
        .unwrap_err();
    assert!(matches!(err, PulseboardError::Config(_)));
}

#[tokio::test]
async fn test_malformed_yaml_is_config_error() {
    let file = write_config("server: [not, a, mapping\n");

    let err = Config::from_file(file.path()).await.unwrap_err();
    assert!(matches!(err, PulseboardError::Config(_)));
}

#[tokio::test]
async fn test_invalid_values_rejected() {
    let file = write_config("server:\n  port: 0\n");

    let err = Config::from_file(file.path()).await.unwrap_err();
    assert!(matches!(err, PulseboardError::Config(_)));
}
