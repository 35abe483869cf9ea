//! Unit tests for credential loading

use super::*;
use crate::error::ErrorKind;
use std::io::Write;
use tempfile::NamedTempFile;

fn keys_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_credentials() {
    let file = keys_file(
        r#"{
            "MY_TEAM_ID": 57796,
            "ACCESS_KEY": "abc123",
            "DEV_ID": 12,
            "DEV_KEY": "devkey",
            "MY_MEMBER_ID": "98765"
        }"#,
    );

    let creds = Credentials::load(file.path()).unwrap();
    assert_eq!(creds.team_id, TeamId::new(57796));
    assert_eq!(creds.access_key, "abc123");
    assert_eq!(creds.dev_id.as_deref(), Some("12"));
    assert_eq!(creds.dev_key.as_deref(), Some("devkey"));
    assert_eq!(creds.member_id.as_deref(), Some("98765"));
}

#[test]
fn test_optional_fields_may_be_absent_or_null() {
    let file = keys_file(r#"{"MY_TEAM_ID": "57796", "ACCESS_KEY": "abc123", "DEV_ID": null}"#);

    let creds = Credentials::load(file.path()).unwrap();
    assert_eq!(creds.team_id, TeamId::new(57796));
    assert!(creds.dev_id.is_none());
    assert!(creds.dev_key.is_none());
    assert!(creds.member_id.is_none());
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist");

    let err = Credentials::load(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    match err {
        BrError::Config { path: p, .. } => assert_eq!(p, path),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_malformed_json_is_config_error() {
    let file = keys_file("MY_TEAM_ID=57796");
    let err = Credentials::load(file.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_missing_access_key_is_config_error() {
    let file = keys_file(r#"{"MY_TEAM_ID": 57796, "DEV_ID": 1}"#);
    let err = Credentials::load(file.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.to_string().contains("ACCESS_KEY"));
}

#[test]
fn test_missing_team_id_is_config_error() {
    let file = keys_file(r#"{"ACCESS_KEY": "abc123"}"#);
    let err = Credentials::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("MY_TEAM_ID"));
}

#[test]
fn test_numeric_access_key_is_accepted() {
    let file = keys_file(r#"{"MY_TEAM_ID": 1, "ACCESS_KEY": 123456}"#);
    let creds = Credentials::load(file.path()).unwrap();
    assert_eq!(creds.access_key, "123456");
}

#[test]
fn test_null_access_key_is_config_error() {
    let file = keys_file(r#"{"MY_TEAM_ID": 1, "ACCESS_KEY": null}"#);
    let err = Credentials::load(file.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_zero_team_id_is_config_error() {
    for contents in [
        r#"{"MY_TEAM_ID": 0, "ACCESS_KEY": "abc123"}"#,
        r#"{"MY_TEAM_ID": "0", "ACCESS_KEY": "abc123"}"#,
    ] {
        let err = Credentials::load(keys_file(contents).path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("zero"));
    }
}

#[test]
fn test_empty_access_key_is_config_error() {
    let file = keys_file(r#"{"MY_TEAM_ID": 1, "ACCESS_KEY": "  "}"#);
    let err = Credentials::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("ACCESS_KEY is empty"));
}

#[test]
fn test_debug_redacts_keys() {
    let creds = Credentials::new(TeamId::new(1), "super-secret").with_developer("7", "dev-secret");
    let debug = format!("{:?}", creds);
    assert!(!debug.contains("super-secret"));
    assert!(!debug.contains("dev-secret"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn test_client_config_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, BR_API_BASE_URL);
    assert!(config.timeout.is_none());

    let config = config
        .with_base_url("http://localhost:1234")
        .with_timeout(Some(Duration::from_secs(5)));
    assert_eq!(config.base_url, "http://localhost:1234");
    assert_eq!(config.timeout, Some(Duration::from_secs(5)));
}

#[test]
fn test_resolve_keys_path_prefers_explicit() {
    let explicit = PathBuf::from("/somewhere/keys.json");
    assert_eq!(resolve_keys_path(Some(explicit.clone())), explicit);
}

#[test]
fn test_resolve_keys_path_from_env() {
    std::env::set_var(KEYS_FILE_ENV_VAR, "/from/env/.brkeys");
    let path = resolve_keys_path(None);
    std::env::remove_var(KEYS_FILE_ENV_VAR);

    assert_eq!(path, PathBuf::from("/from/env/.brkeys"));
}

#[test]
fn test_user_keys_path_layout() {
    let path = user_keys_path();
    assert!(path.ends_with("br-agent/brkeys.json"));
}
