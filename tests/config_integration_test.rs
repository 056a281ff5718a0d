//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with
//! --test-threads=1 to avoid interference between tests.

use quarry::config::load_config;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("QUARRY_APPLICATION_LOG_LEVEL");
    std::env::remove_var("QUARRY_JIRA_BASE_URL");
    std::env::remove_var("QUARRY_JIRA_PROJECT");
    std::env::remove_var("QUARRY_EXPORT_PAGE_SIZE");
    std::env::remove_var("QUARRY_EXPORT_OUTPUT_DIR");
    std::env::remove_var("TEST_JIRA_PASSWORD");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[jira]
base_url = "https://jira.example.com"
username = "exporter"
password = "test_pass"
project = "PROJ"
timeout_seconds = 60
tls_verify = false

[export]
page_size = 100
max_concurrent_pages = 8
output_dir = "archive"
download_attachments = false

[logging]
local_enabled = true
local_path = "/tmp/quarry-logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");

    assert_eq!(config.jira.base_url, "https://jira.example.com");
    assert_eq!(config.jira.username, Some("exporter".to_string()));
    assert_eq!(
        config.jira.password.as_ref().unwrap().expose_secret().as_ref(),
        "test_pass"
    );
    assert_eq!(config.jira.project, "PROJ");
    assert_eq!(config.jira.timeout_seconds, 60);
    assert!(!config.jira.tls_verify);

    assert_eq!(config.export.page_size, 100);
    assert_eq!(config.export.max_concurrent_pages, 8);
    assert_eq!(config.export.output_dir, "archive");
    assert!(!config.export.download_attachments);

    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/tmp/quarry-logs");
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_minimal_config_gets_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[jira]
base_url = "https://jira.example.com"
project = "OPS"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.export.page_size, 50);
    assert_eq!(config.export.max_concurrent_pages, 5);
    assert_eq!(config.export.output_dir, "data");
    assert!(config.export.download_attachments);
    assert!(config.jira.tls_verify);
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_var_substitution_in_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_JIRA_PASSWORD", "from-environment");

    let temp_file = write_config(
        r#"
[jira]
base_url = "https://jira.example.com"
username = "exporter"
password = "${TEST_JIRA_PASSWORD}"
project = "PROJ"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");
    assert_eq!(
        config.jira.password.as_ref().unwrap().expose_secret().as_ref(),
        "from-environment"
    );

    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_fails_load() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[jira]
base_url = "https://jira.example.com"
username = "exporter"
password = "${TEST_JIRA_PASSWORD}"
project = "PROJ"
"#,
    );

    let result = load_config(temp_file.path());
    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("TEST_JIRA_PASSWORD"));
}

#[test]
fn test_quarry_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("QUARRY_EXPORT_PAGE_SIZE", "10");
    std::env::set_var("QUARRY_EXPORT_OUTPUT_DIR", "override-dir");

    let temp_file = write_config(
        r#"
[jira]
base_url = "https://jira.example.com"
project = "PROJ"

[export]
page_size = 100
output_dir = "file-dir"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");
    assert_eq!(config.export.page_size, 10);
    assert_eq!(config.export.output_dir, "override-dir");

    cleanup_env_vars();
}

#[test]
fn test_invalid_project_key_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[jira]
base_url = "https://jira.example.com"
project = "not a key"
"#,
    );

    let result = load_config(temp_file.path());
    assert!(result.is_err());
}

#[test]
fn test_malformed_toml_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config("this is not [valid toml");

    let result = load_config(temp_file.path());
    assert!(result.is_err());
}
