//! Configuration schema types
//!
//! This module defines the configuration structure for Quarry. The root
//! [`QuarryConfig`] maps to the TOML file; every section validates itself
//! and the loader runs all validations before the configuration reaches
//! any component.

use crate::config::SecretString;
use crate::domain::ids::ProjectKey;
use serde::{Deserialize, Serialize};
use url::Url;

/// Main Quarry configuration
///
/// Constructed once at process start and passed by reference into each
/// component; there is no ambient global configuration state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuarryConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Jira server configuration
    pub jira: JiraConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl QuarryConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.jira.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Jira server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraConfig {
    /// Base URL of the Jira server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Username for basic authentication (optional)
    #[serde(default)]
    pub username: Option<String>,

    /// Password for basic authentication (optional)
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub password: Option<SecretString>,

    /// Key of the project to export
    #[serde(default)]
    pub project: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TLS certificate verification enabled
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,
}

impl JiraConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("jira.base_url must not be empty".to_string());
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("jira.base_url is not a valid URL: {e}"))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!(
                "jira.base_url must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if self.project.trim().is_empty() {
            return Err("jira.project must not be empty".to_string());
        }
        ProjectKey::new(&self.project).map_err(|e| format!("jira.project is invalid: {e}"))?;

        if self.timeout_seconds == 0 {
            return Err("jira.timeout_seconds must be greater than 0".to_string());
        }

        if self.username.is_some() != self.password.is_some() {
            return Err(
                "jira.username and jira.password must be provided together".to_string(),
            );
        }

        Ok(())
    }
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            username: None,
            password: None,
            project: String::new(),
            timeout_seconds: default_timeout_seconds(),
            tls_verify: default_tls_verify(),
        }
    }
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Page size for the paginated search (1-1000)
    #[serde(default = "default_page_size")]
    pub page_size: u64,

    /// Maximum number of page units processed concurrently
    #[serde(default = "default_max_concurrent_pages")]
    pub max_concurrent_pages: usize,

    /// Root directory issues are written under
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Whether to download issue attachments
    #[serde(default = "default_download_attachments")]
    pub download_attachments: bool,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 || self.page_size > 1000 {
            return Err(format!(
                "export.page_size must be between 1 and 1000, got {}",
                self.page_size
            ));
        }

        if self.max_concurrent_pages == 0 {
            return Err("export.max_concurrent_pages must be greater than 0".to_string());
        }

        if self.output_dir.trim().is_empty() {
            return Err("export.output_dir must not be empty".to_string());
        }

        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_concurrent_pages: default_max_concurrent_pages(),
            output_dir: default_output_dir(),
            download_attachments: default_download_attachments(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable the rolling log file in addition to console output
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory log files are written to
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: "daily" or "hourly"
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path must not be empty when file logging is enabled"
                .to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_tls_verify() -> bool {
    true
}

fn default_page_size() -> u64 {
    50
}

fn default_max_concurrent_pages() -> usize {
    5
}

fn default_output_dir() -> String {
    "data".to_string()
}

fn default_download_attachments() -> bool {
    true
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;

    fn valid_config() -> QuarryConfig {
        QuarryConfig {
            jira: JiraConfig {
                base_url: "https://jira.example.com".to_string(),
                project: "PROJ".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = QuarryConfig::default();
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.export.page_size, 50);
        assert_eq!(config.export.max_concurrent_pages, 5);
        assert_eq!(config.export.output_dir, "data");
        assert!(config.export.download_attachments);
        assert!(config.jira.tls_verify);
        assert_eq!(config.jira.timeout_seconds, 30);
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = valid_config();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_project_rejected() {
        let mut config = valid_config();
        config.jira.project = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_lowercase_project_rejected() {
        let mut config = valid_config();
        config.jira.project = "proj".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut config = valid_config();
        config.jira.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.jira.base_url = "ftp://jira.example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_page_size_bounds() {
        let mut config = valid_config();
        config.export.page_size = 0;
        assert!(config.validate().is_err());

        config.export.page_size = 1001;
        assert!(config.validate().is_err());

        config.export.page_size = 1000;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_pool_width_rejected() {
        let mut config = valid_config();
        config.export.max_concurrent_pages = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_credentials_must_come_together() {
        let mut config = valid_config();
        config.jira.username = Some("exporter".to_string());
        assert!(config.validate().is_err());

        config.jira.password = Some(Secret::new("hunter2".to_string().into()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let mut config = valid_config();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[jira]
base_url = "https://jira.example.com"
username = "exporter"
password = "secret"
project = "PROJ"

[export]
page_size = 100
output_dir = "archive"
"#;

        let config: QuarryConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.jira.base_url, "https://jira.example.com");
        assert_eq!(config.export.page_size, 100);
        assert_eq!(config.export.output_dir, "archive");
        // Unset values fall back to defaults
        assert_eq!(config.export.max_concurrent_pages, 5);
        assert!(config.validate().is_ok());
    }
}
