//! Configuration management for Quarry.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Quarry uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `QUARRY_*` environment variable overrides
//! - Default values for optional settings
//! - Comprehensive validation
//! - Type-safe configuration structs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use quarry::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("quarry.toml")?;
//!
//! println!("Jira URL: {}", config.jira.base_url);
//! println!("Page size: {}", config.export.page_size);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [jira]
//! base_url = "https://jira.example.com"
//! username = "exporter"
//! password = "${QUARRY_JIRA_PASSWORD}"
//! project = "PROJ"
//!
//! [export]
//! page_size = 50
//! max_concurrent_pages = 5
//! output_dir = "data"
//!
//! [logging]
//! local_enabled = true
//! local_path = "logs"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, ExportConfig, JiraConfig, LoggingConfig, QuarryConfig};
pub use secret::{secret_string_opt, SecretString, SecretValue};
