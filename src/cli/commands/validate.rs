//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Quarry configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing and env overrides
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Jira Server: {}", config.jira.base_url);
        println!("  Project: {}", config.jira.project);
        println!(
            "  Authentication: {}",
            if config.jira.username.is_some() {
                "basic"
            } else {
                "anonymous"
            }
        );
        println!("  Page Size: {}", config.export.page_size);
        println!("  Concurrent Pages: {}", config.export.max_concurrent_pages);
        println!("  Output Directory: {}", config.export.output_dir);
        println!("  Download Attachments: {}", config.export.download_attachments);
        println!();

        Ok(0)
    }
}
