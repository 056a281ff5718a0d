//! Export command implementation
//!
//! This module implements the `export` command for pulling all issues of
//! a Jira project into the local output directory.

use crate::config::load_config;
use crate::core::export::ExportCoordinator;
use crate::domain::{JiraError, QuarryError};
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Override the project key to export
    #[arg(long)]
    pub project: Option<String>,

    /// Override the output directory
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Override the search page size
    #[arg(long)]
    pub page_size: Option<u64>,

    /// Skip attachment downloads
    #[arg(long)]
    pub no_attachments: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        // Load configuration
        let mut config = load_config(config_path)?;

        // Apply CLI overrides
        if let Some(project) = &self.project {
            tracing::info!(project = %project, "Overriding project from CLI");
            config.jira.project = project.clone();
        }

        if let Some(output_dir) = &self.output_dir {
            tracing::info!(output_dir = %output_dir, "Overriding output directory from CLI");
            config.export.output_dir = output_dir.clone();
        }

        if let Some(page_size) = self.page_size {
            tracing::info!(page_size = page_size, "Overriding page size from CLI");
            config.export.page_size = page_size;
        }

        if self.no_attachments {
            tracing::info!("Disabling attachment downloads from CLI");
            config.export.download_attachments = false;
        }

        // Validate configuration after overrides
        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2); // Configuration error exit code
        }

        // Confirmation prompt (unless --yes)
        if !self.yes {
            println!("Export Configuration:");
            println!("  Project: {}", config.jira.project);
            println!("  Server: {}", config.jira.base_url);
            println!("  Output: {}", config.export.output_dir);
            println!("  Page size: {}", config.export.page_size);
            println!("  Concurrent pages: {}", config.export.max_concurrent_pages);
            println!(
                "  Attachments: {}",
                if config.export.download_attachments {
                    "yes"
                } else {
                    "no"
                }
            );
            println!();
            print!("Proceed with export? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Export cancelled.");
                return Ok(0);
            }
        }

        // Create export coordinator
        tracing::info!("Creating export coordinator");
        let coordinator = match ExportCoordinator::new(config) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create export coordinator");
                eprintln!("Failed to initialize export: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        // Execute export
        tracing::info!("Executing export");
        println!("Starting export...");
        println!();

        let summary = match coordinator.execute_export().await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                // Records persisted before the failure stay on disk
                let exit_code = match &e {
                    QuarryError::Jira(JiraError::ConnectionFailed(_)) => 4,
                    _ => 1,
                };
                return Ok(exit_code);
            }
        };

        // Display summary
        println!();
        println!("Export Summary:");
        println!("  Total issues: {}", summary.total_issues);
        println!("  Pages: {}", summary.total_pages);
        println!("  Exported: {}", summary.issues_exported);
        println!("  Attachments: {}", summary.attachments_downloaded);
        if summary.attachment_failures > 0 {
            println!("  Attachment failures: {}", summary.attachment_failures);
        }
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!("  Success rate: {:.2}%", summary.success_rate());
        println!();
        println!("Export completed successfully!");

        Ok(0)
    }
}
