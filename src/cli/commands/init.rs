//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "quarry.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("Initializing Quarry configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your server and project", self.output);
                println!("  2. Create a .env file with your credentials:");
                println!("     - Set QUARRY_JIRA_USERNAME and QUARRY_JIRA_PASSWORD");
                println!("  3. Validate configuration: quarry validate-config");
                println!("  4. Run export: quarry export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the sample configuration
    fn generate_config() -> String {
        r#"# Quarry Configuration File
# Jira issue export tool

[application]
log_level = "info"

[jira]
base_url = "https://jira.example.com"
username = "${QUARRY_JIRA_USERNAME}"
password = "${QUARRY_JIRA_PASSWORD}"
project = "PROJ"
timeout_seconds = 30
tls_verify = true

[export]
# Issues fetched per search page (1-1000)
page_size = 50
# Page units processed concurrently
max_concurrent_pages = 5
output_dir = "data"
download_attachments = true

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }
}
