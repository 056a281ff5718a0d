//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::QuarryConfig;
use crate::config::secret::secret_string_opt;
use crate::domain::errors::QuarryError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`QuarryConfig`]
/// 4. Applies environment variable overrides (`QUARRY_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use quarry::config::loader::load_config;
///
/// let config = load_config("quarry.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<QuarryConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(QuarryError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        QuarryError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: QuarryConfig = toml::from_str(&contents)
        .map_err(|e| QuarryError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        QuarryError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("valid regex");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(QuarryError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `QUARRY_*` prefix
///
/// Environment variables follow the pattern `QUARRY_<SECTION>_<KEY>`,
/// e.g. `QUARRY_JIRA_BASE_URL` or `QUARRY_EXPORT_PAGE_SIZE`.
fn apply_env_overrides(config: &mut QuarryConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("QUARRY_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Jira overrides
    if let Ok(val) = std::env::var("QUARRY_JIRA_BASE_URL") {
        config.jira.base_url = val;
    }
    if let Ok(val) = std::env::var("QUARRY_JIRA_USERNAME") {
        config.jira.username = Some(val);
    }
    if let Ok(val) = std::env::var("QUARRY_JIRA_PASSWORD") {
        config.jira.password = secret_string_opt(Some(val));
    }
    if let Ok(val) = std::env::var("QUARRY_JIRA_PROJECT") {
        config.jira.project = val;
    }
    if let Ok(val) = std::env::var("QUARRY_JIRA_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.jira.timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("QUARRY_JIRA_TLS_VERIFY") {
        config.jira.tls_verify = val.parse().unwrap_or(true);
    }

    // Export overrides
    if let Ok(val) = std::env::var("QUARRY_EXPORT_PAGE_SIZE") {
        if let Ok(size) = val.parse() {
            config.export.page_size = size;
        }
    }
    if let Ok(val) = std::env::var("QUARRY_EXPORT_MAX_CONCURRENT_PAGES") {
        if let Ok(width) = val.parse() {
            config.export.max_concurrent_pages = width;
        }
    }
    if let Ok(val) = std::env::var("QUARRY_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }
    if let Ok(val) = std::env::var("QUARRY_EXPORT_DOWNLOAD_ATTACHMENTS") {
        config.export.download_attachments = val.parse().unwrap_or(true);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("QUARRY_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("QUARRY_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
