//! External system integrations for Quarry.
//!
//! This module provides adapters for the systems the export core
//! collaborates with:
//!
//! - [`jira`] - Jira REST API integration (search, field metadata,
//!   attachment download) behind the [`jira::IssueSource`] trait
//! - [`storage`] - local filesystem persistence of transformed issues
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external
//! dependencies and enable testing with mock implementations: the core
//! only depends on the `IssueSource` capability trait and the store's
//! narrow persistence API, never on HTTP or filesystem details.
//!
//! ```rust,no_run
//! use quarry::adapters::jira::JiraClient;
//! use quarry::config::JiraConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = JiraConfig {
//!     base_url: "https://jira.example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let client = JiraClient::new(config)?;
//! // Use client for operations
//! # Ok(())
//! # }
//! ```

pub mod jira;
pub mod storage;
