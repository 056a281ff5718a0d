// Quarry - Jira Issue Export Tool
// Copyright (c) 2025 Quarry Contributors
// Licensed under the MIT License

//! # Quarry - Jira Issue Export
//!
//! Quarry is an ETL tool built in Rust that exports every issue of a Jira
//! project to local JSON archives, one document per issue, with custom
//! fields renamed to stable human-readable identifiers and attachments
//! downloaded alongside.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Extracting** issues through the paginated Jira search API
//! - **Transforming** issues by renaming `customfield_*` identifiers
//!   using the field metadata catalog
//! - **Loading** one pretty-printed JSON document per issue, plus its
//!   binary attachments, under the output directory
//!
//! ## Architecture
//!
//! Quarry follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (export orchestration, transformation)
//! - [`adapters`] - External integrations (Jira REST API, local storage)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quarry::config::load_config;
//! use quarry::core::export::ExportCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("quarry.toml")?;
//!
//!     // Create export coordinator
//!     let coordinator = ExportCoordinator::new(config)?;
//!
//!     // Execute export
//!     let summary = coordinator.execute_export().await?;
//!
//!     println!("Exported {} issues", summary.issues_exported);
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! The unit of parallel work is one search page: fetch, transform every
//! issue, store every issue. A bounded pool of page units runs
//! concurrently (5 by default), which also bounds outstanding network
//! requests and open file handles. Pages may complete in any order;
//! within a page, issues are processed strictly in the order the server
//! returned them. A failing unit never interrupts the others — the run
//! reports the first failure only after every unit has finished, and
//! completed issues stay on disk.
//!
//! ## Field Renaming
//!
//! Jira custom fields arrive as opaque ids (`customfield_15880`). Quarry
//! fetches the field metadata catalog once per run and renames each
//! custom field to a normalized token derived from its display name:
//!
//! ```rust
//! use quarry::core::transform::normalize_field_name;
//!
//! assert_eq!(normalize_field_name("Statut Déploiement"), "statut-deploiement");
//! ```
//!
//! ## Error Handling
//!
//! Quarry uses the [`domain::QuarryError`] type for all errors:
//!
//! ```rust,no_run
//! use quarry::domain::QuarryError;
//!
//! fn example() -> Result<(), QuarryError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = quarry::config::load_config("quarry.toml")?;
//!     let _ = config;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Quarry uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting export");
//! warn!(issue_key = "PROJ-42", "No attachments");
//! error!(error = "timeout", "Export failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
