//! Core business logic for Quarry.
//!
//! This module contains the batch-orchestration and field-normalization
//! engine.
//!
//! # Modules
//!
//! - [`export`] - Page planning, bounded-concurrency orchestration, run summary
//! - [`transform`] - Custom-field renaming and display-name normalization
//!
//! # Export Workflow
//!
//! The typical export workflow:
//!
//! 1. **Count**: one search probe returns the project's total issue count
//! 2. **Plan**: `ceil(total / page_size)` page units at fixed offsets
//! 3. **Catalog**: the field metadata catalog is fetched once and shared
//! 4. **Page units**: each unit fetches its page, renames every custom
//!    field of every issue, and writes one JSON document per issue plus
//!    its attachments — up to the configured number of units in flight
//! 5. **Report**: counters are merged into an [`export::ExportSummary`];
//!    the first failed unit fails the run, completed units stay on disk
//!
//! # Example
//!
//! ```rust,no_run
//! use quarry::config::load_config;
//! use quarry::core::export::ExportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("quarry.toml")?;
//!
//! let coordinator = ExportCoordinator::new(config)?;
//! let summary = coordinator.execute_export().await?;
//!
//! println!("Exported {} issues", summary.issues_exported);
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod transform;
