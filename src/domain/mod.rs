//! Domain models and types for Quarry.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`IssueKey`], [`ProjectKey`])
//! - **Domain models** ([`Issue`], [`FieldMetadata`])
//! - **Error types** ([`QuarryError`], [`JiraError`], [`ValidationError`], [`StorageError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Quarry uses the newtype pattern for identifiers to prevent mixing
//! different ID types, and validates raw JSON payloads exactly once, at
//! the boundary where responses are deserialized:
//!
//! ```rust
//! use quarry::domain::Issue;
//! use serde_json::json;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let issue = Issue::from_value(json!({
//!     "key": "PROJ-1",
//!     "fields": {"summary": "Broken build"}
//! }))?;
//! assert_eq!(issue.key.as_str(), "PROJ-1");
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, QuarryError>`]:
//!
//! ```rust
//! use quarry::domain::{QuarryError, Result};
//!
//! fn example() -> Result<()> {
//!     let config = quarry::config::load_config("quarry.toml")?;
//!     let _ = config;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod errors;
pub mod ids;
pub mod issue;
pub mod result;

// Re-export commonly used types for convenience
pub use catalog::FieldMetadata;
pub use errors::{JiraError, QuarryError, StorageError, ValidationError};
pub use ids::{IssueKey, ProjectKey};
pub use issue::{Attachment, Issue};
pub use result::Result;
