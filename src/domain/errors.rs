//! Domain error types
//!
//! This module defines the error hierarchy for Quarry. All errors are
//! domain-specific and don't expose third-party types: failures from the
//! Jira REST API, from input validation, and from the local store each get
//! their own kind so callers can match on what actually went wrong.

use thiserror::Error;

/// Main Quarry error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum QuarryError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Jira API errors
    #[error("Jira error: {0}")]
    Jira(#[from] JiraError),

    /// Input validation errors (malformed issue or catalog payloads)
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Local storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Jira-specific errors
///
/// Errors that occur when talking to the Jira REST API. Non-success
/// responses keep the status code and raw body for diagnostics; these
/// errors don't expose the underlying HTTP client types.
#[derive(Debug, Error)]
pub enum JiraError {
    /// Failed to reach the Jira server at all
    #[error("Failed to connect to Jira server: {0}")]
    ConnectionFailed(String),

    /// Jira answered with a non-success status
    #[error("Jira API error {status}: {body}")]
    Api { status: u16, body: String },

    /// Jira answered 2xx but the body was not what we expected
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

/// Validation errors for raw payloads crossing into the domain
///
/// Each variant names the structural precondition that was violated and,
/// where one exists, the offending key. Raised at the deserialization
/// boundary, before any mutation of the record.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The raw issue payload is not a JSON object
    #[error("issue must be a JSON object")]
    IssueNotAnObject,

    /// The issue has no top-level "key" string
    #[error("issue is missing the 'key' property")]
    MissingKey,

    /// The issue has no "fields" object
    #[error("issue '{key}' is missing the 'fields' object")]
    MissingFields { key: String },

    /// "fields" is present but not an object
    #[error("issue '{key}' has a non-object 'fields' value")]
    FieldsNotAnObject { key: String },

    /// The field metadata catalog payload is not a JSON array
    #[error("field metadata catalog must be a JSON array")]
    CatalogNotAnArray,

    /// An identifier failed its format check
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}

/// Storage-specific errors
///
/// Failures writing the per-issue output tree. Path context is kept so a
/// failed run points at the exact file or directory.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to create the per-issue directory
    #[error("failed to create directory {path}: {message}")]
    DirectoryCreationFailed { path: String, message: String },

    /// Failed to write the issue JSON document
    #[error("failed to write document {path}: {message}")]
    WriteFailed { path: String, message: String },

    /// Failed to serialize the issue to JSON
    #[error("failed to serialize issue {key}: {message}")]
    SerializationFailed { key: String, message: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for QuarryError {
    fn from(err: std::io::Error) -> Self {
        QuarryError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for QuarryError {
    fn from(err: serde_json::Error) -> Self {
        QuarryError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for QuarryError {
    fn from(err: toml::de::Error) -> Self {
        QuarryError::Configuration(format!("TOML parse error: {err}"))
    }
}
