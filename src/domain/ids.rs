//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for Jira identifiers. Each type
//! ensures type safety and provides validation for format compliance.

use crate::domain::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Issue key newtype wrapper
///
/// Represents the unique, human-facing identifier of a Jira issue,
/// e.g. `PROJ-1234`. Also used as the name of the per-issue output
/// directory and JSON document, so it must never be empty and must not
/// contain path separators.
///
/// # Examples
///
/// ```
/// use quarry::domain::ids::IssueKey;
/// use std::str::FromStr;
///
/// let key = IssueKey::from_str("PROJ-1234").unwrap();
/// assert_eq!(key.as_str(), "PROJ-1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueKey(String);

impl IssueKey {
    /// Creates a new IssueKey from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or contains a path separator.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ValidationError::InvalidIdentifier(
                "issue key cannot be empty".to_string(),
            ));
        }
        if key.contains('/') || key.contains('\\') {
            return Err(ValidationError::InvalidIdentifier(format!(
                "issue key '{key}' contains a path separator"
            )));
        }
        Ok(Self(key))
    }

    /// Returns the issue key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IssueKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for IssueKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Project key newtype wrapper
///
/// Represents the Jira project whose issues are being exported,
/// e.g. `PROJ`. Interpolated into JQL, so it is restricted to the
/// uppercase-alphanumeric shape Jira itself enforces for project keys.
///
/// # Examples
///
/// ```
/// use quarry::domain::ids::ProjectKey;
/// use std::str::FromStr;
///
/// let project = ProjectKey::from_str("PROJ").unwrap();
/// assert_eq!(project.as_str(), "PROJ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectKey(String);

impl ProjectKey {
    /// Creates a new ProjectKey from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or contains characters outside
    /// `[A-Z0-9_]`.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ValidationError::InvalidIdentifier(
                "project key cannot be empty".to_string(),
            ));
        }
        if !key
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(ValidationError::InvalidIdentifier(format!(
                "project key '{key}' must match [A-Z0-9_]+"
            )));
        }
        Ok(Self(key))
    }

    /// Returns the project key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProjectKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ProjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
