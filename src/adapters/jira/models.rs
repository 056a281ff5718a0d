//! Jira API models
//!
//! This module defines the wire structures for the Jira REST API search
//! endpoint. These models are separate from domain models: raw issues
//! arrive as untyped JSON and cross into the domain through
//! [`Issue::from_value`] boundary validation.

use crate::domain::{Issue, ValidationError};
use serde::Deserialize;
use serde_json::Value;

/// Response body of `/rest/api/2/search`
///
/// The same shape serves both the count probe (`maxResults=0`, empty
/// `issues`) and real page fetches.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Total number of issues matching the query, independent of paging
    pub total: u64,

    /// Raw issues of this page, in server result order
    #[serde(default)]
    pub issues: Vec<Value>,
}

impl SearchResponse {
    /// Validates every raw issue of the page into the domain type
    ///
    /// Order is preserved. The first structurally invalid issue fails the
    /// whole page — a malformed record aborts its owning unit.
    pub fn into_issues(self) -> Result<Vec<Issue>, ValidationError> {
        self.issues.into_iter().map(Issue::from_value).collect()
    }
}
