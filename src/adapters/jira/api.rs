//! Issue source trait definition
//!
//! This module defines the `IssueSource` trait that abstracts the remote
//! issue tracker behind the capabilities the export core actually needs:
//! counting, paginated search, the field metadata catalog, and best-effort
//! attachment download. The coordinator only ever talks to this trait,
//! which keeps it testable against stub sources.

use crate::domain::ids::{IssueKey, ProjectKey};
use crate::domain::{Attachment, FieldMetadata, Issue, Result};
use async_trait::async_trait;
use std::path::Path;

/// Outcome of a best-effort attachment download pass
///
/// Attachment failures never propagate as errors; they are only counted
/// so the run summary can report them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttachmentOutcome {
    /// Attachments fetched and written successfully
    pub downloaded: usize,

    /// Attachments that failed to fetch or write
    pub failed: usize,
}

impl AttachmentOutcome {
    /// Merge another outcome into this one
    pub fn merge(&mut self, other: AttachmentOutcome) {
        self.downloaded += other.downloaded;
        self.failed += other.failed;
    }
}

/// Trait for remote issue sources
///
/// Implementations own the HTTP transport, authentication and endpoint
/// semantics. All methods that hit the network surface non-success
/// responses as [`JiraError`](crate::domain::JiraError) with the status
/// code and raw body; no retry happens at this layer.
///
/// The underlying HTTP session must be safe for concurrent use — page
/// units share one source across the bounded worker pool.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Count the total number of issues in a project
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server answers with a
    /// non-success status.
    async fn count_issues(&self, project: &ProjectKey) -> Result<u64>;

    /// Fetch one page of issues
    ///
    /// Requests all fields plus rendered-field expansion, starting at
    /// `start_at` and returning at most `max_results` issues, in the
    /// server's result order. Each raw issue passes boundary validation
    /// before it is returned.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a
    /// structurally invalid issue payload.
    async fn search_page(
        &self,
        project: &ProjectKey,
        start_at: u64,
        max_results: u64,
    ) -> Result<Vec<Issue>>;

    /// Fetch the full field metadata catalog, unfiltered by project
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is not an
    /// array of field entries.
    async fn field_catalog(&self) -> Result<Vec<FieldMetadata>>;

    /// Download an issue's attachments into a directory, best-effort
    ///
    /// A failure on one attachment is logged and does not abort sibling
    /// attachments; this method never fails as a whole.
    async fn download_attachments(
        &self,
        issue_key: &IssueKey,
        attachments: &[Attachment],
        dest_dir: &Path,
    ) -> AttachmentOutcome;

    /// Base URL of the remote server
    fn base_url(&self) -> &str;
}
