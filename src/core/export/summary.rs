//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export
//! results across page units.

use crate::adapters::jira::AttachmentOutcome;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Per-page-unit counters, merged into the run summary as units finish
#[derive(Debug, Clone, Copy, Default)]
pub struct PageStats {
    /// Issues transformed and written by this unit
    pub issues_stored: usize,

    /// Attachment download counters for this unit
    pub attachments: AttachmentOutcome,
}

/// One failed page unit
///
/// The run surfaces only the first failure as its own error; the rest
/// are kept here for logs and the CLI report.
#[derive(Debug, Clone)]
pub struct PageFailure {
    /// Start offset of the failed unit
    pub offset: u64,

    /// Rendered error message
    pub message: String,
}

/// Summary of an export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Total issues reported by the count query
    pub total_issues: u64,

    /// Number of planned page units
    pub total_pages: usize,

    /// Issues transformed and persisted successfully
    pub issues_exported: usize,

    /// Page units that failed
    pub failed_pages: usize,

    /// Attachments downloaded successfully
    pub attachments_downloaded: usize,

    /// Attachments that failed to download (never fatal)
    pub attachment_failures: usize,

    /// Failed units, in completion order
    pub failures: Vec<PageFailure>,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Wall-clock duration of the run
    pub duration: Duration,
}

impl ExportSummary {
    /// Create a new empty summary stamped with the current time
    pub fn new() -> Self {
        Self {
            total_issues: 0,
            total_pages: 0,
            issues_exported: 0,
            failed_pages: 0,
            attachments_downloaded: 0,
            attachment_failures: 0,
            failures: Vec::new(),
            started_at: Utc::now(),
            duration: Duration::from_secs(0),
        }
    }

    /// Set the run duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Merge a completed page unit's counters
    pub fn add_page_success(&mut self, stats: PageStats) {
        self.issues_exported += stats.issues_stored;
        self.attachments_downloaded += stats.attachments.downloaded;
        self.attachment_failures += stats.attachments.failed;
    }

    /// Record a failed page unit
    pub fn add_page_failure(&mut self, offset: u64, message: String) {
        self.failed_pages += 1;
        self.failures.push(PageFailure { offset, message });
    }

    /// Whether every page unit completed
    pub fn is_successful(&self) -> bool {
        self.failed_pages == 0
    }

    /// Percentage of counted issues that were exported
    pub fn success_rate(&self) -> f64 {
        if self.total_issues == 0 {
            return 100.0;
        }
        (self.issues_exported as f64 / self.total_issues as f64) * 100.0
    }

    /// Log the summary at the end of a run
    pub fn log_summary(&self) {
        tracing::info!(
            started_at = %self.started_at,
            total_issues = self.total_issues,
            total_pages = self.total_pages,
            issues_exported = self.issues_exported,
            failed_pages = self.failed_pages,
            attachments_downloaded = self.attachments_downloaded,
            attachment_failures = self.attachment_failures,
            duration_secs = self.duration.as_secs_f64(),
            success_rate = format!("{:.2}%", self.success_rate()),
            "Export run finished"
        );

        for failure in &self.failures {
            tracing::error!(
                offset = failure.offset,
                error = %failure.message,
                "Page unit failed"
            );
        }
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_merges_page_stats() {
        let mut summary = ExportSummary::new();

        summary.add_page_success(PageStats {
            issues_stored: 50,
            attachments: AttachmentOutcome {
                downloaded: 3,
                failed: 1,
            },
        });
        summary.add_page_success(PageStats {
            issues_stored: 20,
            attachments: AttachmentOutcome::default(),
        });

        assert_eq!(summary.issues_exported, 70);
        assert_eq!(summary.attachments_downloaded, 3);
        assert_eq!(summary.attachment_failures, 1);
        assert!(summary.is_successful());
    }

    #[test]
    fn test_summary_records_failures() {
        let mut summary = ExportSummary::new();
        summary.add_page_failure(50, "Jira API error 500: boom".to_string());

        assert_eq!(summary.failed_pages, 1);
        assert!(!summary.is_successful());
        assert_eq!(summary.failures[0].offset, 50);
    }

    #[test]
    fn test_success_rate() {
        let mut summary = ExportSummary::new();
        summary.total_issues = 120;
        summary.issues_exported = 100;
        assert!((summary.success_rate() - 83.333).abs() < 0.01);

        let empty = ExportSummary::new();
        assert_eq!(empty.success_rate(), 100.0);
    }
}
