//! Export coordinator - main orchestrator for the export process
//!
//! This module coordinates the entire export workflow: one count query,
//! one field-catalog fetch, then bounded-concurrency page units that each
//! fetch, transform and store their slice of the result set.
//!
//! Concurrency contract: the unit of parallelism is one page, never a
//! single record. Up to `max_concurrent_pages` units are in flight at
//! once; records within a page are processed strictly in fetch order.
//! Units are independent — a failing unit does not stop the others, and
//! the coordinator only learns about failures after waiting for every
//! unit. The first failure observed in the wait phase becomes the run's
//! own failure; completed units are never rolled back.

use crate::adapters::jira::{IssueSource, JiraClient};
use crate::adapters::storage::IssueStore;
use crate::config::QuarryConfig;
use crate::core::export::page::{plan_pages, PagePlan};
use crate::core::export::summary::{ExportSummary, PageStats};
use crate::core::transform::transform_issue;
use crate::domain::ids::ProjectKey;
use crate::domain::{FieldMetadata, QuarryError, Result};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;

/// Export coordinator
pub struct ExportCoordinator {
    config: QuarryConfig,
    source: Arc<dyn IssueSource>,
    store: IssueStore,
    project: ProjectKey,
}

impl ExportCoordinator {
    /// Create a coordinator backed by a real Jira client
    pub fn new(config: QuarryConfig) -> Result<Self> {
        let source: Arc<dyn IssueSource> = Arc::new(JiraClient::new(config.jira.clone())?);
        Self::with_source(config, source)
    }

    /// Create a coordinator with an explicit issue source
    ///
    /// Used by tests to drive the orchestration against stub sources.
    pub fn with_source(config: QuarryConfig, source: Arc<dyn IssueSource>) -> Result<Self> {
        let project = ProjectKey::new(&config.jira.project)?;
        let store = IssueStore::new(&config.export.output_dir);

        Ok(Self {
            config,
            source,
            store,
            project,
        })
    }

    /// Execute the export
    ///
    /// 1. Count the project's issues once
    /// 2. Plan `ceil(total / page_size)` page units
    /// 3. Fetch the field metadata catalog once, shared read-only
    /// 4. Run page units with bounded parallelism
    /// 5. Wait for all units, merge their counters, surface the first
    ///    observed failure
    ///
    /// # Errors
    ///
    /// Returns the count/catalog error directly, or the first page-unit
    /// failure observed while waiting. Records persisted before a failure
    /// stay on disk.
    pub async fn execute_export(&self) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();

        tracing::info!(
            project = %self.project,
            base_url = self.source.base_url(),
            output_dir = %self.store.output_root().display(),
            "Starting export run"
        );

        let total = self.source.count_issues(&self.project).await?;
        summary.total_issues = total;

        let pages = plan_pages(total, self.config.export.page_size);
        summary.total_pages = pages.len();

        if pages.is_empty() {
            tracing::info!(project = %self.project, "No issues to export");
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        // Fetched once per run; every unit shares this immutable catalog.
        let catalog = self.source.field_catalog().await?;

        tracing::info!(
            total_issues = total,
            pages = pages.len(),
            width = self.config.export.max_concurrent_pages,
            "Dispatching page units"
        );

        let results: Vec<(u64, Result<PageStats>)> = stream::iter(pages)
            .map(|page| {
                let catalog = &catalog;
                async move { (page.offset, self.process_page(page, catalog).await) }
            })
            .buffer_unordered(self.config.export.max_concurrent_pages.max(1))
            .collect()
            .await;

        // Wait phase is over; results arrive in completion order and the
        // first error seen here is the run's failure.
        let mut first_failure: Option<QuarryError> = None;
        for (offset, result) in results {
            match result {
                Ok(stats) => summary.add_page_success(stats),
                Err(e) => {
                    summary.add_page_failure(offset, e.to_string());
                    if first_failure.is_none() {
                        first_failure = Some(e);
                    }
                }
            }
        }

        summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();

        match first_failure {
            Some(e) => Err(e),
            None => Ok(summary),
        }
    }

    /// Process one page unit: fetch → transform each → store each
    ///
    /// Records are handled strictly in the order the page returned them;
    /// there is no intra-page parallelism. Attachment failures are
    /// counted, never propagated.
    async fn process_page(&self, page: PagePlan, catalog: &[FieldMetadata]) -> Result<PageStats> {
        tracing::info!(
            offset = page.offset,
            max_results = page.max_results,
            "Processing page unit"
        );

        let issues = self
            .source
            .search_page(&self.project, page.offset, page.max_results)
            .await?;

        let mut stats = PageStats::default();

        for mut issue in issues {
            transform_issue(&mut issue, catalog);

            let issue_dir = self.store.ensure_issue_dir(&issue.key).await?;
            self.store.persist_issue(&issue, &issue_dir).await?;

            let attachments = issue.attachments();
            if attachments.is_empty() {
                tracing::info!(issue_key = %issue.key, "No attachments");
            } else if self.config.export.download_attachments {
                let outcome = self
                    .source
                    .download_attachments(&issue.key, &attachments, &issue_dir)
                    .await;
                stats.attachments.merge(outcome);
            } else {
                tracing::debug!(
                    issue_key = %issue.key,
                    count = attachments.len(),
                    "Attachment download disabled"
                );
            }

            stats.issues_stored += 1;
        }

        tracing::info!(
            offset = page.offset,
            issues = stats.issues_stored,
            "Page unit done"
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::jira::api::AttachmentOutcome;
    use crate::config::{ExportConfig, JiraConfig};
    use crate::domain::ids::IssueKey;
    use crate::domain::{Attachment, Issue, JiraError};
    use async_trait::async_trait;
    use serde_json::json;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Stub source serving a fixed number of issues, optionally failing
    /// one page offset.
    struct StubSource {
        total: u64,
        failing_offset: Option<u64>,
        catalog_fetches: AtomicUsize,
        requested_pages: Mutex<Vec<(u64, u64)>>,
    }

    impl StubSource {
        fn new(total: u64, failing_offset: Option<u64>) -> Self {
            Self {
                total,
                failing_offset,
                catalog_fetches: AtomicUsize::new(0),
                requested_pages: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl IssueSource for StubSource {
        async fn count_issues(&self, _project: &ProjectKey) -> Result<u64> {
            Ok(self.total)
        }

        async fn search_page(
            &self,
            _project: &ProjectKey,
            start_at: u64,
            max_results: u64,
        ) -> Result<Vec<Issue>> {
            self.requested_pages
                .lock()
                .unwrap()
                .push((start_at, max_results));

            if self.failing_offset == Some(start_at) {
                return Err(JiraError::Api {
                    status: 500,
                    body: "boom".to_string(),
                }
                .into());
            }

            (start_at..start_at + max_results)
                .map(|n| {
                    Issue::from_value(json!({
                        "key": format!("PROJ-{n}"),
                        "fields": {"customfield_100": n}
                    }))
                    .map_err(Into::into)
                })
                .collect()
        }

        async fn field_catalog(&self) -> Result<Vec<FieldMetadata>> {
            self.catalog_fetches.fetch_add(1, Ordering::SeqCst);
            Ok(vec![FieldMetadata::new("customfield_100", "Root Cause")])
        }

        async fn download_attachments(
            &self,
            _issue_key: &IssueKey,
            _attachments: &[Attachment],
            _dest_dir: &Path,
        ) -> AttachmentOutcome {
            AttachmentOutcome::default()
        }

        fn base_url(&self) -> &str {
            "stub://jira"
        }
    }

    fn config_for(dir: &TempDir, page_size: u64) -> QuarryConfig {
        QuarryConfig {
            jira: JiraConfig {
                project: "PROJ".to_string(),
                ..Default::default()
            },
            export: ExportConfig {
                page_size,
                max_concurrent_pages: 5,
                output_dir: dir.path().to_string_lossy().to_string(),
                download_attachments: true,
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_export_computes_pages_and_requests_remainder() {
        let dir = TempDir::new().unwrap();
        let source = Arc::new(StubSource::new(120, None));
        let coordinator =
            ExportCoordinator::with_source(config_for(&dir, 50), source.clone()).unwrap();

        let summary = coordinator.execute_export().await.unwrap();

        assert_eq!(summary.total_pages, 3);
        assert_eq!(summary.issues_exported, 120);

        let mut pages = source.requested_pages.lock().unwrap().clone();
        pages.sort_unstable();
        assert_eq!(pages, vec![(0, 50), (50, 50), (100, 20)]);
    }

    #[tokio::test]
    async fn test_catalog_fetched_exactly_once() {
        let dir = TempDir::new().unwrap();
        let source = Arc::new(StubSource::new(120, None));
        let coordinator =
            ExportCoordinator::with_source(config_for(&dir, 50), source.clone()).unwrap();

        coordinator.execute_export().await.unwrap();

        assert_eq!(source.catalog_fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_transformed_issues_reach_disk() {
        let dir = TempDir::new().unwrap();
        let source = Arc::new(StubSource::new(3, None));
        let coordinator = ExportCoordinator::with_source(config_for(&dir, 50), source).unwrap();

        coordinator.execute_export().await.unwrap();

        let written = std::fs::read_to_string(dir.path().join("PROJ-1/PROJ-1.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["fields"]["root-cause"], 1);
        assert!(parsed["fields"].get("customfield_100").is_none());
    }

    #[tokio::test]
    async fn test_failing_page_does_not_stop_other_units() {
        let dir = TempDir::new().unwrap();
        let source = Arc::new(StubSource::new(120, Some(50)));
        let coordinator = ExportCoordinator::with_source(config_for(&dir, 50), source).unwrap();

        let err = coordinator.execute_export().await.unwrap_err();
        assert!(matches!(err, QuarryError::Jira(JiraError::Api { status: 500, .. })));

        // Units at offsets 0 and 100 ran to completion and persisted
        assert!(dir.path().join("PROJ-0/PROJ-0.json").exists());
        assert!(dir.path().join("PROJ-49/PROJ-49.json").exists());
        assert!(dir.path().join("PROJ-100/PROJ-100.json").exists());
        assert!(dir.path().join("PROJ-119/PROJ-119.json").exists());
        // The failed page's records were never written
        assert!(!dir.path().join("PROJ-50").exists());
    }

    #[tokio::test]
    async fn test_empty_project_short_circuits() {
        let dir = TempDir::new().unwrap();
        let source = Arc::new(StubSource::new(0, None));
        let coordinator =
            ExportCoordinator::with_source(config_for(&dir, 50), source.clone()).unwrap();

        let summary = coordinator.execute_export().await.unwrap();

        assert_eq!(summary.total_pages, 0);
        assert_eq!(summary.issues_exported, 0);
        // Catalog is not fetched when there is nothing to transform
        assert_eq!(source.catalog_fetches.load(Ordering::SeqCst), 0);
    }
}
