//! Jira REST client
//!
//! This module implements [`IssueSource`] over the Jira REST API v2. It
//! owns the HTTP session (connection pooling, basic auth, timeouts, TLS
//! policy) and translates wire payloads into domain types at the
//! boundary. The session is internally reference-counted and safe to
//! share across concurrent page units.

use crate::adapters::jira::api::{AttachmentOutcome, IssueSource};
use crate::adapters::jira::models::SearchResponse;
use crate::config::JiraConfig;
use crate::domain::ids::{IssueKey, ProjectKey};
use crate::domain::{catalog, Attachment, FieldMetadata, Issue, JiraError, QuarryError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response};
use secrecy::ExposeSecret;
use std::path::Path;
use std::time::Duration;

/// Jira REST API client
///
/// # Example
///
/// ```no_run
/// use quarry::adapters::jira::JiraClient;
/// use quarry::config::JiraConfig;
///
/// # fn example() -> quarry::domain::Result<()> {
/// let config = JiraConfig::default();
/// let client = JiraClient::new(config)?;
/// # Ok(())
/// # }
/// ```
pub struct JiraClient {
    /// Base URL of the Jira server, without trailing slash
    base_url: String,

    /// HTTP client for making requests
    client: Client,

    /// Jira configuration
    config: JiraConfig,
}

impl JiraClient {
    /// Create a new Jira client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the underlying HTTP client cannot
    /// be built.
    pub fn new(config: JiraConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30));

        if !config.tls_verify {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder
            .build()
            .map_err(|e| QuarryError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url,
            client,
            config,
        })
    }

    /// Check if credentials are configured
    pub fn is_authenticated(&self) -> bool {
        self.config.username.is_some() && self.config.password.is_some()
    }

    /// Build a GET request with auth and JSON accept headers
    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url).header("Accept", "application/json");

        if let Some(ref username) = self.config.username {
            let password = self
                .config
                .password
                .as_ref()
                .map(|p| p.expose_secret().to_string());
            request = request.basic_auth(username, password);
        }

        request
    }

    /// Surface non-success responses as a Jira API error with status and body
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(JiraError::Api {
                status: status.as_u16(),
                body,
            }
            .into());
        }
        Ok(response)
    }

    /// Fetch one attachment's bytes
    async fn fetch_attachment(&self, attachment: &Attachment) -> Result<Vec<u8>> {
        let response = self
            .get(&attachment.content_url)
            .send()
            .await
            .map_err(|e| JiraError::ConnectionFailed(e.to_string()))?;

        let response = Self::check_response(response).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| JiraError::InvalidResponse(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl IssueSource for JiraClient {
    async fn count_issues(&self, project: &ProjectKey) -> Result<u64> {
        let url = format!("{}/rest/api/2/search", self.base_url);

        // maxResults=0 answers with the total only, no issue bodies
        let response = self
            .get(&url)
            .query(&[
                ("jql", format!("project={project}")),
                ("startAt", "0".to_string()),
                ("maxResults", "0".to_string()),
                ("fields", "none".to_string()),
            ])
            .send()
            .await
            .map_err(|e| JiraError::ConnectionFailed(e.to_string()))?;

        let response = Self::check_response(response).await?;
        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| JiraError::InvalidResponse(e.to_string()))?;

        tracing::info!(project = %project, total = body.total, "Counted project issues");

        Ok(body.total)
    }

    async fn search_page(
        &self,
        project: &ProjectKey,
        start_at: u64,
        max_results: u64,
    ) -> Result<Vec<Issue>> {
        let url = format!("{}/rest/api/2/search", self.base_url);

        let response = self
            .get(&url)
            .query(&[
                ("jql", format!("project={project}")),
                ("startAt", start_at.to_string()),
                ("maxResults", max_results.to_string()),
                ("fields", "*all".to_string()),
                ("expand", "renderedFields".to_string()),
            ])
            .send()
            .await
            .map_err(|e| JiraError::ConnectionFailed(e.to_string()))?;

        let response = Self::check_response(response).await?;
        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| JiraError::InvalidResponse(e.to_string()))?;

        let issues = body.into_issues()?;

        tracing::debug!(
            project = %project,
            start_at = start_at,
            count = issues.len(),
            "Fetched issue page"
        );

        Ok(issues)
    }

    async fn field_catalog(&self) -> Result<Vec<FieldMetadata>> {
        let url = format!("{}/rest/api/2/field", self.base_url);

        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| JiraError::ConnectionFailed(e.to_string()))?;

        let response = Self::check_response(response).await?;
        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| JiraError::InvalidResponse(e.to_string()))?;

        let catalog = catalog::parse_catalog(raw)?;

        tracing::info!(entries = catalog.len(), "Fetched field metadata catalog");

        Ok(catalog)
    }

    async fn download_attachments(
        &self,
        issue_key: &IssueKey,
        attachments: &[Attachment],
        dest_dir: &Path,
    ) -> AttachmentOutcome {
        let mut outcome = AttachmentOutcome::default();

        for attachment in attachments {
            match self.fetch_attachment(attachment).await {
                Ok(bytes) => {
                    let path = dest_dir.join(&attachment.filename);
                    match tokio::fs::write(&path, &bytes).await {
                        Ok(()) => {
                            tracing::info!(
                                issue_key = %issue_key,
                                filename = %attachment.filename,
                                bytes = bytes.len(),
                                "Saved attachment"
                            );
                            outcome.downloaded += 1;
                        }
                        Err(e) => {
                            tracing::error!(
                                issue_key = %issue_key,
                                filename = %attachment.filename,
                                error = %e,
                                "Failed to write attachment"
                            );
                            outcome.failed += 1;
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        issue_key = %issue_key,
                        filename = %attachment.filename,
                        error = %e,
                        "Failed to download attachment"
                    );
                    outcome.failed += 1;
                }
            }
        }

        outcome
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
