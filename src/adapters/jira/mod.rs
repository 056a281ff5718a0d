//! Jira adapter implementation
//!
//! This module provides the integration with Jira servers: the
//! [`IssueSource`] capability trait the export core depends on, the
//! REST client implementing it, and the API wire models.

pub mod api;
pub mod client;
pub mod models;

pub use api::{AttachmentOutcome, IssueSource};
pub use client::JiraClient;
pub use models::SearchResponse;
