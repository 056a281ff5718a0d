//! Filesystem issue store
//!
//! This module persists transformed issues to the local output tree: one
//! directory per issue, holding the pretty-printed JSON document and any
//! downloaded attachments.
//!
//! Layout: `<output_root>/<ISSUE-KEY>/<ISSUE-KEY>.json`.

use crate::domain::ids::IssueKey;
use crate::domain::{Issue, Result, StorageError};
use std::path::{Path, PathBuf};

/// Store for transformed issues
///
/// Cheap to clone conceptually but shared by reference across page units;
/// holds no open handles between calls, so the pool width bounds the
/// number of simultaneously open files.
pub struct IssueStore {
    output_root: PathBuf,
}

impl IssueStore {
    /// Create a store rooted at the output directory
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    /// Root directory all issues are written under
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Create (idempotently) and return the per-issue directory
    ///
    /// # Errors
    ///
    /// Returns a storage error with the offending path if creation fails.
    pub async fn ensure_issue_dir(&self, issue_key: &IssueKey) -> Result<PathBuf> {
        let issue_dir = self.output_root.join(issue_key.as_str());

        tokio::fs::create_dir_all(&issue_dir).await.map_err(|e| {
            StorageError::DirectoryCreationFailed {
                path: issue_dir.display().to_string(),
                message: e.to_string(),
            }
        })?;

        tracing::debug!(path = %issue_dir.display(), "Ensured issue directory");

        Ok(issue_dir)
    }

    /// Write the issue's JSON document into its directory
    ///
    /// The document is pretty-printed UTF-8 with non-ASCII characters
    /// preserved literally, named `<ISSUE-KEY>.json`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if serialization or the write fails.
    pub async fn persist_issue(&self, issue: &Issue, issue_dir: &Path) -> Result<PathBuf> {
        let document_path = issue_dir.join(format!("{}.json", issue.key));

        let json =
            serde_json::to_string_pretty(issue).map_err(|e| StorageError::SerializationFailed {
                key: issue.key.as_str().to_string(),
                message: e.to_string(),
            })?;

        tokio::fs::write(&document_path, json.as_bytes())
            .await
            .map_err(|e| StorageError::WriteFailed {
                path: document_path.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::info!(
            issue_key = %issue.key,
            path = %document_path.display(),
            "Saved issue document"
        );

        Ok(document_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample_issue() -> Issue {
        Issue::from_value(json!({
            "key": "PROJ-1",
            "fields": {
                "summary": "Défaut d'affichage",
                "statut-deploiement": "déployé"
            }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_ensure_issue_dir_creates_and_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = IssueStore::new(temp.path());
        let key = IssueKey::new("PROJ-1").unwrap();

        let dir = store.ensure_issue_dir(&key).await.unwrap();
        assert!(dir.is_dir());
        assert_eq!(dir, temp.path().join("PROJ-1"));

        // Second call on an existing directory succeeds
        let again = store.ensure_issue_dir(&key).await.unwrap();
        assert_eq!(again, dir);
    }

    #[tokio::test]
    async fn test_persist_issue_writes_pretty_json() {
        let temp = TempDir::new().unwrap();
        let store = IssueStore::new(temp.path());
        let issue = sample_issue();

        let dir = store.ensure_issue_dir(&issue.key).await.unwrap();
        let path = store.persist_issue(&issue, &dir).await.unwrap();

        assert_eq!(path, dir.join("PROJ-1.json"));

        let written = std::fs::read_to_string(&path).unwrap();
        // Pretty-printed, and non-ASCII preserved literally, not escaped
        assert!(written.contains('\n'));
        assert!(written.contains("Défaut d'affichage"));
        assert!(!written.contains("\\u00e9"));

        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["key"], "PROJ-1");
        assert_eq!(parsed["fields"]["statut-deploiement"], "déployé");
    }

    #[tokio::test]
    async fn test_persist_issue_fails_with_path_context() {
        let temp = TempDir::new().unwrap();
        let store = IssueStore::new(temp.path());
        let issue = sample_issue();

        // Target directory never created
        let missing_dir = temp.path().join("PROJ-1");
        let err = store.persist_issue(&issue, &missing_dir).await.unwrap_err();

        assert!(err.to_string().contains("PROJ-1.json"));
    }
}
