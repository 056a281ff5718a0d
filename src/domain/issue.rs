//! Issue domain model
//!
//! This module defines the core Issue type representing one Jira issue as
//! returned by the search API, plus the boundary validation that turns a
//! raw JSON payload into a typed record.

use crate::domain::errors::ValidationError;
use crate::domain::ids::IssueKey;
use serde::Serialize;
use serde_json::{Map, Value};

/// The key prefix Jira assigns to dynamically-created custom fields.
///
/// Only keys carrying this prefix are eligible for renaming; well-known
/// fixed fields (`summary`, `status`, `attachment`, ...) are never touched.
pub const CUSTOM_FIELD_PREFIX: &str = "customfield_";

/// The reserved `fields` key holding attachment descriptors.
pub const ATTACHMENT_FIELD: &str = "attachment";

/// Represents one Jira issue
///
/// An issue is a JSON document with a required `key`, a required `fields`
/// object carrying every issue property (fixed and custom), and an open
/// set of other top-level keys (`id`, `self`, `expand`, `renderedFields`,
/// ...) which are preserved verbatim in `extra`.
///
/// The `fields` map keeps the order of the raw response; the custom-field
/// rename pass depends on that order for its documented collision policy.
///
/// # Examples
///
/// ```
/// use quarry::domain::issue::Issue;
/// use serde_json::json;
///
/// let issue = Issue::from_value(json!({
///     "key": "PROJ-1",
///     "fields": {"summary": "Broken build"}
/// }))
/// .unwrap();
/// assert_eq!(issue.key.as_str(), "PROJ-1");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    /// Unique, human-facing issue key (e.g. `PROJ-1234`)
    pub key: IssueKey,

    /// All issue properties, fixed and custom, in response order
    pub fields: Map<String, Value>,

    /// Every other top-level key of the raw payload, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Issue {
    /// Validates a raw JSON payload and builds a typed Issue
    ///
    /// This is the single boundary where structural preconditions are
    /// checked; everything downstream can rely on `key` and `fields`
    /// existing. Validation happens before any restructuring, so a
    /// rejected payload was never partially consumed.
    ///
    /// # Errors
    ///
    /// Returns a distinct [`ValidationError`] when the payload is not an
    /// object, has no `key` string, or has a missing or non-object
    /// `fields` value.
    pub fn from_value(raw: Value) -> Result<Self, ValidationError> {
        let Value::Object(mut object) = raw else {
            return Err(ValidationError::IssueNotAnObject);
        };

        let key = match object.get("key").and_then(Value::as_str) {
            Some(key) => IssueKey::new(key)?,
            None => return Err(ValidationError::MissingKey),
        };

        let fields = match object.shift_remove("fields") {
            Some(Value::Object(fields)) => fields,
            Some(_) => {
                return Err(ValidationError::FieldsNotAnObject {
                    key: key.as_str().to_string(),
                })
            }
            None => {
                return Err(ValidationError::MissingFields {
                    key: key.as_str().to_string(),
                })
            }
        };

        object.shift_remove("key");

        Ok(Self {
            key,
            fields,
            extra: object,
        })
    }

    /// Returns the keys of all custom fields, in field order
    pub fn custom_field_names(&self) -> Vec<String> {
        self.fields
            .keys()
            .filter(|name| name.starts_with(CUSTOM_FIELD_PREFIX))
            .cloned()
            .collect()
    }

    /// Returns the issue's attachment descriptors
    ///
    /// Descriptors missing a filename or download URL are skipped with a
    /// warning; attachment handling is best-effort end to end.
    pub fn attachments(&self) -> Vec<Attachment> {
        let Some(Value::Array(entries)) = self.fields.get(ATTACHMENT_FIELD) else {
            return Vec::new();
        };

        entries
            .iter()
            .filter_map(|entry| match Attachment::from_value(entry) {
                Some(attachment) => Some(attachment),
                None => {
                    tracing::warn!(
                        issue_key = %self.key,
                        "Skipping malformed attachment descriptor"
                    );
                    None
                }
            })
            .collect()
    }
}

/// One attachment descriptor from an issue's `fields.attachment` array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// File name to write under the issue directory
    pub filename: String,

    /// Download URL for the attachment content
    pub content_url: String,
}

impl Attachment {
    /// Extracts a descriptor from one raw array entry, if well-formed
    pub fn from_value(raw: &Value) -> Option<Self> {
        let filename = raw.get("filename")?.as_str()?;
        let content_url = raw.get("content")?.as_str()?;
        if filename.is_empty() || filename.contains('/') || filename.contains('\\') {
            return None;
        }
        Some(Self {
            filename: filename.to_string(),
            content_url: content_url.to_string(),
        })
    }
}
