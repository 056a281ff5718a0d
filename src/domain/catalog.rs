//! Field metadata catalog
//!
//! The catalog maps Jira's opaque field ids to their human-readable
//! display names. It is fetched once per run from `/rest/api/2/field`
//! (unfiltered by project) and shared read-only across all page units.

use crate::domain::errors::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One field id → display name mapping
///
/// The wire payload carries many more properties per field (`custom`,
/// `schema`, `clauseNames`, ...); only the pair the rename pass needs is
/// kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// Raw field identifier, e.g. `customfield_15880` or `issuetype`
    pub id: String,

    /// Human-readable display name, e.g. `Statut Déploiement`
    pub name: String,
}

impl FieldMetadata {
    /// Creates a new catalog entry
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Validates and parses a raw catalog payload
///
/// The payload must be a JSON array; entries that are not objects or lack
/// an `id`/`name` string are skipped with a warning rather than failing
/// the run, matching the lenient lookup contract (a missing entry only
/// means "no rename" later).
///
/// # Errors
///
/// Returns [`ValidationError::CatalogNotAnArray`] when the payload is not
/// an array.
pub fn parse_catalog(raw: Value) -> Result<Vec<FieldMetadata>, ValidationError> {
    let Value::Array(entries) = raw else {
        return Err(ValidationError::CatalogNotAnArray);
    };

    let mut catalog = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<FieldMetadata>(entry) {
            Ok(metadata) => catalog.push(metadata),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed field metadata entry");
            }
        }
    }

    Ok(catalog)
}

/// Looks up the display name for a field id
///
/// Exact id match, first match wins; duplicate ids later in the catalog
/// are ignored.
pub fn display_name<'a>(catalog: &'a [FieldMetadata], field_id: &str) -> Option<&'a str> {
    catalog
        .iter()
        .find(|entry| entry.id == field_id)
        .map(|entry| entry.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_catalog_valid() {
        let catalog = parse_catalog(json!([
            {"id": "issuetype", "name": "Issue Type", "custom": false},
            {"id": "customfield_100", "name": "Root Cause", "custom": true}
        ]))
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[1], FieldMetadata::new("customfield_100", "Root Cause"));
    }

    #[test]
    fn test_parse_catalog_not_an_array() {
        let err = parse_catalog(json!({"id": "x", "name": "y"})).unwrap_err();
        assert!(matches!(err, ValidationError::CatalogNotAnArray));
    }

    #[test]
    fn test_parse_catalog_skips_malformed_entries() {
        let catalog = parse_catalog(json!([
            {"id": "customfield_100", "name": "Root Cause"},
            {"id": "customfield_200"},
            "not an object",
            {"name": "No Id"}
        ]))
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].id, "customfield_100");
    }

    #[test]
    fn test_display_name_exact_match() {
        let catalog = vec![
            FieldMetadata::new("customfield_100", "Root Cause"),
            FieldMetadata::new("customfield_200", "Statut Déploiement"),
        ];

        assert_eq!(display_name(&catalog, "customfield_200"), Some("Statut Déploiement"));
        assert_eq!(display_name(&catalog, "customfield_999"), None);
        // No prefix or partial matching
        assert_eq!(display_name(&catalog, "customfield_1"), None);
    }

    #[test]
    fn test_display_name_duplicate_ids_first_match_wins() {
        let catalog = vec![
            FieldMetadata::new("customfield_100", "First"),
            FieldMetadata::new("customfield_100", "Second"),
        ];

        assert_eq!(display_name(&catalog, "customfield_100"), Some("First"));
    }
}
