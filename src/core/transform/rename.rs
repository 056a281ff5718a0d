//! Custom-field renaming
//!
//! This module rewrites an issue's dynamically-named custom fields
//! (`customfield_*`) to stable tokens derived from the field metadata
//! catalog. Structural validation of the raw payloads happens earlier, at
//! [`Issue::from_value`](crate::domain::Issue::from_value) and
//! [`parse_catalog`](crate::domain::catalog::parse_catalog); by the time a
//! record reaches this pass its shape is already known to be good.

use crate::core::transform::normalize_field_name;
use crate::domain::catalog::{self, FieldMetadata};
use crate::domain::Issue;

/// Renames all custom fields of an issue in place
///
/// Custom-field keys are collected first, in field order, then renamed
/// one at a time: catalog lookup (exact id, first match wins), display
/// name normalization, and — when the token is non-empty and differs from
/// the id — removal of the old key and insertion under the new one.
///
/// When a rename target already exists, the existing value is silently
/// overwritten. Later renames within the same issue therefore win over
/// earlier ones; this order-dependent last-write-wins policy is
/// deliberate and covered by tests.
pub fn transform_issue(issue: &mut Issue, catalog: &[FieldMetadata]) {
    let custom_fields = issue.custom_field_names();
    tracing::info!(
        issue_key = %issue.key,
        count = custom_fields.len(),
        "Discovered custom fields"
    );

    for old_name in custom_fields {
        let Some(display_name) = catalog::display_name(catalog, &old_name) else {
            tracing::warn!(
                issue_key = %issue.key,
                field_id = %old_name,
                "No catalog entry for custom field, keeping raw id"
            );
            continue;
        };

        let new_name = normalize_field_name(display_name);
        if new_name.is_empty() || new_name == old_name {
            tracing::debug!(
                issue_key = %issue.key,
                field_id = %old_name,
                "No usable normalized name, keeping raw id"
            );
            continue;
        }

        rename_field(issue, &old_name, &new_name);
    }
}

/// Renames a single field key, overwriting any existing target key
fn rename_field(issue: &mut Issue, old_name: &str, new_name: &str) {
    if issue.fields.contains_key(new_name) {
        tracing::warn!(
            issue_key = %issue.key,
            field = %new_name,
            "Rename target already exists, overwriting"
        );
    }

    // shift_remove keeps the remaining fields in their original order
    if let Some(value) = issue.fields.shift_remove(old_name) {
        issue.fields.insert(new_name.to_string(), value);
        tracing::info!(
            issue_key = %issue.key,
            from = %old_name,
            to = %new_name,
            "Renamed custom field"
        );
    } else {
        tracing::warn!(
            issue_key = %issue.key,
            field = %old_name,
            "Custom field vanished before rename"
        );
    }
}
