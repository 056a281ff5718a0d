//! Issue transformation
//!
//! This module turns raw Jira issues into their archived form: every
//! dynamically-named custom field (`customfield_*`) is renamed to a
//! stable, human-readable token derived from the field metadata catalog.
//!
//! The pipeline is a single pass per issue:
//!
//! 1. [`normalize_field_name`] — pure display-name → token function
//! 2. [`transform_issue`] — in-place rename of all eligible fields
//!
//! Both are synchronous CPU work with no suspension points; the
//! surrounding page unit does all the I/O.

pub mod normalize;
pub mod rename;

pub use normalize::normalize_field_name;
pub use rename::transform_issue;
