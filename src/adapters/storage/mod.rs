//! Local storage adapter
//!
//! Persists transformed issues as one JSON document per issue under the
//! configured output root, alongside their downloaded attachments.

pub mod store;

pub use store::IssueStore;
