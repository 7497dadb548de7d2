//! Test helpers shared across crates.
//!
//! Provides temporary fixture directories for file-loading tests and
//! builders for JSON documents used by the merge suites.

pub mod fixtures;
pub mod json;
