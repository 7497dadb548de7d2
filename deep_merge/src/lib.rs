//! Recursive deep merging of structured values.
//!
//! The core operation, [`deep_merge`], overlays an *overrides* value onto a
//! *base* value:
//!
//! - mappings merge key by key, recursively;
//! - arrays concatenate;
//! - `null` overrides are ignored, while other falsy values apply;
//! - anything else replaces the base.
//!
//! Values are [`serde_json::Value`]s. Typed structs take part through
//! [`merge_serialized`] or through the [`DeepPartial`] derive, which
//! generates a companion struct with every field optional.
//!
//! ```rust
//! use deep_merge::deep_merge;
//! use serde_json::json;
//!
//! let merged = deep_merge(
//!     &json!({"name": "Alice", "roles": ["user"]}),
//!     &json!({"age": 30, "roles": ["admin"]}),
//! );
//! assert_eq!(merged, json!({"name": "Alice", "roles": ["user", "admin"], "age": 30}));
//! ```

// Lets derive output that names `::deep_merge` resolve inside this crate's
// own tests.
extern crate self as deep_merge;

pub use deep_merge_macros::DeepPartial;

mod error;
mod file;
mod merge;
mod partial;

pub use error::{MergeError, MergeResult, MergeRole};
pub use file::{load_value, parse_value};
pub use merge::{
    deep_merge, deep_merge_iterative, deep_merge_owned, is_absent, is_plain_mapping, merge_layers,
};
pub use partial::{DeepPartial, merge_partial, merge_serialized};
