//! Builders and accessors for JSON documents in merge tests.

use serde_json::{Value, json};

/// Wraps `leaf` in `depth` single-key objects under `key`.
///
/// ```
/// use serde_json::json;
/// use test_helpers::json::nest;
///
/// assert_eq!(nest(2, "child", json!(1)), json!({"child": {"child": 1}}));
/// ```
#[must_use]
pub fn nest(depth: usize, key: &str, leaf: Value) -> Value {
    (0..depth).fold(leaf, |inner, _| json!({ key: inner }))
}

/// Follows `key` `depth` times from `value`, yielding `Null` once the path
/// runs out.
#[must_use]
pub fn descend<'a>(value: &'a Value, key: &str, depth: usize) -> &'a Value {
    (0..depth).fold(value, |cursor, _| &cursor[key])
}

/// Returns the keys of a JSON object in iteration order, or an empty list
/// for any other value.
#[must_use]
pub fn object_keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default()
}
