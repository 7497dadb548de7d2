//! Recursive merging of JSON values.
//!
//! [`deep_merge`] overlays an `overrides` value onto a `base` value and
//! returns a freshly built result. The rules are evaluated in priority order
//! at every level of the recursion:
//!
//! 1. An absent base (`null`) yields the overrides unchanged.
//! 2. Two arrays concatenate: base elements first, then override elements.
//! 3. Overrides that are not a plain mapping replace the base wholesale.
//! 4. Two mappings merge key by key. Override entries that are `null` are
//!    skipped so the base entry survives; every other entry is merged
//!    recursively against the base entry of the same key.
//!
//! Falsy values such as `0`, `false`, and `""` are ordinary values and do
//! override. Only `null` (and keys that are missing altogether) are treated
//! as "no override".
//!
//! The merge is total: it never fails and never panics for any pair of
//! inputs.

use serde_json::{Map, Value};

mod iterative;

pub use iterative::deep_merge_iterative;

/// Returns `true` when `value` is a plain key-value mapping.
///
/// Arrays, primitives, and `null` are not mappings.
///
/// # Examples
///
/// ```rust
/// use deep_merge::is_plain_mapping;
/// use serde_json::json;
///
/// assert!(is_plain_mapping(&json!({"a": 1})));
/// assert!(!is_plain_mapping(&json!([1, 2])));
/// assert!(!is_plain_mapping(&json!(null)));
/// ```
#[must_use]
pub const fn is_plain_mapping(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Returns `true` when `value` stands for a missing base or override.
///
/// `serde_json` has no separate "undefined"; a missing map entry and an
/// explicit `null` both surface as [`Value::Null`].
#[must_use]
pub fn is_absent(value: &Value) -> bool {
    value.is_null()
}

/// Merge `overrides` over `base`, leaving both inputs untouched.
///
/// # Examples
///
/// ```rust
/// use deep_merge::deep_merge;
/// use serde_json::json;
///
/// let base = json!({"theme": "dark", "notifications": {"email": true, "push": false}});
/// let overrides = json!({"notifications": {"push": true}});
///
/// assert_eq!(
///     deep_merge(&base, &overrides),
///     json!({"theme": "dark", "notifications": {"email": true, "push": true}}),
/// );
///
/// // Arrays concatenate rather than replace.
/// assert_eq!(deep_merge(&json!([1, 2, 3]), &json!([4, 5])), json!([1, 2, 3, 4, 5]));
/// ```
#[must_use]
pub fn deep_merge(base: &Value, overrides: &Value) -> Value {
    deep_merge_owned(base.clone(), overrides.clone())
}

/// Merge `overrides` over `base`, consuming both values.
///
/// Behaves exactly like [`deep_merge`] but reuses the allocations of the
/// inputs instead of cloning them.
#[must_use]
pub fn deep_merge_owned(base: Value, overrides: Value) -> Value {
    match classify(base, overrides) {
        Step::Resolved(value) => value,
        Step::Descend { mut target, entries } => {
            for (key, incoming) in entries {
                if is_absent(&incoming) {
                    continue;
                }
                let existing = take_entry(&mut target, &key);
                let merged = deep_merge_owned(existing, incoming);
                target.insert(key, merged);
            }
            Value::Object(target)
        }
    }
}

/// Fold each layer over `base` in order, the last layer taking precedence.
///
/// Returns `base` unchanged when `layers` is empty.
///
/// # Examples
///
/// ```rust
/// use deep_merge::merge_layers;
/// use serde_json::json;
///
/// let merged = merge_layers(
///     json!({"port": 3000, "hosts": ["a"]}),
///     [json!({"port": 4000}), json!({"hosts": ["b"]})],
/// );
/// assert_eq!(merged, json!({"port": 4000, "hosts": ["a", "b"]}));
/// ```
#[must_use]
pub fn merge_layers<I>(base: Value, layers: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    layers.into_iter().fold(base, deep_merge_owned)
}

/// Outcome of applying the non-recursive merge rules to one pair of values.
pub(crate) enum Step {
    /// The merge is decided at this level.
    Resolved(Value),
    /// Both sides are handled as mappings and each override entry must be
    /// merged into `target`.
    Descend {
        target: Map<String, Value>,
        entries: Map<String, Value>,
    },
}

/// Apply rules 1 to 3 and prepare rule 4.
///
/// A base that is not a mapping but meets a mapping override is spread into
/// one first; see [`into_mapping`].
pub(crate) fn classify(base: Value, overrides: Value) -> Step {
    if is_absent(&base) {
        tracing::trace!("absent base; taking overrides as-is");
        return Step::Resolved(overrides);
    }
    match (base, overrides) {
        (Value::Array(mut head), Value::Array(tail)) => {
            tracing::trace!(
                base_len = head.len(),
                overrides_len = tail.len(),
                "concatenating arrays"
            );
            head.extend(tail);
            Step::Resolved(Value::Array(head))
        }
        (other, Value::Object(entries)) => Step::Descend {
            target: into_mapping(other),
            entries,
        },
        (_, replacement) => Step::Resolved(replacement),
    }
}

/// Spread `value` into a mapping that a mapping override can merge into.
///
/// Arrays become index-keyed entries (`"0"`, `"1"`, ...), and strings become
/// one single-character entry per `char`. Other scalars have no entries.
fn into_mapping(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item))
            .collect(),
        Value::String(text) => text
            .chars()
            .enumerate()
            .map(|(index, ch)| (index.to_string(), Value::String(ch.to_string())))
            .collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) => Map::new(),
    }
}

/// Move the entry stored under `key` out of `target`, leaving `null` in its
/// slot so insertion order is kept when the merged value is written back.
pub(crate) fn take_entry(target: &mut Map<String, Value>, key: &str) -> Value {
    target.get_mut(key).map(std::mem::take).unwrap_or_default()
}
