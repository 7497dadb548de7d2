//! Explicit-stack evaluation of the merge rules.
//!
//! [`deep_merge_iterative`] produces the same output as
//! [`super::deep_merge_owned`], key order included, but keeps its work list
//! on the heap. Native stack usage stays constant however deeply the input
//! mappings nest, which matters when merging untrusted documents.

use serde_json::{Map, Value, map::IntoIter};

use super::{Step, classify, is_absent, take_entry};

/// A mapping that is still receiving merged entries.
struct Frame {
    /// Key under which the finished mapping is stored in its parent; `None`
    /// for the root.
    key: Option<String>,
    target: Map<String, Value>,
    entries: IntoIter,
}

impl Frame {
    fn new(key: Option<String>, target: Map<String, Value>, entries: Map<String, Value>) -> Self {
        Self {
            key,
            target,
            entries: entries.into_iter(),
        }
    }
}

/// Merge `overrides` over `base` without recursing on the call stack.
///
/// # Examples
///
/// ```rust
/// use deep_merge::{deep_merge_iterative, deep_merge_owned};
/// use serde_json::json;
///
/// let base = json!({"user": {"name": "John", "settings": {"theme": "dark"}}, "count": 5});
/// let overrides = json!({"user": {"settings": {"theme": "light"}}});
///
/// assert_eq!(
///     deep_merge_iterative(base.clone(), overrides.clone()),
///     deep_merge_owned(base, overrides),
/// );
/// ```
#[must_use]
pub fn deep_merge_iterative(base: Value, overrides: Value) -> Value {
    let mut stack = match classify(base, overrides) {
        Step::Resolved(value) => return value,
        Step::Descend { target, entries } => vec![Frame::new(None, target, entries)],
    };

    loop {
        let Some(frame) = stack.last_mut() else {
            // The root frame always returns below before the stack empties.
            return Value::Null;
        };

        if let Some((key, incoming)) = frame.entries.next() {
            if is_absent(&incoming) {
                continue;
            }
            let existing = take_entry(&mut frame.target, &key);
            match classify(existing, incoming) {
                Step::Resolved(value) => {
                    frame.target.insert(key, value);
                }
                Step::Descend { target, entries } => {
                    stack.push(Frame::new(Some(key), target, entries));
                }
            }
            continue;
        }

        let Some(finished) = stack.pop() else {
            return Value::Null;
        };
        let value = Value::Object(finished.target);
        match (finished.key, stack.last_mut()) {
            (Some(key), Some(parent)) => {
                parent.target.insert(key, value);
            }
            _ => return value,
        }
    }
}
