//! Typed deep-partial overrides.
//!
//! A *deep-partial* of a type makes every field optional, recursively, so a
//! caller can describe an update to a single nested field without rebuilding
//! the surrounding structure. The [`DeepPartial`] derive generates the
//! companion struct; this module supplies the trait and the typed merge that
//! routes both sides through [`crate::deep_merge_owned`].
//!
//! ```rust
//! use deep_merge::DeepPartial;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize, DeepPartial)]
//! struct Notifications {
//!     email: bool,
//!     push: bool,
//! }
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize, DeepPartial)]
//! struct Settings {
//!     theme: String,
//!     #[deep_partial(nested)]
//!     notifications: Notifications,
//! }
//!
//! let settings = Settings {
//!     theme: "dark".to_owned(),
//!     notifications: Notifications { email: true, push: false },
//! };
//! let update = SettingsPartial {
//!     notifications: Some(NotificationsPartial { push: Some(true), ..Default::default() }),
//!     ..Default::default()
//! };
//!
//! let merged = settings.merge_with(&update)?;
//! assert_eq!(merged.notifications, Notifications { email: true, push: true });
//! # Ok::<_, deep_merge::MergeError>(())
//! ```

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::{MergeError, MergeResult, MergeRole};
use crate::merge::deep_merge_owned;

/// Types with a deep-optional companion type.
///
/// Usually implemented through `#[derive(DeepPartial)]`, which generates
/// `<Name>Partial` and wires it up as [`DeepPartial::Partial`].
pub trait DeepPartial: Serialize + DeserializeOwned {
    /// The companion type whose fields are all optional, recursively.
    ///
    /// `None` fields must serialise as missing keys (or `null`) so the merge
    /// leaves the matching base field untouched. Partials deserialise too,
    /// so overrides can be read from files.
    type Partial: Serialize + DeserializeOwned + Default;

    /// Merge `overrides` over `self`, returning a new value.
    ///
    /// Collections concatenate, nested partials merge recursively, and any
    /// other provided field replaces the base field.
    ///
    /// # Errors
    ///
    /// Returns a [`MergeError`] when either side fails to serialise or the
    /// merged JSON no longer deserialises into `Self`.
    fn merge_with(&self, overrides: &Self::Partial) -> MergeResult<Self> {
        merge_serialized(self, overrides)
    }
}

/// Free-function form of [`DeepPartial::merge_with`].
///
/// # Errors
///
/// See [`DeepPartial::merge_with`].
pub fn merge_partial<T: DeepPartial>(base: &T, overrides: &T::Partial) -> MergeResult<T> {
    base.merge_with(overrides)
}

/// Merge any serialisable `overrides` over `base` and rebuild a `T`.
///
/// Both sides are converted to [`Value`], merged with
/// [`crate::deep_merge_owned`], and the result is deserialised. This accepts
/// hand-written override types as well as derived partials.
///
/// # Errors
///
/// Returns [`MergeError::Serialize`] tagged with the failing
/// [`MergeRole`], or [`MergeError::Deserialize`] when the merged value does
/// not fit `T`.
///
/// # Examples
///
/// ```rust
/// use deep_merge::merge_serialized;
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct User { name: String, age: Option<u32>, roles: Vec<String> }
///
/// let user = User { name: "Alice".into(), age: None, roles: vec!["user".into()] };
/// let merged: User = merge_serialized(&user, &json!({"age": 30, "roles": ["admin"]}))?;
///
/// assert_eq!(merged.age, Some(30));
/// assert_eq!(merged.roles, ["user", "admin"]);
/// # Ok::<_, deep_merge::MergeError>(())
/// ```
pub fn merge_serialized<T, P>(base: &T, overrides: &P) -> MergeResult<T>
where
    T: Serialize + DeserializeOwned,
    P: Serialize + ?Sized,
{
    let base_value = to_value(base, MergeRole::Base)?;
    let overrides_value = to_value(overrides, MergeRole::Overrides)?;
    tracing::debug!(
        target_type = std::any::type_name::<T>(),
        "merging typed overrides"
    );
    let merged = deep_merge_owned(base_value, overrides_value);
    serde_json::from_value(merged).map_err(|source| MergeError::Deserialize { source })
}

fn to_value<V: Serialize + ?Sized>(value: &V, role: MergeRole) -> MergeResult<Value> {
    serde_json::to_value(value).map_err(|source| MergeError::Serialize { role, source })
}
