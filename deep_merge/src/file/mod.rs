//! Loading merge inputs from structured files.
//!
//! The parser is chosen from the file extension, case-insensitively:
//!
//! | Extension      | Parser        | Feature            |
//! |----------------|---------------|--------------------|
//! | `json`         | `serde_json`  | always available   |
//! | `toml`         | `toml`        | `toml` (default)   |
//! | `yaml`, `yml`  | `serde-saphyr`| `yaml`             |
//! | `json5`        | `json5`       | `json5`            |

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use serde_json::Value;

use crate::error::{MergeError, MergeResult};


/// Formats recognised by [`parse_value`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Format {
    Json,
    Json5,
    Toml,
    Yaml,
}

impl Format {
    fn from_path(path: &Utf8Path) -> Option<Self> {
        let ext = path.extension()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "json5" => Some(Self::Json5),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Read `path` and parse it into a JSON [`Value`].
///
/// # Errors
///
/// Returns [`MergeError::Io`] when the file cannot be read, and any error
/// documented on [`parse_value`] for its contents.
pub fn load_value(path: &Utf8Path) -> MergeResult<Value> {
    let contents = read_file(path).map_err(|source| MergeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(%path, bytes = contents.len(), "loaded value file");
    parse_value(path, &contents)
}

/// Parse `contents` according to the extension of `path`.
///
/// `path` is only used to pick the format and to label errors.
///
/// # Errors
///
/// - [`MergeError::UnsupportedFormat`] for unknown extensions.
/// - [`MergeError::FeatureDisabled`] when the format's feature is off.
/// - [`MergeError::Parse`] when the contents are malformed.
///
/// # Examples
///
/// ```rust
/// use camino::Utf8Path;
/// use deep_merge::parse_value;
/// use serde_json::json;
///
/// let value = parse_value(Utf8Path::new("base.json"), r#"{"a": [1, 2]}"#)?;
/// assert_eq!(value, json!({"a": [1, 2]}));
/// # Ok::<_, deep_merge::MergeError>(())
/// ```
pub fn parse_value(path: &Utf8Path, contents: &str) -> MergeResult<Value> {
    let format = Format::from_path(path).ok_or_else(|| MergeError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    match format {
        Format::Json => serde_json::from_str(contents).map_err(|e| MergeError::parse(path, e)),
        Format::Json5 => parse_json5(path, contents),
        Format::Toml => parse_toml(path, contents),
        Format::Yaml => parse_yaml(path, contents),
    }
}

/// Read a UTF-8 file through a capability handle on its parent directory.
fn read_file(path: &Utf8Path) -> std::io::Result<String> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidInput, "missing file name"))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(name)
}

#[cfg(feature = "toml")]
fn parse_toml(path: &Utf8Path, contents: &str) -> MergeResult<Value> {
    toml::from_str(contents).map_err(|e| MergeError::parse(path, e))
}

#[cfg(not(feature = "toml"))]
fn parse_toml(path: &Utf8Path, _contents: &str) -> MergeResult<Value> {
    Err(feature_disabled(path, "toml"))
}

#[cfg(feature = "yaml")]
fn parse_yaml(path: &Utf8Path, contents: &str) -> MergeResult<Value> {
    serde_saphyr::from_str_with_options(
        contents,
        serde_saphyr::Options {
            strict_booleans: true,
            ..serde_saphyr::Options::default()
        },
    )
    .map_err(|e| MergeError::parse(path, e))
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(path: &Utf8Path, _contents: &str) -> MergeResult<Value> {
    Err(feature_disabled(path, "yaml"))
}

#[cfg(feature = "json5")]
fn parse_json5(path: &Utf8Path, contents: &str) -> MergeResult<Value> {
    json5::from_str(contents).map_err(|e| MergeError::parse(path, e))
}

#[cfg(not(feature = "json5"))]
fn parse_json5(path: &Utf8Path, _contents: &str) -> MergeResult<Value> {
    Err(feature_disabled(path, "json5"))
}

#[cfg(any(not(feature = "toml"), not(feature = "yaml"), not(feature = "json5")))]
fn feature_disabled(path: &Utf8Path, feature: &'static str) -> MergeError {
    MergeError::FeatureDisabled {
        path: path.to_path_buf(),
        feature,
    }
}
