//! Error types produced around the merge.
//!
//! Merging two [`serde_json::Value`]s never fails. Errors only arise when
//! typed values are converted to or from JSON, or when values are loaded
//! from files.

use std::fmt;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Identifies which side of a merge a conversion failure belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MergeRole {
    /// The value being merged into.
    Base,
    /// The partial value applied on top.
    Overrides,
}

impl fmt::Display for MergeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Base => "base",
            Self::Overrides => "overrides",
        })
    }
}

/// Errors raised while preparing values for a merge or reading its result.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MergeError {
    /// A typed value could not be serialised into JSON.
    #[error("failed to serialise {role} value: {source}")]
    Serialize {
        /// Side of the merge that failed to serialise.
        role: MergeRole,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// The merged JSON could not be deserialised into the target type.
    #[error("failed to deserialise merged value: {source}")]
    Deserialize {
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A value file could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        /// Path that could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A value file was read but its contents failed to parse.
    #[error("failed to parse '{path}': {source}")]
    Parse {
        /// Path whose contents were rejected.
        path: Utf8PathBuf,
        /// Error reported by the format parser.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The file extension does not map to a known format.
    #[error("unsupported file format for '{path}'; expected json, json5, toml, yaml, or yml")]
    UnsupportedFormat {
        /// Path with the unrecognised extension.
        path: Utf8PathBuf,
    },

    /// The format is known but support for it was compiled out.
    #[error("cannot load '{path}': enable the '{feature}' feature to support this file format")]
    FeatureDisabled {
        /// Path that requires the missing feature.
        path: Utf8PathBuf,
        /// Cargo feature that enables the format.
        feature: &'static str,
    },
}

impl MergeError {
    /// Construct a [`MergeError::Parse`] for `path`.
    pub(crate) fn parse(
        path: impl Into<Utf8PathBuf>,
        err: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Parse {
            path: path.into(),
            source: err.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type MergeResult<T> = Result<T, MergeError>;
