//! Error types for `deep-merge`.

use camino::Utf8PathBuf;
use deep_merge::MergeError;
use thiserror::Error;

/// Errors surfaced by the `deep-merge` pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    /// An input file could not be loaded or parsed.
    #[error(transparent)]
    Merge(#[from] MergeError),

    /// The merged value could not be encoded as JSON.
    #[error("failed to encode merged JSON: {0}")]
    Encode(#[from] serde_json::Error),

    /// Writing the merged document failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Destination that failed.
        path: Utf8PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}
