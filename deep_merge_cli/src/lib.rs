//! Library interface for the `deep-merge` command.
//!
//! The binary is a thin wrapper around [`run`], which loads every input with
//! [`deep_merge::load_value`], folds the overrides over the base and emits
//! the merged document as JSON.

pub mod cli;
pub mod error;
pub mod output;

use std::io::Write;

use deep_merge::{deep_merge_iterative, load_value, merge_layers};
use serde_json::Value;

use crate::cli::Args;
use crate::error::CliError;

/// Load and merge the files named in `args`.
///
/// # Errors
///
/// Returns [`CliError::Merge`] for the first input that fails to load.
pub fn merge_files(args: &Args) -> Result<Value, CliError> {
    let base = load_value(&args.base)?;
    let layers = args
        .overrides
        .iter()
        .map(|path| load_value(path))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::info!(
        base = %args.base,
        layers = layers.len(),
        iterative = args.is_iterative,
        "merging inputs"
    );
    let merged = if args.is_iterative {
        layers.into_iter().fold(base, deep_merge_iterative)
    } else {
        merge_layers(base, layers)
    };
    Ok(merged)
}

/// Run the command, writing to `--output` or else to `stdout`.
///
/// # Errors
///
/// Returns a [`CliError`] when loading, encoding or writing fails.
pub fn run(args: &Args, stdout: &mut dyn Write) -> Result<(), CliError> {
    let merged = merge_files(args)?;
    let rendered = output::render(&merged, args.is_compact)?;
    match &args.output {
        Some(path) => output::write_file(path, &rendered),
        None => stdout
            .write_all(rendered.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|source| CliError::Io {
                path: "<stdout>".into(),
                source,
            }),
    }
}
