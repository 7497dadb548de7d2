//! Output writers for `deep-merge`.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};

use crate::error::CliError;

/// Encode `value` as pretty or single-line JSON with a trailing newline.
///
/// # Errors
///
/// Returns [`CliError::Encode`] if serialisation fails.
pub fn render(value: &serde_json::Value, is_compact: bool) -> Result<String, CliError> {
    let mut rendered = if is_compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    rendered.push('\n');
    Ok(rendered)
}

/// Write `contents` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`CliError::Io`] naming the path that could not be written.
pub fn write_file(path: &Utf8Path, contents: &str) -> Result<(), CliError> {
    let io_err = |source: std::io::Error| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let name = path.file_name().ok_or_else(|| {
        io_err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "output path has no file name",
        ))
    })?;
    let dir = ensure_dir(parent)?;
    let mut file = dir
        .open_with(
            name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(io_err)?;
    file.write_all(contents.as_bytes()).map_err(io_err)?;
    tracing::debug!(%path, bytes = contents.len(), "wrote merged output");
    Ok(())
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir, CliError> {
    let io_err = |source: std::io::Error| CliError::Io {
        path: Utf8PathBuf::from(path),
        source,
    };
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority()).map_err(io_err)?;
            Dir::open_ambient_dir(path, ambient_authority()).map_err(io_err)
        }
        Err(open_err) => Err(io_err(open_err)),
    }
}
