//! Temporary directories populated with value files.
//!
//! # Examples
//!
//! ```
//! use test_helpers::fixtures::FixtureDir;
//!
//! let fixtures = FixtureDir::new()?;
//! let path = fixtures.write("base.json", "{}")?;
//! assert!(path.starts_with(fixtures.path()));
//! # Ok::<_, anyhow::Error>(())
//! ```

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary directory that is removed when dropped.
pub struct FixtureDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl FixtureDir {
    /// Creates an empty fixture directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is
    /// not valid UTF-8.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create fixture directory")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| anyhow!("fixture path is not UTF-8: {}", path.display()))?;
        Ok(Self { _dir: dir, root })
    }

    /// Returns the root of the fixture directory.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.root
    }

    /// Writes `contents` to `name` inside the fixture directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> Result<Utf8PathBuf> {
        let path = self.root.join(name);
        std::fs::write(&path, contents).with_context(|| format!("write fixture {path}"))?;
        Ok(path)
    }
}
