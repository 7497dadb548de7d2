//! Command-line interface definitions for `deep-merge`.

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser};
use tracing::Level;

/// Parsed CLI arguments for `deep-merge`.
#[derive(Debug, Parser)]
#[command(name = "deep-merge")]
#[command(about = "Deep-merge override files over a base file and print the result as JSON")]
#[command(version)]
pub struct Args {
    /// File providing the base value.
    #[arg(value_name = "BASE")]
    pub base: Utf8PathBuf,
    /// Override files, applied left to right.
    #[arg(value_name = "OVERRIDES")]
    pub overrides: Vec<Utf8PathBuf>,
    /// Print single-line JSON instead of pretty output.
    #[arg(long = "compact")]
    pub is_compact: bool,
    /// Merge with an explicit stack rather than recursion.
    #[arg(long = "iterative")]
    pub is_iterative: bool,
    /// Write the merged document here instead of stdout.
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,
    /// Raise the log level (repeat for more detail).
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Default log level implied by `--verbose`; `RUST_LOG` still wins.
    #[must_use]
    pub const fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
