//! CLI entrypoint for `deep-merge`.

use std::process::ExitCode;

use clap::Parser;
use deep_merge_cli::cli::Args;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args);

    match deep_merge_cli::run(&args, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "deep-merge failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(args: &Args) {
    let filter = EnvFilter::builder()
        .with_default_directive(args.log_level().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
