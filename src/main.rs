//! imgclip CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, set up logging,
//! dispatch to single-file or batch processing, and exit with the
//! appropriate status. For programmatic use, prefer the library API
//! (`imgclip::api`).

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();

    let log_level = if args.log { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("imgclip={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = cli::run(args) {
        tracing::error!("{err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
