//! CLI entry point for the looping starfield generator

use clap::Parser;
use starloop::io::cli::{Cli, Generator};
use starloop::io::shutdown::{CancellationToken, spawn_signal_watcher};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> starloop::Result<()> {
    let token = CancellationToken::new();
    let _watcher = spawn_signal_watcher(token.clone(), cli.grace())?;

    let mut generator = Generator::new(cli);
    let delivered = generator.run(&token)?;
    tracing::info!(images = delivered.len(), "done");
    Ok(())
}
