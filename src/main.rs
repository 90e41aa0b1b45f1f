//! Practic CLI - prints a fixed greeting.

mod cli;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr and stay quiet unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // A failed print does not change the exit status
    if let Err(err) = cli.execute() {
        tracing::warn!("{err:#}");
    }
}
