mod cli;
mod application;
mod domain;
mod data;
mod ml;
mod infra;
mod ui;

use anyhow::Result;
use cli::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The form owns the whole terminal, so it stays silent unless RUST_LOG asks
    let default_filter = if cli.is_interactive() { "laptop_price=off" } else { "laptop_price=info" };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    cli.run()
}
