//! Rolodex CLI - Command-line harness for the contact hash table.
//!
//! This binary replays the reference demonstration and builds tables from
//! configuration files or flags, printing their bucket layout.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rolodex_cli::{Cli, Commands};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries table dumps
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("rolodex=info".parse()?))
        .init();

    let cli = Cli::parse();

    info!("Rolodex CLI starting...");

    match cli.command {
        Commands::Demo(cmd) => cmd.run()?,
        Commands::Dump(cmd) => cmd.run()?,
    }

    info!("Rolodex CLI completed successfully");
    Ok(())
}
