//! Kadry CLI - payroll document helpers on the command line.
//!
//! # Usage
//!
//! ```bash
//! # Spell out an amount
//! kadry words 2521.05
//!
//! # Next insurance list send time
//! kadry next-send --now 2025-01-25T09:00
//!
//! # Check a date against the holiday calendar
//! kadry calendar check 2025-05-09
//!
//! # Use a custom configuration and holiday file
//! kadry --config kadry.toml --holidays russia-2026.json next-send --count 3
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;
use config::KadryConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let format = cli.format;
    let config = KadryConfig::load(cli.config.as_deref())?;
    let ctx = Context::new(config, cli.holidays);

    match cli.command {
        Commands::Words(args) => commands::words::execute(args, &ctx, format)?,
        Commands::NextSend(args) => commands::next_send::execute(args, &ctx, format)?,
        Commands::Calendar(args) => commands::calendar::execute(args, &ctx, format)?,
        Commands::Config => commands::config::execute(&ctx, format)?,
    }

    Ok(())
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level follows the number of
/// `-v` flags.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
