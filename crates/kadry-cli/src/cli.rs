//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::{CalendarArgs, NextSendArgs, WordsArgs};

/// Kadry - amount spelling and insurance send-date scheduling
#[derive(Parser)]
#[command(name = "kadry")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (TOML)
    #[arg(short, long, env = "KADRY_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Holiday calendar file (JSON), overrides the configured one
    #[arg(long, env = "KADRY_HOLIDAYS", global = true)]
    pub holidays: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Spell out a ruble amount in Russian words
    Words(WordsArgs),

    /// Compute the next insurance list send time
    NextSend(NextSendArgs),

    /// Inspect the holiday calendar
    Calendar(CalendarArgs),

    /// Show the effective configuration
    Config,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
