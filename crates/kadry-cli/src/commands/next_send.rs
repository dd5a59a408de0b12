//! Next-send command implementation.
//!
//! Computes when the insurance list is sent next.

use anyhow::Result;
use chrono::{Datelike, NaiveDateTime};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{format_timestamp, parse_timestamp, Context};
use crate::output::print_output;

/// Arguments for the next-send command.
#[derive(Args, Debug)]
pub struct NextSendArgs {
    /// Reference instant (YYYY-MM-DDTHH:MM[:SS] or YYYY-MM-DD). Defaults to now.
    #[arg(long)]
    pub now: Option<String>,

    /// Number of upcoming send times to list
    #[arg(short = 'n', long, default_value = "1", value_parser = clap::value_parser!(u16).range(1..=120))]
    pub count: u16,
}

/// One send slot.
#[derive(Debug, Serialize, Tabled)]
pub struct SendSlot {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Send at")]
    pub send_at: String,
    #[tabled(rename = "Weekday")]
    pub weekday: String,
}

impl SendSlot {
    fn new(index: usize, send_at: NaiveDateTime) -> Self {
        Self {
            index,
            send_at: format_timestamp(send_at),
            weekday: send_at.weekday().to_string(),
        }
    }
}

/// Execute the next-send command.
pub fn execute(args: NextSendArgs, ctx: &Context, format: OutputFormat) -> Result<()> {
    let now = match args.now {
        Some(ref s) => parse_timestamp(s)?,
        None => chrono::Local::now().naive_local(),
    };

    let calculator = ctx.calculator()?;
    let slots = calculator.upcoming(now, usize::from(args.count))?;
    tracing::info!(%now, count = slots.len(), "computed send dates");

    let rows: Vec<SendSlot> = slots
        .into_iter()
        .enumerate()
        .map(|(i, send_at)| SendSlot::new(i + 1, send_at))
        .collect();

    print_output(&rows, format, |slot| slot.send_at.clone())
}
