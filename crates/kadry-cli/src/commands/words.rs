//! Words command implementation.
//!
//! Spells out a ruble amount for payroll documents.

use anyhow::Result;
use clap::Args;
use kadry_core::types::MonetaryAmount;
use kadry_core::words::spell;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_single, KeyValue};

/// Arguments for the words command.
#[derive(Args, Debug)]
pub struct WordsArgs {
    /// Amount in rubles, e.g. 2521.05 (a comma separator is accepted)
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
}

/// Spelled-out amount.
#[derive(Debug, Serialize)]
pub struct WordsResult {
    pub amount: Decimal,
    pub rubles: u32,
    pub kopecks: u32,
    pub words: String,
}

/// Execute the words command.
pub fn execute(args: WordsArgs, ctx: &Context, format: OutputFormat) -> Result<()> {
    let bounds = ctx.config().amount.bounds();
    let amount = MonetaryAmount::parse(&args.amount, &bounds)?;

    let result = WordsResult {
        amount: amount.value(),
        rubles: amount.major(),
        kopecks: amount.minor(),
        words: spell(amount),
    };
    tracing::info!(amount = %result.amount, "spelled amount");

    let rows = [
        KeyValue::new("Amount", result.amount.to_string()),
        KeyValue::new("Rubles", result.rubles.to_string()),
        KeyValue::new("Kopecks", format!("{:02}", result.kopecks)),
        KeyValue::new("Words", result.words.as_str()),
    ];

    print_single(&result, &rows, &result.words, format)
}
