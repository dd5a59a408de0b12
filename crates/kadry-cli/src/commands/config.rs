//! Config command implementation.
//!
//! Shows the configuration in effect after defaults are applied.

use anyhow::Result;

use crate::cli::OutputFormat;
use crate::commands::Context;

/// Execute the config command.
pub fn execute(ctx: &Context, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(ctx.config())?),
        _ => print!("{}", ctx.config().to_toml()?),
    }
    Ok(())
}
