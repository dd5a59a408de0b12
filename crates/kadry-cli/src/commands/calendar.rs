//! Calendar command implementation.
//!
//! Inspects the holiday calendar and working-day resolution.

use anyhow::Result;
use chrono::Datelike;
use clap::{Args, Subcommand};
use kadry_core::calendars::HolidayCalendar;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{parse_date, Context};
use crate::output::{format_flag, print_header, print_output, print_single, KeyValue};

/// Arguments for the calendar command.
#[derive(Args, Debug)]
pub struct CalendarArgs {
    #[command(subcommand)]
    pub command: CalendarCommand,
}

/// Calendar subcommands.
#[derive(Subcommand, Debug)]
pub enum CalendarCommand {
    /// Check whether a date is a working day
    Check(CheckArgs),

    /// List configured holidays
    List(ListArgs),

    /// Print the holiday calendar as JSON
    Export,
}

/// Arguments for check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Date to check (YYYY-MM-DD)
    pub date: String,
}

/// Arguments for list subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list holidays of this year
    #[arg(short, long)]
    pub year: Option<i32>,
}

/// Working-day check result.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub date: String,
    pub weekday: String,
    pub weekend: bool,
    pub holiday: bool,
    pub working_day: bool,
    pub resolves_to: String,
}

/// One holiday.
#[derive(Debug, Serialize, Tabled)]
pub struct HolidayRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Weekday")]
    pub weekday: String,
}

/// Execute the calendar command.
pub fn execute(args: CalendarArgs, ctx: &Context, format: OutputFormat) -> Result<()> {
    match args.command {
        CalendarCommand::Check(check) => execute_check(check, ctx, format),
        CalendarCommand::List(list) => execute_list(list, ctx, format),
        CalendarCommand::Export => execute_export(ctx),
    }
}

fn execute_check(args: CheckArgs, ctx: &Context, format: OutputFormat) -> Result<()> {
    let date = parse_date(&args.date)?;
    let resolver = ctx.resolver()?;
    let resolved = resolver.resolve(date)?;

    let result = CheckResult {
        date: date.to_string(),
        weekday: date.weekday().to_string(),
        weekend: resolver.policy().weekend.is_weekend(date.weekday()),
        holiday: resolver.calendar().is_holiday(date),
        working_day: resolver.is_working_day(date),
        resolves_to: resolved.to_string(),
    };

    if format == OutputFormat::Table {
        print_header(&format!("{} ({})", date, resolver.calendar().name()));
    }

    let rows = [
        KeyValue::new("Date", result.date.as_str()),
        KeyValue::new("Weekday", result.weekday.as_str()),
        KeyValue::new("Weekend", format_flag(result.weekend)),
        KeyValue::new("Holiday", format_flag(result.holiday)),
        KeyValue::new("Working day", format_flag(result.working_day)),
        KeyValue::new("Resolves to", result.resolves_to.as_str()),
    ];

    print_single(&result, &rows, &result.resolves_to, format)
}

fn execute_list(args: ListArgs, ctx: &Context, format: OutputFormat) -> Result<()> {
    let calendar = ctx.calendar()?;
    let years: Vec<i32> = match args.year {
        Some(year) => vec![year],
        None => calendar.years().collect(),
    };

    let rows: Vec<HolidayRow> = years
        .iter()
        .flat_map(|&year| calendar.holidays_in_year(year))
        .map(|date| HolidayRow {
            date: date.to_string(),
            weekday: date.weekday().to_string(),
        })
        .collect();

    if rows.is_empty() {
        tracing::warn!(calendar = calendar.name(), year = ?args.year, "no holidays configured");
    }

    print_output(&rows, format, |row| row.date.clone())
}

fn execute_export(ctx: &Context) -> Result<()> {
    println!("{}", ctx.calendar()?.to_json()?);
    Ok(())
}
