//! CLI command implementations.

pub mod calendar;
pub mod config;
pub mod next_send;
pub mod words;

// Re-export submodules for convenience
pub use calendar::CalendarArgs;
pub use next_send::NextSendArgs;
pub use words::WordsArgs;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use chrono::{NaiveDate, NaiveDateTime};
use kadry_core::calendars::{russia, WorkingDayResolver, YearlyHolidayCalendar};
use kadry_core::NextSendDateCalculator;

use crate::config::KadryConfig;
use crate::error::{CliError, CliResult};

/// Timestamp layouts accepted by `--now`.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Configuration shared by all commands.
pub struct Context {
    config: KadryConfig,
    holidays: Option<PathBuf>,
}

impl Context {
    /// Creates a context. `holidays` overrides the configured holiday file.
    pub fn new(config: KadryConfig, holidays: Option<PathBuf>) -> Self {
        Self { config, holidays }
    }

    /// Returns the effective configuration.
    pub fn config(&self) -> &KadryConfig {
        &self.config
    }

    /// Loads the holiday calendar in effect.
    pub fn calendar(&self) -> Result<YearlyHolidayCalendar> {
        let file = self
            .holidays
            .as_ref()
            .or(self.config.calendar.holidays_file.as_ref());

        match file {
            Some(path) => YearlyHolidayCalendar::from_json_file(path)
                .with_context(|| format!("loading holiday calendar {}", path.display())),
            None => Ok(russia::production_calendar().clone()),
        }
    }

    /// Builds the working-day resolver.
    pub fn resolver(&self) -> Result<WorkingDayResolver<YearlyHolidayCalendar>> {
        Ok(WorkingDayResolver::with_policy(
            self.calendar()?,
            self.config.calendar.policy(),
        ))
    }

    /// Builds the send-date calculator.
    pub fn calculator(&self) -> Result<NextSendDateCalculator<YearlyHolidayCalendar>> {
        Ok(NextSendDateCalculator::new(
            self.config.schedule.clone(),
            self.resolver()?,
        ))
    }
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses a timestamp; a bare date means midnight.
pub fn parse_timestamp(s: &str) -> CliResult<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| CliError::InvalidTimestamp(s.to_string()))
}

/// Formats a send timestamp.
pub fn format_timestamp(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_layouts() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 25)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();

        assert_eq!(parse_timestamp("2025-01-25T09:30").unwrap(), expected);
        assert_eq!(parse_timestamp("2025-01-25T09:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2025-01-25 09:30").unwrap(), expected);
        assert_eq!(
            parse_timestamp("2025-01-25").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 25).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            parse_timestamp("25.01.2025"),
            Err(CliError::InvalidTimestamp(_))
        ));
        assert!(matches!(parse_date("2025-02-30"), Err(CliError::InvalidDate(_))));
    }

    #[test]
    fn test_context_uses_builtin_calendar() {
        let ctx = Context::new(KadryConfig::default(), None);
        let calendar = ctx.calendar().unwrap();
        assert!(calendar.has_year(2025));
    }

    #[test]
    fn test_context_holiday_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            br#"{"name": "Custom", "holidays": ["2026-03-09"]}"#,
        )
        .unwrap();

        let ctx = Context::new(KadryConfig::default(), Some(file.path().to_path_buf()));
        let calendar = ctx.calendar().unwrap();
        assert!(calendar.has_year(2026));
        assert!(!calendar.has_year(2025));
    }
}
