//! Holiday calendar keyed by year, configurable at runtime.
//!
//! This module provides a calendar that can be loaded from JSON,
//! constructed programmatically, or filled from an external loader.
//!
//! # Example
//!
//! ```
//! use kadry_core::calendars::{HolidayCalendar, YearlyHolidayCalendar};
//! use chrono::NaiveDate;
//!
//! let json = r#"{
//!     "name": "Company",
//!     "holidays": ["2026-01-01", "2026-01-02"]
//! }"#;
//! let cal = YearlyHolidayCalendar::from_json(json).unwrap();
//!
//! assert!(cal.is_holiday(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()));
//! assert!(!cal.has_year(2027));
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use super::HolidayCalendar;
use crate::error::{KadryError, KadryResult};

/// Date format used in calendar data files.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A holiday calendar storing explicit dates per year.
///
/// Years without any configured dates have no holidays. Use
/// [`YearlyHolidayCalendar::has_year`] to detect missing coverage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearlyHolidayCalendar {
    /// Name of the calendar
    name: String,
    /// Holidays grouped by year
    years: BTreeMap<i32, BTreeSet<NaiveDate>>,
}

impl YearlyHolidayCalendar {
    /// Create a new empty calendar.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            years: BTreeMap::new(),
        }
    }

    /// Create a calendar from a list of holiday dates.
    pub fn from_dates(name: impl Into<String>, holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        let mut cal = Self::new(name);
        cal.add_holidays(holidays);
        cal
    }

    /// Create a calendar by loading holidays from a function.
    ///
    /// This allows holidays to be loaded from any source (database, API, etc.)
    /// by providing a function that returns the holidays for a given year.
    /// Dates returned for a different year than requested are still stored
    /// under their own year.
    ///
    /// # Example
    ///
    /// ```
    /// use kadry_core::calendars::{HolidayCalendar, YearlyHolidayCalendar};
    /// use chrono::NaiveDate;
    ///
    /// let cal = YearlyHolidayCalendar::from_loader("Loaded", 2025..=2026, |year| {
    ///     NaiveDate::from_ymd_opt(year, 1, 1).into_iter().collect()
    /// });
    ///
    /// assert!(cal.is_holiday(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
    /// assert_eq!(cal.holiday_count(), 2);
    /// ```
    pub fn from_loader<F>(
        name: impl Into<String>,
        years: impl IntoIterator<Item = i32>,
        loader: F,
    ) -> Self
    where
        F: Fn(i32) -> Vec<NaiveDate>,
    {
        let mut cal = Self::new(name);
        for year in years {
            cal.add_holidays(loader(year));
        }
        cal
    }

    /// Load a calendar from JSON data.
    ///
    /// # JSON Format
    ///
    /// ```json
    /// {
    ///   "name": "Russia",
    ///   "holidays": ["2025-01-01", "2025-05-09"]
    /// }
    /// ```
    pub fn from_json(json: &str) -> KadryResult<Self> {
        let data: CalendarData = serde_json::from_str(json)
            .map_err(|e| KadryError::calendar_error(format!("Failed to parse JSON: {}", e)))?;
        Self::from_calendar_data(data)
    }

    /// Load a calendar from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> KadryResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            KadryError::calendar_error(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let cal = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            name = %cal.name,
            holidays = cal.holiday_count(),
            "loaded holiday calendar"
        );
        Ok(cal)
    }

    /// Build a calendar from parsed calendar data.
    pub fn from_calendar_data(data: CalendarData) -> KadryResult<Self> {
        let mut cal = Self::new(data.name);
        for date_str in data.holidays {
            let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT).map_err(|e| {
                KadryError::calendar_error(format!("Invalid date '{}': {}", date_str, e))
            })?;
            cal.add_holiday(date);
        }
        Ok(cal)
    }

    /// Add a holiday date.
    pub fn add_holiday(&mut self, date: NaiveDate) {
        self.years.entry(date.year()).or_default().insert(date);
    }

    /// Add multiple holidays.
    pub fn add_holidays(&mut self, dates: impl IntoIterator<Item = NaiveDate>) {
        for date in dates {
            self.add_holiday(date);
        }
    }

    /// Remove a holiday date. Returns true if it was present.
    pub fn remove_holiday(&mut self, date: NaiveDate) -> bool {
        let Some(dates) = self.years.get_mut(&date.year()) else {
            return false;
        };
        let removed = dates.remove(&date);
        if dates.is_empty() {
            self.years.remove(&date.year());
        }
        removed
    }

    /// Returns true if any holidays are configured for the year.
    pub fn has_year(&self, year: i32) -> bool {
        self.years.contains_key(&year)
    }

    /// Years with configured holidays, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    /// Holidays configured for a year, ascending.
    pub fn holidays_in_year(&self, year: i32) -> impl Iterator<Item = NaiveDate> + '_ {
        self.years.get(&year).into_iter().flatten().copied()
    }

    /// Count total holidays in this calendar.
    pub fn holiday_count(&self) -> usize {
        self.years.values().map(BTreeSet::len).sum()
    }

    /// Export calendar data to a serializable struct.
    pub fn to_calendar_data(&self) -> CalendarData {
        CalendarData {
            name: self.name.clone(),
            holidays: self
                .years
                .values()
                .flatten()
                .map(|d| d.format(DATE_FORMAT).to_string())
                .collect(),
        }
    }

    /// Export to JSON string.
    pub fn to_json(&self) -> KadryResult<String> {
        serde_json::to_string_pretty(&self.to_calendar_data()).map_err(|e| {
            KadryError::calendar_error(format!("Failed to serialize calendar: {}", e))
        })
    }
}

impl HolidayCalendar for YearlyHolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.years
            .get(&date.year())
            .is_some_and(|dates| dates.contains(&date))
    }
}

/// Calendar data structure for JSON serialization.
///
/// # JSON Format
///
/// ```json
/// {
///   "name": "Russia",
///   "holidays": ["2025-01-01", "2025-12-31"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarData {
    /// Name of the calendar
    pub name: String,

    /// List of holiday dates in YYYY-MM-DD format
    #[serde(default)]
    pub holidays: Vec<String>,
}

impl CalendarData {
    /// Create a new CalendarData.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: Vec::new(),
        }
    }

    /// Add a holiday date string.
    pub fn with_holiday(mut self, date: &str) -> Self {
        self.holidays.push(date.to_string());
        self
    }

    /// Add multiple holiday date strings.
    pub fn with_holidays(mut self, dates: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.holidays.extend(dates.into_iter().map(|s| s.into()));
        self
    }

    /// Build into a YearlyHolidayCalendar.
    pub fn build(self) -> KadryResult<YearlyHolidayCalendar> {
        YearlyHolidayCalendar::from_calendar_data(self)
    }
}
