//! Calendar month arithmetic.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::error::{KadryError, KadryResult};

/// A calendar month of a specific year.
///
/// # Example
///
/// ```rust
/// use kadry_core::types::YearMonth;
///
/// let month = YearMonth::new(2024, 11).unwrap();
/// let later = month.plus_months(3).unwrap();
/// assert_eq!((later.year(), later.month()), (2025, 2));
/// assert_eq!(later.length(), 28);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a year-month.
    ///
    /// # Errors
    ///
    /// Returns `KadryError::ConfigError` if the month is not in `1..=12`.
    pub fn new(year: i32, month: u32) -> KadryResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(KadryError::config_error(format!("invalid month: {month}")));
        }
        Ok(Self { year, month })
    }

    /// Returns the month containing the given date.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the month `months` after this one, or `None` if the year
    /// leaves the `i32` range.
    #[must_use]
    pub fn plus_months(&self, months: u32) -> Option<Self> {
        let total = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(months);
        Some(Self {
            year: i32::try_from(total.div_euclid(12)).ok()?,
            month: (total.rem_euclid(12) + 1) as u32,
        })
    }

    /// Returns the number of days in the month.
    #[must_use]
    pub fn length(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Returns the given day of the month, clamped to the last day.
    ///
    /// Day 0 is treated as the first day. Returns `None` outside the range
    /// of representable dates.
    #[must_use]
    pub fn at_day_clamped(&self, day: u32) -> Option<NaiveDate> {
        let day = day.clamp(1, self.length());
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Returns the number of days in a month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
