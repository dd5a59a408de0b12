//! Holiday calendars and working-day resolution.
//!
//! This module provides:
//! - The [`HolidayCalendar`] trait injected into schedule calculations
//! - A year-keyed calendar loadable at runtime ([`YearlyHolidayCalendar`])
//! - The built-in Russian production calendar
//! - Weekend definitions and backward working-day resolution

mod resolver;
pub mod russia;
mod weekend;
mod yearly;

pub use resolver::{WorkingDayPolicy, WorkingDayResolver, DEFAULT_MAX_BACKWARD_STEPS};
pub use weekend::WeekendDays;
pub use yearly::{CalendarData, YearlyHolidayCalendar};

use chrono::NaiveDate;
use std::sync::Arc;

/// Source of non-working (holiday) dates.
///
/// Weekends are not part of a holiday calendar; they are configured on the
/// [`WorkingDayResolver`]. Implementations must answer for every date: years
/// without data simply have no holidays.
pub trait HolidayCalendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &str;

    /// Returns true if the date is a holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

impl<T: HolidayCalendar + ?Sized> HolidayCalendar for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        (**self).is_holiday(date)
    }
}

impl<T: HolidayCalendar + ?Sized> HolidayCalendar for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        (**self).is_holiday(date)
    }
}

impl<T: HolidayCalendar + ?Sized> HolidayCalendar for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        (**self).is_holiday(date)
    }
}

/// A calendar without holidays.
///
/// Useful for testing or when holiday data is not available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn name(&self) -> &str {
        "No Holidays"
    }

    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}
