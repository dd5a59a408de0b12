//! Built-in Russian production calendar.
//!
//! Only 2025 is covered. Other years fall back to "no holidays"; load a
//! [`YearlyHolidayCalendar`] from JSON to cover them.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use super::YearlyHolidayCalendar;

/// Name of the built-in calendar.
pub const NAME: &str = "Russia";

/// Non-working holidays of 2025 as (month, day).
///
/// Includes the days moved off weekends by government decree.
const HOLIDAYS_2025: [(u32, u32); 16] = [
    (1, 1),   // New Year
    (1, 2),   // New Year holidays
    (1, 3),   // New Year holidays
    (1, 6),   // New Year holidays
    (1, 7),   // Orthodox Christmas
    (1, 8),   // New Year holidays
    (2, 24),  // Defender of the Fatherland Day, moved from Sunday
    (3, 8),   // International Women's Day
    (3, 10),  // moved from March 8 (Saturday)
    (5, 1),   // Spring and Labour Day
    (5, 2),   // moved day off
    (5, 9),   // Victory Day
    (6, 12),  // Russia Day
    (6, 13),  // moved day off
    (11, 4),  // Unity Day
    (12, 31), // New Year's Eve
];

/// The built-in calendar, initialized on first use.
pub static RUSSIA: Lazy<YearlyHolidayCalendar> = Lazy::new(|| {
    YearlyHolidayCalendar::from_dates(
        NAME,
        HOLIDAYS_2025
            .iter()
            .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(2025, month, day)),
    )
});

/// Returns the built-in Russian production calendar.
pub fn production_calendar() -> &'static YearlyHolidayCalendar {
    &RUSSIA
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::HolidayCalendar;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_all_2025_holidays_loaded() {
        let cal = production_calendar();
        assert_eq!(cal.holiday_count(), HOLIDAYS_2025.len());
        assert_eq!(cal.name(), NAME);
        assert!(cal.is_holiday(date(2025, 1, 1)));
        assert!(cal.is_holiday(date(2025, 3, 10)));
        assert!(cal.is_holiday(date(2025, 12, 31)));
        assert!(!cal.is_holiday(date(2025, 3, 11)));
    }

    #[test]
    fn test_other_years_have_no_holidays() {
        let cal = production_calendar();
        assert!(!cal.is_holiday(date(2026, 1, 1)));
        assert!(!cal.is_holiday(date(2024, 5, 9)));
        assert!(!cal.has_year(2026));
    }
}
