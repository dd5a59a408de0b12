//! Integration tests for the insurance send-date schedule.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use kadry_core::calendars::russia;
use kadry_core::prelude::*;
use proptest::prelude::*;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

// ============================================================================
// Injected calendars
// ============================================================================

#[test]
fn json_calendar_replaces_builtin_data() {
    let json = r#"{
        "name": "Russia 2026",
        "holidays": ["2026-01-01", "2026-01-02", "2026-01-05", "2026-01-06",
                     "2026-01-07", "2026-01-08", "2026-01-09"]
    }"#;
    let cal = YearlyHolidayCalendar::from_json(json).unwrap();
    let calc = NextSendDateCalculator::new(SendSchedule::default(), WorkingDayResolver::new(cal));

    // With the built-in calendar 2026 has no holidays and January 1 is used.
    assert_eq!(
        next_insurance_send_date(at(2025, 12, 25, 0, 0)).unwrap(),
        at(2026, 1, 1, 18, 0)
    );

    // January 1 2026 resolves to Wednesday December 31 2025.
    assert_eq!(calc.next(at(2025, 12, 25, 0, 0)).unwrap(), at(2025, 12, 31, 18, 0));

    // Saturday January 10 2026 resolves through the holiday block to Dec 31.
    // That is behind `now`, so January 20 is next.
    assert_eq!(calc.next(at(2026, 1, 2, 0, 0)).unwrap(), at(2026, 1, 20, 18, 0));
}

#[test]
fn shared_calendar_across_calculators() {
    let cal = std::sync::Arc::new(YearlyHolidayCalendar::from_dates(
        "Shared",
        [NaiveDate::from_ymd_opt(2026, 2, 20).unwrap()],
    ));

    let evening = NextSendDateCalculator::new(
        SendSchedule::default(),
        WorkingDayResolver::new(std::sync::Arc::clone(&cal)),
    );
    let morning = NextSendDateCalculator::new(
        SendSchedule::new([20], 9, 0, 2).unwrap(),
        WorkingDayResolver::new(cal),
    );

    // Friday February 20 2026 is a holiday in the shared calendar.
    assert_eq!(evening.next(at(2026, 2, 15, 0, 0)).unwrap(), at(2026, 2, 19, 18, 0));
    assert_eq!(morning.next(at(2026, 2, 15, 0, 0)).unwrap(), at(2026, 2, 19, 9, 0));
}

#[test]
fn six_day_week_policy() {
    let policy = WorkingDayPolicy {
        weekend: WeekendDays::SUNDAY_ONLY,
        ..WorkingDayPolicy::default()
    };
    let calc = NextSendDateCalculator::new(
        SendSchedule::default(),
        WorkingDayResolver::with_policy(NoHolidays, policy),
    );

    // Saturday February 1 2025 is a working day under a six-day week.
    assert_eq!(calc.next(at(2025, 1, 25, 0, 0)).unwrap(), at(2025, 2, 1, 18, 0));
}

// ============================================================================
// Properties
// ============================================================================

fn reference_instant() -> impl Strategy<Value = NaiveDateTime> {
    // Minutes across 2024-01-01 .. 2027-01-01.
    (0i64..(3 * 366 * 24 * 60)).prop_map(|minutes| at(2024, 1, 1, 0, 0) + Duration::minutes(minutes))
}

proptest! {
    #[test]
    fn result_is_never_in_the_past(now in reference_instant()) {
        let calc = NextSendDateCalculator::russia();
        let next = calc.next(now).unwrap();

        prop_assert!(next >= now);
        prop_assert_eq!(next.time(), calc.schedule().time());
        prop_assert_eq!(next.hour(), 18);
        prop_assert!(calc.resolver().is_working_day(next.date()));
        prop_assert!(next - now <= Duration::days(45));
    }

    #[test]
    fn result_is_its_own_fixed_point(now in reference_instant()) {
        let next = next_insurance_send_date(now).unwrap();
        prop_assert_eq!(next_insurance_send_date(next).unwrap(), next);
    }

    #[test]
    fn resolver_never_moves_forward(day in 0i64..(3 * 366)) {
        let resolver = WorkingDayResolver::new(russia::production_calendar());
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(day);
        let resolved = resolver.resolve(date).unwrap();

        prop_assert!(resolved <= date);
        prop_assert!(resolver.is_working_day(resolved));
        if resolver.is_working_day(date) {
            prop_assert_eq!(resolved, date);
        }
    }
}
