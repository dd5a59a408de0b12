//! Next send date search.

use chrono::{Duration, NaiveDateTime};

use super::SendSchedule;
use crate::calendars::{russia, HolidayCalendar, WorkingDayResolver, YearlyHolidayCalendar};
use crate::error::{KadryError, KadryResult};
use crate::types::YearMonth;

/// Finds the next send timestamp for a [`SendSchedule`].
///
/// Candidates are enumerated month by month, trigger days ascending. Each
/// candidate at or after the reference instant is moved back to a working
/// day; the first one that still lies at or after the reference instant wins.
#[derive(Debug, Clone)]
pub struct NextSendDateCalculator<C> {
    schedule: SendSchedule,
    resolver: WorkingDayResolver<C>,
}

impl NextSendDateCalculator<&'static YearlyHolidayCalendar> {
    /// Default schedule on the built-in Russian production calendar.
    pub fn russia() -> Self {
        Self::new(
            SendSchedule::default(),
            WorkingDayResolver::new(russia::production_calendar()),
        )
    }
}

impl<C: HolidayCalendar> NextSendDateCalculator<C> {
    /// Creates a calculator.
    pub fn new(schedule: SendSchedule, resolver: WorkingDayResolver<C>) -> Self {
        Self { schedule, resolver }
    }

    /// Returns the schedule.
    pub fn schedule(&self) -> &SendSchedule {
        &self.schedule
    }

    /// Returns the working-day resolver.
    pub fn resolver(&self) -> &WorkingDayResolver<C> {
        &self.resolver
    }

    /// Returns the first send timestamp at or after `now`.
    ///
    /// # Errors
    ///
    /// - `KadryError::SendDateNotFound` if the lookahead window holds no slot,
    ///   including when the window runs past the last representable date.
    /// - `KadryError::WorkingDayNotFound` if the calendar has a non-working
    ///   stretch longer than the resolver's walk bound.
    pub fn next(&self, now: NaiveDateTime) -> KadryResult<NaiveDateTime> {
        let not_found = KadryError::SendDateNotFound {
            months: self.schedule.lookahead_months(),
        };
        if self.schedule.days().is_empty() {
            return Err(not_found);
        }

        let start = YearMonth::of(now.date());
        let time = self.schedule.time();

        for offset in 0..self.schedule.lookahead_months() {
            // Past the last representable date nothing more can be found.
            let Some(month) = start.plus_months(offset) else {
                break;
            };

            for &day in self.schedule.days() {
                let Some(date) = month.at_day_clamped(day) else {
                    return Err(not_found);
                };
                let candidate = date.and_time(time);
                if candidate < now {
                    continue;
                }

                let resolved = self.resolver.resolve(candidate.date())?.and_time(time);
                if resolved >= now {
                    tracing::debug!(%now, %candidate, %resolved, "found send date");
                    return Ok(resolved);
                }

                tracing::debug!(
                    %now,
                    %candidate,
                    %resolved,
                    "working day precedes reference instant, trying next slot"
                );
            }
        }

        Err(not_found)
    }

    /// Returns the next `count` distinct send timestamps starting at `now`.
    pub fn upcoming(&self, now: NaiveDateTime, count: usize) -> KadryResult<Vec<NaiveDateTime>> {
        let mut result = Vec::with_capacity(count);
        let mut from = now;

        while result.len() < count {
            let next = self.next(from)?;
            result.push(next);
            from = next + Duration::seconds(1);
        }

        Ok(result)
    }
}

/// Returns the next insurance send timestamp at or after `now`.
///
/// Sends happen on the 1st, 10th and 20th at 18:00, moved back to the
/// preceding working day of the built-in Russian calendar.
pub fn next_insurance_send_date(now: NaiveDateTime) -> KadryResult<NaiveDateTime> {
    NextSendDateCalculator::russia().next(now)
}
