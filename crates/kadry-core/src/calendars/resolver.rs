//! Working-day classification and backward resolution.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{HolidayCalendar, WeekendDays};
use crate::error::{KadryError, KadryResult};

/// Default bound on the backward walk.
pub const DEFAULT_MAX_BACKWARD_STEPS: u32 = 10;

/// Weekend set and walk bound used to classify dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDayPolicy {
    /// Days of the week that are never working days.
    #[serde(default)]
    pub weekend: WeekendDays,

    /// Maximum number of days the resolver may step back.
    #[serde(default = "default_max_backward_steps")]
    pub max_backward_steps: u32,
}

fn default_max_backward_steps() -> u32 {
    DEFAULT_MAX_BACKWARD_STEPS
}

impl Default for WorkingDayPolicy {
    fn default() -> Self {
        Self {
            weekend: WeekendDays::default(),
            max_backward_steps: DEFAULT_MAX_BACKWARD_STEPS,
        }
    }
}

/// Resolves dates to the nearest working day on or before them.
///
/// Resolution never moves forward: the returned date is always less than or
/// equal to the input.
///
/// # Example
///
/// ```
/// use kadry_core::calendars::{russia, WorkingDayResolver};
/// use chrono::NaiveDate;
///
/// let resolver = WorkingDayResolver::new(russia::production_calendar());
///
/// // Victory Day 2025 is a Friday holiday, so Thursday is used.
/// let victory_day = NaiveDate::from_ymd_opt(2025, 5, 9).unwrap();
/// assert_eq!(
///     resolver.resolve(victory_day).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 5, 8).unwrap()
/// );
/// ```
#[derive(Debug, Clone)]
pub struct WorkingDayResolver<C> {
    calendar: C,
    policy: WorkingDayPolicy,
}

impl<C: HolidayCalendar> WorkingDayResolver<C> {
    /// Creates a resolver with Saturday/Sunday weekends and the default walk bound.
    pub fn new(calendar: C) -> Self {
        Self::with_policy(calendar, WorkingDayPolicy::default())
    }

    /// Creates a resolver with an explicit policy.
    pub fn with_policy(calendar: C, policy: WorkingDayPolicy) -> Self {
        Self { calendar, policy }
    }

    /// Sets the weekend days.
    pub fn weekend(mut self, weekend: WeekendDays) -> Self {
        self.policy.weekend = weekend;
        self
    }

    /// Sets the maximum number of backward steps.
    pub fn max_backward_steps(mut self, steps: u32) -> Self {
        self.policy.max_backward_steps = steps;
        self
    }

    /// Returns the holiday calendar.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Returns the classification policy.
    pub fn policy(&self) -> WorkingDayPolicy {
        self.policy
    }

    /// Returns true if the date is neither a weekend day nor a holiday.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.policy.weekend.is_weekend(date.weekday()) && !self.calendar.is_holiday(date)
    }

    /// Returns the nearest working day on or before `date`.
    ///
    /// A working day exactly `max_backward_steps` days back is still found.
    ///
    /// # Errors
    ///
    /// Returns `KadryError::WorkingDayNotFound` if no working day lies within
    /// `max_backward_steps` days before `date`. This signals a broken calendar
    /// and is not meant to be retried.
    pub fn resolve(&self, date: NaiveDate) -> KadryResult<NaiveDate> {
        if self.is_working_day(date) {
            return Ok(date);
        }

        let mut current = date;
        for step in 1..=self.policy.max_backward_steps {
            let Some(previous) = current.pred_opt() else {
                break;
            };
            current = previous;
            if self.is_working_day(current) {
                tracing::trace!(%date, resolved = %current, step, "rolled back to working day");
                return Ok(current);
            }
        }

        tracing::error!(
            %date,
            calendar = self.calendar.name(),
            max_steps = self.policy.max_backward_steps,
            "no working day within backward walk bound"
        );
        Err(KadryError::WorkingDayNotFound {
            date,
            max_steps: self.policy.max_backward_steps,
        })
    }
}
