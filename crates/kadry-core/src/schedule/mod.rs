//! Recurring send schedule for the insurance list.
//!
//! The list is sent on fixed days of each month at a fixed time. When the
//! day is not a working day the send moves to the preceding working day.
//!
//! # Example
//!
//! ```rust
//! use kadry_core::schedule::next_insurance_send_date;
//! use chrono::NaiveDate;
//!
//! let now = NaiveDate::from_ymd_opt(2025, 1, 25).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! // February 1 2025 is a Saturday, so the send happens on Friday January 31.
//! let next = next_insurance_send_date(now).unwrap();
//! assert_eq!(next.to_string(), "2025-01-31 18:00:00");
//! ```

mod calculator;

pub use calculator::{next_insurance_send_date, NextSendDateCalculator};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{KadryError, KadryResult};

/// Default trigger days of the month.
pub const DEFAULT_SEND_DAYS: [u32; 3] = [1, 10, 20];

/// Default trigger hour.
pub const DEFAULT_SEND_HOUR: u32 = 18;

/// Default trigger minute.
pub const DEFAULT_SEND_MINUTE: u32 = 0;

/// Default lookahead window in months.
pub const DEFAULT_LOOKAHEAD_MONTHS: u32 = 4;

/// Largest accepted lookahead window in months.
pub const MAX_LOOKAHEAD_MONTHS: u32 = 1200;

/// Trigger days, trigger time and search window.
///
/// Trigger days are kept sorted and de-duplicated. Days past the end of a
/// month are clamped to its last day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScheduleData", into = "ScheduleData")]
pub struct SendSchedule {
    days: Vec<u32>,
    time: NaiveTime,
    lookahead_months: u32,
}

impl SendSchedule {
    /// Creates a schedule.
    ///
    /// # Errors
    ///
    /// Returns `KadryError::ConfigError` for a trigger day of 0, an invalid
    /// time of day, or a lookahead above [`MAX_LOOKAHEAD_MONTHS`].
    pub fn new(
        days: impl IntoIterator<Item = u32>,
        hour: u32,
        minute: u32,
        lookahead_months: u32,
    ) -> KadryResult<Self> {
        let mut days: Vec<u32> = days.into_iter().collect();
        if days.contains(&0) {
            return Err(KadryError::config_error("trigger day must be at least 1"));
        }
        days.sort_unstable();
        days.dedup();

        if lookahead_months > MAX_LOOKAHEAD_MONTHS {
            return Err(KadryError::config_error(format!(
                "lookahead of {lookahead_months} months exceeds the maximum of {MAX_LOOKAHEAD_MONTHS}"
            )));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            KadryError::config_error(format!("invalid send time {hour:02}:{minute:02}"))
        })?;

        Ok(Self {
            days,
            time,
            lookahead_months,
        })
    }

    /// Trigger days of the month, ascending.
    #[must_use]
    pub fn days(&self) -> &[u32] {
        &self.days
    }

    /// Time of day at which the send fires.
    #[must_use]
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Number of months searched, starting with the current one.
    #[must_use]
    pub fn lookahead_months(&self) -> u32 {
        self.lookahead_months
    }
}

impl Default for SendSchedule {
    fn default() -> Self {
        Self {
            days: DEFAULT_SEND_DAYS.to_vec(),
            time: NaiveTime::from_hms_opt(DEFAULT_SEND_HOUR, DEFAULT_SEND_MINUTE, 0)
                .unwrap_or_default(),
            lookahead_months: DEFAULT_LOOKAHEAD_MONTHS,
        }
    }
}

/// Serialized form of [`SendSchedule`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScheduleData {
    #[serde(default = "default_days")]
    days: Vec<u32>,
    #[serde(default = "default_hour")]
    hour: u32,
    #[serde(default = "default_minute")]
    minute: u32,
    #[serde(default = "default_lookahead_months")]
    lookahead_months: u32,
}

fn default_days() -> Vec<u32> {
    DEFAULT_SEND_DAYS.to_vec()
}

fn default_hour() -> u32 {
    DEFAULT_SEND_HOUR
}

fn default_minute() -> u32 {
    DEFAULT_SEND_MINUTE
}

fn default_lookahead_months() -> u32 {
    DEFAULT_LOOKAHEAD_MONTHS
}

impl TryFrom<ScheduleData> for SendSchedule {
    type Error = KadryError;

    fn try_from(data: ScheduleData) -> KadryResult<Self> {
        Self::new(data.days, data.hour, data.minute, data.lookahead_months)
    }
}

impl From<SendSchedule> for ScheduleData {
    fn from(schedule: SendSchedule) -> Self {
        use chrono::Timelike;

        Self {
            hour: schedule.time.hour(),
            minute: schedule.time.minute(),
            days: schedule.days,
            lookahead_months: schedule.lookahead_months,
        }
    }
}
