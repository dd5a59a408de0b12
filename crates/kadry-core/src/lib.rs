//! # Kadry Core
//!
//! Pure business logic behind payroll paperwork.
//!
//! This crate provides two independent utilities:
//!
//! - **Amount spelling**: writes a ruble amount out in Russian words with
//!   correct gender and plural agreement ([`words`])
//! - **Send-date scheduling**: finds the next send slot for the insurance
//!   list, moved back to the preceding working day ([`schedule`])
//!
//! Holiday data is injected through the [`calendars::HolidayCalendar`] trait.
//!
//! ## Example
//!
//! ```rust
//! use kadry_core::prelude::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(amount_to_words(dec!(1.00)).unwrap(), "один рубль 00 копеек");
//!
//! let now = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let next = next_insurance_send_date(now).unwrap();
//! assert_eq!(next, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap().and_hms_opt(18, 0, 0).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod calendars;
pub mod error;
pub mod schedule;
pub mod types;
pub mod words;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        HolidayCalendar, NoHolidays, WeekendDays, WorkingDayPolicy, WorkingDayResolver,
        YearlyHolidayCalendar,
    };
    pub use crate::error::{KadryError, KadryResult};
    pub use crate::schedule::{next_insurance_send_date, NextSendDateCalculator, SendSchedule};
    pub use crate::types::{AmountBounds, MonetaryAmount};
    pub use crate::words::{amount_to_words, AmountSpeller};
}

// Re-export commonly used types at crate root
pub use error::{KadryError, KadryResult};
pub use schedule::{next_insurance_send_date, NextSendDateCalculator, SendSchedule};
pub use words::{amount_to_words, AmountSpeller};
