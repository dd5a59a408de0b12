//! Error types for the Kadry library.
//!
//! This module defines the error types used throughout Kadry,
//! providing structured error handling with context.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for Kadry operations.
pub type KadryResult<T> = Result<T, KadryError>;

/// The main error type for Kadry operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KadryError {
    /// Amount is missing, unparseable or negative.
    #[error("Invalid amount: {reason}")]
    InvalidAmount {
        /// Description of what is wrong with the amount.
        reason: String,
    },

    /// Amount exceeds the configured ceiling.
    #[error("Amount {attempted} exceeds the maximum allowed {max}")]
    AmountTooLarge {
        /// The amount that was passed in.
        attempted: Decimal,
        /// The configured ceiling.
        max: Decimal,
    },

    /// No send slot was found within the lookahead window.
    #[error("No send date found within the next {months} months")]
    SendDateNotFound {
        /// Length of the searched window in months.
        months: u32,
    },

    /// The backward walk to a working day ran past its step bound.
    ///
    /// This means the calendar has more consecutive non-working days than the
    /// walk allows. It is a configuration bug and must not be retried.
    #[error("No working day found within {max_steps} days before {date}")]
    WorkingDayNotFound {
        /// Date the walk started from.
        date: NaiveDate,
        /// Maximum number of steps the walk was allowed to take.
        max_steps: u32,
    },

    /// Holiday calendar data could not be loaded or parsed.
    #[error("Calendar error: {reason}")]
    CalendarError {
        /// Description of the error.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    ConfigError {
        /// Description of the configuration error.
        reason: String,
    },
}

impl KadryError {
    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            reason: reason.into(),
        }
    }

    /// Creates an amount-too-large error.
    #[must_use]
    pub fn amount_too_large(attempted: Decimal, max: Decimal) -> Self {
        Self::AmountTooLarge { attempted, max }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar_error(reason: impl Into<String>) -> Self {
        Self::CalendarError {
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config_error(reason: impl Into<String>) -> Self {
        Self::ConfigError {
            reason: reason.into(),
        }
    }

    /// Returns true for errors raised while validating a monetary amount.
    #[must_use]
    pub fn is_amount_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount { .. } | Self::AmountTooLarge { .. }
        )
    }

    /// Returns true for internal invariant failures.
    ///
    /// These indicate a misconfigured calendar rather than bad input.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::WorkingDayNotFound { .. })
    }
}
