//! Domain value types.
//!
//! - [`MonetaryAmount`]: validated ruble amount truncated to whole kopecks
//! - [`AmountBounds`]: inclusive ceiling for spellable amounts
//! - [`YearMonth`]: calendar month arithmetic for schedule enumeration

mod amount;
mod month;

pub use amount::{normalize, AmountBounds, MonetaryAmount, DEFAULT_MAX_AMOUNT, MAX_SUPPORTED_AMOUNT};
pub use month::{days_in_month, YearMonth};
