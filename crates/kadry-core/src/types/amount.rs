//! Monetary amount in rubles and kopecks.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{KadryError, KadryResult};

/// Default inclusive ceiling for amounts that can be spelled out.
pub const DEFAULT_MAX_AMOUNT: Decimal = dec!(99999.99);

/// Largest ceiling the speller can express (one thousands group).
pub const MAX_SUPPORTED_AMOUNT: Decimal = dec!(999999.99);

/// Number of minor units (kopecks) per major unit (ruble).
const MINOR_PER_MAJOR: u32 = 100;

/// Inclusive upper bound for amounts accepted by the speller.
///
/// # Example
///
/// ```rust
/// use kadry_core::types::AmountBounds;
/// use rust_decimal_macros::dec;
///
/// let bounds = AmountBounds::default();
/// assert_eq!(bounds.max(), dec!(99999.99));
/// assert!(bounds.check(dec!(100000)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct AmountBounds {
    max: Decimal,
}

impl AmountBounds {
    /// Creates bounds with the given inclusive ceiling.
    ///
    /// # Errors
    ///
    /// Returns `KadryError::ConfigError` if the ceiling is negative or larger
    /// than [`MAX_SUPPORTED_AMOUNT`].
    pub fn new(max: Decimal) -> KadryResult<Self> {
        if max < Decimal::ZERO {
            return Err(KadryError::config_error(format!(
                "amount ceiling {max} must not be negative"
            )));
        }
        if max > MAX_SUPPORTED_AMOUNT {
            return Err(KadryError::config_error(format!(
                "amount ceiling {max} exceeds the largest spellable amount {MAX_SUPPORTED_AMOUNT}"
            )));
        }
        Ok(Self { max })
    }

    /// Returns the inclusive ceiling.
    #[must_use]
    pub fn max(&self) -> Decimal {
        self.max
    }

    /// Checks that an amount is defined, non-negative and within the ceiling.
    ///
    /// The ceiling is compared against the raw amount, before truncation.
    pub fn check(&self, amount: Decimal) -> KadryResult<()> {
        if amount < Decimal::ZERO {
            return Err(KadryError::invalid_amount(format!(
                "amount {amount} must not be negative"
            )));
        }
        if amount > self.max {
            return Err(KadryError::amount_too_large(amount, self.max));
        }
        Ok(())
    }
}

impl Default for AmountBounds {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX_AMOUNT,
        }
    }
}

impl TryFrom<Decimal> for AmountBounds {
    type Error = KadryError;

    fn try_from(max: Decimal) -> KadryResult<Self> {
        Self::new(max)
    }
}

impl From<AmountBounds> for Decimal {
    fn from(bounds: AmountBounds) -> Self {
        bounds.max
    }
}

/// A validated, non-negative amount truncated to whole kopecks.
///
/// # Example
///
/// ```rust
/// use kadry_core::types::{AmountBounds, MonetaryAmount};
/// use rust_decimal_macros::dec;
///
/// let amount = MonetaryAmount::new(dec!(10.999), &AmountBounds::default()).unwrap();
/// assert_eq!(amount.major(), 10);
/// assert_eq!(amount.minor(), 99);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonetaryAmount {
    /// Total value in kopecks.
    minor_units: u32,
}

impl MonetaryAmount {
    /// Validates and normalizes an amount.
    ///
    /// # Errors
    ///
    /// Returns `KadryError::InvalidAmount` for negative amounts and
    /// `KadryError::AmountTooLarge` for amounts above the ceiling.
    pub fn new(amount: Decimal, bounds: &AmountBounds) -> KadryResult<Self> {
        bounds.check(amount)?;

        let mut normalized = normalize(amount);
        normalized.rescale(2);

        let minor_units = u32::try_from(normalized.mantissa()).map_err(|_| {
            KadryError::invalid_amount(format!("amount {amount} is out of range"))
        })?;

        Ok(Self { minor_units })
    }

    /// Parses an amount from text and validates it.
    ///
    /// Both `.` and `,` are accepted as the decimal separator. Blank input
    /// is treated as a missing amount.
    pub fn parse(input: &str, bounds: &AmountBounds) -> KadryResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(KadryError::invalid_amount("amount is missing"));
        }

        let amount = Decimal::from_str(&trimmed.replace(',', ".")).map_err(|e| {
            KadryError::invalid_amount(format!("cannot parse '{trimmed}': {e}"))
        })?;

        Self::new(amount, bounds)
    }

    /// Returns the whole rubles.
    #[must_use]
    pub fn major(&self) -> u32 {
        self.minor_units / MINOR_PER_MAJOR
    }

    /// Returns the kopecks, always in `0..=99`.
    #[must_use]
    pub fn minor(&self) -> u32 {
        self.minor_units % MINOR_PER_MAJOR
    }

    /// Returns the total amount in kopecks.
    #[must_use]
    pub fn total_minor_units(&self) -> u32 {
        self.minor_units
    }

    /// Returns the amount as a two-decimal `Decimal`.
    #[must_use]
    pub fn value(&self) -> Decimal {
        Decimal::new(i64::from(self.minor_units), 2)
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.major(), self.minor())
    }
}

/// Truncates an amount to two decimal places, never rounding up.
///
/// Applying it to an already normalized amount is a no-op.
#[must_use]
pub fn normalize(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::ToZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_truncates() {
        assert_eq!(normalize(dec!(10.999)), dec!(10.99));
        assert_eq!(normalize(dec!(0.009)), dec!(0.00));
        assert_eq!(normalize(dec!(5)), dec!(5));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize(dec!(1234.5678));
        assert_eq!(normalize(once), once);
    }

    #[test]
    fn test_decomposition() {
        let bounds = AmountBounds::default();
        let amount = MonetaryAmount::new(dec!(1234.05), &bounds).unwrap();
        assert_eq!(amount.major(), 1234);
        assert_eq!(amount.minor(), 5);
        assert_eq!(amount.total_minor_units(), 123405);
        assert_eq!(amount.value(), dec!(1234.05));
        assert_eq!(amount.to_string(), "1234.05");
    }

    #[test]
    fn test_whole_amount_has_zero_minor() {
        let amount = MonetaryAmount::new(dec!(7), &AmountBounds::default()).unwrap();
        assert_eq!(amount.major(), 7);
        assert_eq!(amount.minor(), 0);
    }

    #[test]
    fn test_negative_rejected() {
        let err = MonetaryAmount::new(dec!(-0.01), &AmountBounds::default()).unwrap_err();
        assert!(matches!(err, KadryError::InvalidAmount { .. }));
    }

    #[test]
    fn test_ceiling_is_inclusive() {
        let bounds = AmountBounds::default();
        assert!(MonetaryAmount::new(dec!(99999.99), &bounds).is_ok());

        let err = MonetaryAmount::new(dec!(99999.999), &bounds).unwrap_err();
        assert_eq!(
            err,
            KadryError::AmountTooLarge {
                attempted: dec!(99999.999),
                max: dec!(99999.99),
            }
        );
    }

    #[test]
    fn test_parse_accepts_comma() {
        let amount = MonetaryAmount::parse(" 12,50 ", &AmountBounds::default()).unwrap();
        assert_eq!(amount.major(), 12);
        assert_eq!(amount.minor(), 50);
    }

    #[test]
    fn test_parse_missing_and_garbage() {
        let bounds = AmountBounds::default();
        assert!(matches!(
            MonetaryAmount::parse("   ", &bounds),
            Err(KadryError::InvalidAmount { .. })
        ));
        assert!(matches!(
            MonetaryAmount::parse("twelve", &bounds),
            Err(KadryError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_bounds_validation() {
        assert!(AmountBounds::new(dec!(-1)).is_err());
        assert!(AmountBounds::new(dec!(1000000)).is_err());
        assert_eq!(
            AmountBounds::new(dec!(500.00)).unwrap().max(),
            dec!(500.00)
        );
    }

    #[test]
    fn test_bounds_serde() {
        let bounds: AmountBounds = serde_json::from_str("\"1500.50\"").unwrap();
        assert_eq!(bounds.max(), dec!(1500.50));
        assert!(serde_json::from_str::<AmountBounds>("\"2000000\"").is_err());
    }
}
