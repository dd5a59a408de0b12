//! Spelling out ruble amounts in Russian.
//!
//! The phrase follows the layout used on payroll documents: whole rubles in
//! words, kopecks as two digits.
//!
//! # Example
//!
//! ```rust
//! use kadry_core::words::amount_to_words;
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(
//!     amount_to_words(dec!(2521.05)).unwrap(),
//!     "две тысячи пятьсот двадцать один рубль 05 копеек"
//! );
//! ```

mod lexicon;
mod plural;

pub use lexicon::{Gender, NumeralLexicon, FEMININE, MASCULINE, ZERO};
pub use plural::{NounForms, PluralForm, KOPECK, RUBLE, THOUSAND};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::KadryResult;
use crate::types::{AmountBounds, MonetaryAmount};

/// Converts amounts to their written form.
///
/// The speller itself only carries the amount ceiling; the word tables are
/// shared static data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountSpeller {
    /// Inclusive ceiling for accepted amounts.
    #[serde(default, rename = "max_amount")]
    bounds: AmountBounds,
}

impl AmountSpeller {
    /// Creates a speller with the default ceiling of 99 999.99.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a speller with a custom ceiling.
    #[must_use]
    pub fn with_bounds(bounds: AmountBounds) -> Self {
        Self { bounds }
    }

    /// Returns the configured ceiling.
    #[must_use]
    pub fn bounds(&self) -> AmountBounds {
        self.bounds
    }

    /// Converts an amount to words.
    ///
    /// # Errors
    ///
    /// Returns `KadryError::InvalidAmount` for negative amounts and
    /// `KadryError::AmountTooLarge` for amounts above the ceiling.
    pub fn convert(&self, amount: Decimal) -> KadryResult<String> {
        let amount = MonetaryAmount::new(amount, &self.bounds)?;
        Ok(spell(amount))
    }

    /// Parses and converts a textual amount.
    ///
    /// Blank input is reported as a missing amount.
    pub fn convert_str(&self, input: &str) -> KadryResult<String> {
        let amount = MonetaryAmount::parse(input, &self.bounds)?;
        Ok(spell(amount))
    }
}

/// Converts an amount to words using the default ceiling.
pub fn amount_to_words(amount: Decimal) -> KadryResult<String> {
    AmountSpeller::default().convert(amount)
}

/// Spells out an already validated amount.
#[must_use]
pub fn spell(amount: MonetaryAmount) -> String {
    let rubles = amount.major();
    let kopecks = amount.minor();
    let thousands = rubles / 1000;
    let remainder = rubles % 1000;
    let kopecks_digits = format!("{kopecks:02}");

    tracing::trace!(rubles, kopecks, thousands, remainder, "spelling amount");

    let mut words: Vec<&str> = Vec::with_capacity(10);

    if thousands > 0 {
        FEMININE.push_group(thousands, &mut words);
        words.push(THOUSAND.for_count(thousands));
    }

    let before_remainder = words.len();
    MASCULINE.push_group(remainder, &mut words);
    if words.len() == before_remainder && rubles == 0 {
        words.push(ZERO);
    }

    words.push(RUBLE.for_count(rubles));

    words.push(&kopecks_digits);
    words.push(KOPECK.for_count(kopecks));

    words.join(" ")
}
