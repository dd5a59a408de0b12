//! Russian plural form selection.

use serde::{Deserialize, Serialize};

/// Grammatical number form of a noun following a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PluralForm {
    /// 1, 21, 31, ... ("рубль")
    One,
    /// 2-4, 22-24, ... ("рубля")
    Few,
    /// 0, 5-20, 25-30, ... ("рублей")
    Many,
}

impl PluralForm {
    /// Selects the form for a count from its last one or two digits.
    ///
    /// ```rust
    /// use kadry_core::words::PluralForm;
    ///
    /// assert_eq!(PluralForm::for_count(1), PluralForm::One);
    /// assert_eq!(PluralForm::for_count(3), PluralForm::Few);
    /// assert_eq!(PluralForm::for_count(11), PluralForm::Many);
    /// assert_eq!(PluralForm::for_count(101), PluralForm::One);
    /// ```
    #[must_use]
    pub fn for_count(count: u32) -> Self {
        let last_two = count % 100;
        let last = count % 10;

        if (11..=19).contains(&last_two) {
            return PluralForm::Many;
        }
        match last {
            1 => PluralForm::One,
            2..=4 => PluralForm::Few,
            _ => PluralForm::Many,
        }
    }
}

/// The three number forms of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NounForms {
    /// Form used after 1.
    pub one: &'static str,
    /// Form used after 2-4.
    pub few: &'static str,
    /// Form used after 0 and 5-20.
    pub many: &'static str,
}

impl NounForms {
    /// Creates a noun from its three forms.
    #[must_use]
    pub const fn new(one: &'static str, few: &'static str, many: &'static str) -> Self {
        Self { one, few, many }
    }

    /// Returns the form matching `count`.
    #[must_use]
    pub fn for_count(&self, count: u32) -> &'static str {
        self.form(PluralForm::for_count(count))
    }

    /// Returns the requested form.
    #[must_use]
    pub fn form(&self, form: PluralForm) -> &'static str {
        match form {
            PluralForm::One => self.one,
            PluralForm::Few => self.few,
            PluralForm::Many => self.many,
        }
    }
}

/// Major currency unit.
pub const RUBLE: NounForms = NounForms::new("рубль", "рубля", "рублей");

/// Minor currency unit.
pub const KOPECK: NounForms = NounForms::new("копейка", "копейки", "копеек");

/// Thousands multiplier.
pub const THOUSAND: NounForms = NounForms::new("тысяча", "тысячи", "тысяч");
