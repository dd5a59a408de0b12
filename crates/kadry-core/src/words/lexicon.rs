//! Numeral word tables and three-digit group rendering.

use serde::{Deserialize, Serialize};

/// Grammatical gender of the noun a numeral agrees with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// "один рубль", "два рубля"
    Masculine,
    /// "одна тысяча", "две тысячи"
    Feminine,
}

/// Word tables for numerals agreeing with one gender.
#[derive(Debug, Clone, Copy)]
pub struct NumeralLexicon {
    /// Words for 0-19; index 0 is empty.
    units: [&'static str; 20],
}

const UNITS_MASCULINE: [&str; 20] = [
    "",
    "один",
    "два",
    "три",
    "четыре",
    "пять",
    "шесть",
    "семь",
    "восемь",
    "девять",
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];

const UNITS_FEMININE: [&str; 20] = [
    "",
    "одна",
    "две",
    "три",
    "четыре",
    "пять",
    "шесть",
    "семь",
    "восемь",
    "девять",
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];

const TENS: [&str; 10] = [
    "",
    "",
    "двадцать",
    "тридцать",
    "сорок",
    "пятьдесят",
    "шестьдесят",
    "семьдесят",
    "восемьдесят",
    "девяносто",
];

const HUNDREDS: [&str; 10] = [
    "",
    "сто",
    "двести",
    "триста",
    "четыреста",
    "пятьсот",
    "шестьсот",
    "семьсот",
    "восемьсот",
    "девятьсот",
];

/// Word for zero.
pub const ZERO: &str = "ноль";

/// Masculine numerals.
pub static MASCULINE: NumeralLexicon = NumeralLexicon {
    units: UNITS_MASCULINE,
};

/// Feminine numerals.
pub static FEMININE: NumeralLexicon = NumeralLexicon {
    units: UNITS_FEMININE,
};

impl NumeralLexicon {
    /// Returns the lexicon for a gender.
    #[must_use]
    pub fn for_gender(gender: Gender) -> &'static NumeralLexicon {
        match gender {
            Gender::Masculine => &MASCULINE,
            Gender::Feminine => &FEMININE,
        }
    }

    /// Appends the words for a three-digit group to `out`.
    ///
    /// Values above 999 only use their last three digits. Zero appends nothing.
    pub fn push_group(&self, number: u32, out: &mut Vec<&str>) {
        let hundreds = (number / 100 % 10) as usize;
        let tens_and_units = (number % 100) as usize;

        if hundreds > 0 {
            out.push(HUNDREDS[hundreds]);
        }

        if tens_and_units < 20 {
            if tens_and_units > 0 {
                out.push(self.units[tens_and_units]);
            }
        } else {
            out.push(TENS[tens_and_units / 10]);
            let units = tens_and_units % 10;
            if units > 0 {
                out.push(self.units[units]);
            }
        }
    }

    /// Renders a three-digit group as words, empty for zero.
    #[must_use]
    pub fn group(&self, number: u32) -> String {
        let mut words = Vec::with_capacity(3);
        self.push_group(number, &mut words);
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(MASCULINE.group(0), "");
        assert_eq!(FEMININE.group(0), "");
    }

    #[test]
    fn test_direct_lookup_below_twenty() {
        assert_eq!(MASCULINE.group(1), "один");
        assert_eq!(FEMININE.group(2), "две");
        assert_eq!(MASCULINE.group(19), "девятнадцать");
    }

    #[test]
    fn test_tens_and_units() {
        assert_eq!(MASCULINE.group(20), "двадцать");
        assert_eq!(MASCULINE.group(21), "двадцать один");
        assert_eq!(FEMININE.group(21), "двадцать одна");
        assert_eq!(MASCULINE.group(99), "девяносто девять");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(MASCULINE.group(100), "сто");
        assert_eq!(MASCULINE.group(212), "двести двенадцать");
        assert_eq!(FEMININE.group(342), "триста сорок две");
        assert_eq!(MASCULINE.group(909), "девятьсот девять");
        assert_eq!(MASCULINE.group(999), "девятьсот девяносто девять");
    }

    #[test]
    fn test_for_gender() {
        assert_eq!(NumeralLexicon::for_gender(Gender::Feminine).group(1), "одна");
        assert_eq!(NumeralLexicon::for_gender(Gender::Masculine).group(1), "один");
    }
}
