//! Weekend definitions.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KadryError;

const MON: u8 = 1;
const THU: u8 = 1 << 3;
const FRI: u8 = 1 << 4;
const SAT: u8 = 1 << 5;
const SUN: u8 = 1 << 6;

const ALL_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Named weekend sets accepted in configuration files.
const PRESETS: [(&str, &str, WeekendDays); 5] = [
    ("SaturdaySunday", "saturday_sunday", WeekendDays::SATURDAY_SUNDAY),
    ("FridaySaturday", "friday_saturday", WeekendDays::FRIDAY_SATURDAY),
    ("ThursdayFriday", "thursday_friday", WeekendDays::THURSDAY_FRIDAY),
    ("SundayOnly", "sunday_only", WeekendDays::SUNDAY_ONLY),
    ("None", "none", WeekendDays::NONE),
];

/// Set of weekdays that are never working days.
///
/// Any combination of weekdays is allowed. In configuration the set is
/// written as a list of weekday names (`["Fri", "Sat"]`) or as one of the
/// preset names (`"SaturdaySunday"`).
///
/// # Example
///
/// ```
/// use kadry_core::calendars::WeekendDays;
/// use chrono::Weekday;
///
/// let weekend = WeekendDays::new([Weekday::Fri]);
/// assert!(weekend.is_weekend(Weekday::Fri));
/// assert!(!weekend.is_weekend(Weekday::Sat));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WeekendRepr", into = "WeekendRepr")]
pub struct WeekendDays {
    /// Bit `n` set means the weekday `n` days after Monday is a weekend day.
    mask: u8,
}

impl WeekendDays {
    /// Saturday and Sunday
    pub const SATURDAY_SUNDAY: Self = Self { mask: SAT | SUN };
    /// Friday and Saturday
    pub const FRIDAY_SATURDAY: Self = Self { mask: FRI | SAT };
    /// Thursday and Friday
    pub const THURSDAY_FRIDAY: Self = Self { mask: THU | FRI };
    /// Sunday only (six-day working week)
    pub const SUNDAY_ONLY: Self = Self { mask: SUN };
    /// No weekends
    pub const NONE: Self = Self { mask: 0 };

    /// Creates a weekend from its days.
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mask = days.into_iter().fold(0, |mask, day| mask | bit(day));
        Self { mask }
    }

    /// Looks up a preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        PRESETS
            .iter()
            .find(|(pascal, snake, _)| *pascal == name || *snake == name)
            .map(|&(_, _, weekend)| weekend)
    }

    /// Check if a weekday is a weekend day.
    #[inline]
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        self.mask & bit(weekday) != 0
    }

    /// Returns the weekend days, Monday first.
    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        ALL_DAYS.into_iter().filter(move |&day| self.is_weekend(day))
    }

    /// Returns the number of weekend days.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Returns true if every day of the week is a working day.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Returns the preset name if this set matches one.
    pub fn preset_name(&self) -> Option<&'static str> {
        PRESETS
            .iter()
            .find(|(_, _, weekend)| weekend == self)
            .map(|&(pascal, _, _)| pascal)
    }
}

fn bit(day: Weekday) -> u8 {
    MON << day.num_days_from_monday()
}

impl Default for WeekendDays {
    fn default() -> Self {
        Self::SATURDAY_SUNDAY
    }
}

impl FromIterator<Weekday> for WeekendDays {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for WeekendDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.preset_name() {
            return f.write_str(name);
        }
        let days: Vec<String> = self.days().map(|d| d.to_string()).collect();
        f.write_str(&days.join("+"))
    }
}

/// Serialized form of [`WeekendDays`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum WeekendRepr {
    Preset(String),
    Days(Vec<String>),
}

impl TryFrom<WeekendRepr> for WeekendDays {
    type Error = KadryError;

    fn try_from(repr: WeekendRepr) -> Result<Self, Self::Error> {
        match repr {
            WeekendRepr::Preset(name) => Self::preset(&name)
                .ok_or_else(|| KadryError::config_error(format!("Unknown weekend type: {}", name))),
            WeekendRepr::Days(names) => names
                .iter()
                .map(|name| {
                    Weekday::from_str(name).map_err(|_| {
                        KadryError::config_error(format!("Unknown weekday: {}", name))
                    })
                })
                .collect(),
        }
    }
}

impl From<WeekendDays> for WeekendRepr {
    fn from(weekend: WeekendDays) -> Self {
        WeekendRepr::Days(weekend.days().map(|d| d.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturday_sunday() {
        let weekend = WeekendDays::SATURDAY_SUNDAY;
        assert!(weekend.is_weekend(Weekday::Sat));
        assert!(weekend.is_weekend(Weekday::Sun));
        assert!(!weekend.is_weekend(Weekday::Mon));
        assert!(!weekend.is_weekend(Weekday::Fri));
        assert_eq!(weekend, WeekendDays::default());
    }

    #[test]
    fn test_presets() {
        assert!(WeekendDays::FRIDAY_SATURDAY.is_weekend(Weekday::Fri));
        assert!(!WeekendDays::FRIDAY_SATURDAY.is_weekend(Weekday::Sun));
        assert!(WeekendDays::THURSDAY_FRIDAY.is_weekend(Weekday::Thu));
        assert!(!WeekendDays::THURSDAY_FRIDAY.is_weekend(Weekday::Sat));
        assert!(WeekendDays::SUNDAY_ONLY.is_weekend(Weekday::Sun));
        assert!(!WeekendDays::SUNDAY_ONLY.is_weekend(Weekday::Sat));
        assert!(WeekendDays::NONE.is_empty());
    }

    #[test]
    fn test_arbitrary_set() {
        let weekend = WeekendDays::new([Weekday::Wed, Weekday::Sun]);
        assert_eq!(weekend.len(), 2);
        assert!(weekend.is_weekend(Weekday::Wed));
        assert!(!weekend.is_weekend(Weekday::Sat));
        assert_eq!(weekend.days().collect::<Vec<_>>(), vec![Weekday::Wed, Weekday::Sun]);
        assert_eq!(weekend.preset_name(), None);
        assert_eq!(weekend.to_string(), "Wed+Sun");

        let same: WeekendDays = [Weekday::Sat, Weekday::Sun].into_iter().collect();
        assert_eq!(same.to_string(), "SaturdaySunday");
    }

    #[test]
    fn test_deserialize_day_list() {
        let weekend: WeekendDays = serde_json::from_str(r#"["Fri"]"#).unwrap();
        assert_eq!(weekend, WeekendDays::new([Weekday::Fri]));
        assert!(!weekend.is_weekend(Weekday::Sat));

        let weekend: WeekendDays = serde_json::from_str(r#"["thursday", "Fri"]"#).unwrap();
        assert_eq!(weekend, WeekendDays::THURSDAY_FRIDAY);

        let weekend: WeekendDays = serde_json::from_str("[]").unwrap();
        assert_eq!(weekend, WeekendDays::NONE);

        assert!(serde_json::from_str::<WeekendDays>(r#"["Funday"]"#).is_err());
    }

    #[test]
    fn test_deserialize_preset_name() {
        let weekend: WeekendDays = serde_json::from_str(r#""SaturdaySunday""#).unwrap();
        assert_eq!(weekend, WeekendDays::SATURDAY_SUNDAY);

        let weekend: WeekendDays = serde_json::from_str(r#""sunday_only""#).unwrap();
        assert_eq!(weekend, WeekendDays::SUNDAY_ONLY);

        assert!(serde_json::from_str::<WeekendDays>(r#""Monday""#).is_err());
    }

    #[test]
    fn test_serializes_as_day_list() {
        assert_eq!(
            serde_json::to_string(&WeekendDays::FRIDAY_SATURDAY).unwrap(),
            r#"["Fri","Sat"]"#
        );
        let weekend = WeekendDays::new([Weekday::Tue]);
        let json = serde_json::to_string(&weekend).unwrap();
        assert_eq!(serde_json::from_str::<WeekendDays>(&json).unwrap(), weekend);
    }
}
