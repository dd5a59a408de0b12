//! CLI configuration.
//!
//! Every key is optional; a missing file or section falls back to the
//! built-in defaults.
//!
//! ```toml
//! [amount]
//! max_amount = "99999.99"
//!
//! [schedule]
//! days = [1, 10, 20]
//! hour = 18
//! minute = 0
//! lookahead_months = 4
//!
//! [calendar]
//! weekend = ["Sat", "Sun"]    # or a preset name such as "SaturdaySunday"
//! max_backward_steps = 10
//! holidays_file = "holidays.json"
//! ```

use std::path::{Path, PathBuf};

use kadry_core::calendars::{WeekendDays, WorkingDayPolicy, DEFAULT_MAX_BACKWARD_STEPS};
use kadry_core::{AmountSpeller, SendSchedule};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Effective configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KadryConfig {
    /// Amount spelling settings
    #[serde(default)]
    pub amount: AmountSpeller,

    /// Send schedule
    #[serde(default)]
    pub schedule: SendSchedule,

    /// Working-day settings
    #[serde(default)]
    pub calendar: CalendarConfig,
}

/// Working-day settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Weekend days
    #[serde(default)]
    pub weekend: WeekendDays,

    /// Bound on the backward walk to a working day
    #[serde(default = "default_max_backward_steps")]
    pub max_backward_steps: u32,

    /// Holiday calendar file; the built-in calendar is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holidays_file: Option<PathBuf>,
}

fn default_max_backward_steps() -> u32 {
    DEFAULT_MAX_BACKWARD_STEPS
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            weekend: WeekendDays::default(),
            max_backward_steps: default_max_backward_steps(),
            holidays_file: None,
        }
    }
}

impl CalendarConfig {
    /// Returns the working-day policy described by this section.
    pub fn policy(&self) -> WorkingDayPolicy {
        WorkingDayPolicy {
            weekend: self.weekend,
            max_backward_steps: self.max_backward_steps,
        }
    }
}

impl KadryConfig {
    /// Load configuration from a TOML file.
    ///
    /// A relative `holidays_file` is resolved against the directory of the
    /// configuration file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        })?;

        if let (Some(file), Some(dir)) = (config.calendar.holidays_file.as_mut(), path.parent()) {
            if file.is_relative() {
                *file = dir.join(&*file);
            }
        }

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load the explicit file, or the per-user file when it exists.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Serialization(e.to_string()))
    }
}

/// Location of the per-user configuration file.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kadry").join("kadry.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let config = KadryConfig::from_file(file.path()).unwrap();

        assert_eq!(config.schedule, SendSchedule::default());
        assert_eq!(config.calendar, CalendarConfig::default());
        assert_eq!(config.amount, AmountSpeller::default());
    }

    #[test]
    fn test_full_file() {
        let file = write_config(
            r#"
[amount]
max_amount = "500000.00"

[schedule]
days = [25, 5]
hour = 9
lookahead_months = 2

[calendar]
weekend = "SundayOnly"
max_backward_steps = 14
holidays_file = "/etc/kadry/holidays.json"
"#,
        );
        let config = KadryConfig::from_file(file.path()).unwrap();

        assert_eq!(config.amount.bounds().max(), Decimal::new(50_000_000, 2));
        assert_eq!(config.schedule.days(), &[5, 25]);
        assert_eq!(config.schedule.lookahead_months(), 2);
        assert_eq!(config.calendar.policy().weekend, WeekendDays::SUNDAY_ONLY);
        assert_eq!(config.calendar.policy().max_backward_steps, 14);
        assert_eq!(
            config.calendar.holidays_file,
            Some(PathBuf::from("/etc/kadry/holidays.json"))
        );
    }

    #[test]
    fn test_relative_holidays_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kadry.toml");
        std::fs::write(&path, "[calendar]\nholidays_file = \"holidays.json\"\n").unwrap();

        let config = KadryConfig::from_file(&path).unwrap();
        assert_eq!(
            config.calendar.holidays_file,
            Some(dir.path().join("holidays.json"))
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_config("[schedule]\ndays = [0, 10]\n");
        assert!(matches!(
            KadryConfig::from_file(file.path()),
            Err(CliError::Config { .. })
        ));

        let file = write_config("[amount]\nmax_amount = \"1000000.00\"\n");
        assert!(KadryConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = KadryConfig::from_file(Path::new("/nonexistent/kadry.toml"));
        assert!(matches!(result, Err(CliError::Config { .. })));
    }

    #[test]
    fn test_toml_round_trip() {
        let toml = KadryConfig::default().to_toml().unwrap();
        assert!(toml.contains("[schedule]"));
        assert!(toml.contains("\"Sat\""));
        assert!(toml.contains("\"Sun\""));

        let parsed: KadryConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.schedule, SendSchedule::default());
        assert_eq!(parsed.calendar, CalendarConfig::default());
    }

    #[test]
    fn test_weekend_as_day_list() {
        let file = write_config("[calendar]\nweekend = [\"Fri\"]\n");
        let config = KadryConfig::from_file(file.path()).unwrap();
        let weekend = config.calendar.policy().weekend;

        assert!(weekend.is_weekend(chrono::Weekday::Fri));
        assert!(!weekend.is_weekend(chrono::Weekday::Sat));
        assert!(!weekend.is_weekend(chrono::Weekday::Sun));

        let file = write_config("[calendar]\nweekend = [\"Fri\", \"Funday\"]\n");
        assert!(KadryConfig::from_file(file.path()).is_err());
    }
}
