//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! policy and holiday configuration from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::info;

use crate::calculation::{PayrollOptions, TimeWindow, parse_clock_time};
use crate::error::{EngineError, EngineResult};
use crate::holidays::{
    DEFAULT_REGIONAL_NAME, HolidayCalendar, national_holidays, parse_holiday_date,
    parse_regional_holidays,
};
use crate::models::HolidayEntry;

use super::types::{HolidaysConfig, PolicyConfig, PolicyMetadata};

/// Loads and provides access to the payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/ponto/
/// ├── policy.yaml    # Working-day limits, night window, rates
/// └── holidays.yaml  # Regional holidays
/// ```
///
/// # Example
///
/// ```no_run
/// use ponto_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ponto").unwrap();
/// let options = loader.payroll_options(2025);
/// println!("Standard day: {} minutes", options.standard_daily_minutes);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PolicyConfig,
    night_window: TimeWindow,
    include_national: bool,
    regional: Vec<HolidayEntry>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if a file is missing, and
    /// [`EngineError::ConfigParseError`] if a file is not valid YAML or
    /// holds an unusable value (a bad night-window time, a bad holiday
    /// date, a non-positive rate divisor).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<PolicyConfig>(&policy_path)?;
        let night_window = Self::night_window(&policy, &policy_path)?;
        Self::check_rates(&policy, &policy_path)?;

        let holidays_path = path.join("holidays.yaml");
        let holidays = Self::load_yaml::<HolidaysConfig>(&holidays_path)?;
        let regional = Self::parse_regional(&holidays, &holidays_path)?;

        info!(
            policy = %policy.policy.code,
            version = %policy.policy.version,
            regional_holidays = regional.len(),
            "Loaded payroll configuration"
        );

        Ok(Self {
            policy,
            night_window,
            include_national: holidays.include_national,
            regional,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn night_window(policy: &PolicyConfig, path: &Path) -> EngineResult<TimeWindow> {
        let parse = |value: &str| {
            parse_clock_time(value).ok_or_else(|| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: format!("invalid night window time '{}'", value),
            })
        };
        Ok(TimeWindow {
            start: parse(&policy.night_window.start)?,
            end_inclusive: parse(&policy.night_window.end)?,
        })
    }

    fn check_rates(policy: &PolicyConfig, path: &Path) -> EngineResult<()> {
        let rates = &policy.rates;
        if rates.monthly_hours_divisor <= Decimal::ZERO || rates.night_hour_factor <= Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: "monthly_hours_divisor and night_hour_factor must be positive".to_string(),
            });
        }
        Ok(())
    }

    fn parse_regional(config: &HolidaysConfig, path: &Path) -> EngineResult<Vec<HolidayEntry>> {
        let mut entries = Vec::with_capacity(config.regional.len());
        for holiday in &config.regional {
            let date = parse_holiday_date(&holiday.date).ok_or_else(|| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: format!("invalid holiday date '{}'", holiday.date),
            })?;
            let name = holiday
                .name
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .unwrap_or(DEFAULT_REGIONAL_NAME);
            entries.push(HolidayEntry::regional(date, name));
        }
        if let Some(text) = &config.regional_text {
            entries.extend(parse_regional_holidays(text));
        }
        Ok(entries)
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        &self.policy.policy
    }

    /// Returns the configured regional holidays.
    pub fn regional_holidays(&self) -> &[HolidayEntry] {
        &self.regional
    }

    /// Builds the holiday calendar for a year, adding `extra` regional
    /// entries on top of the configured ones.
    pub fn calendar(&self, year: i32, extra: impl IntoIterator<Item = HolidayEntry>) -> HolidayCalendar {
        let mut calendar = HolidayCalendar::default();
        if self.include_national {
            calendar.extend(national_holidays(year));
        }
        calendar.extend(self.regional.iter().cloned());
        calendar.extend(extra);
        calendar
    }

    /// Payroll options for a year, with the year's holiday calendar.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ponto_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/ponto")?;
    /// let options = loader.payroll_options(2025);
    /// assert!(options.holidays.len() > 0);
    /// # Ok::<(), ponto_engine::error::EngineError>(())
    /// ```
    pub fn payroll_options(&self, year: i32) -> PayrollOptions {
        PayrollOptions {
            standard_daily_minutes: self.policy.hours.standard_daily_minutes,
            night_window: self.night_window,
            overtime50_cap: self.policy.hours.overtime50_cap,
            holidays: self.calendar(year, Vec::new()),
            incomplete_pair: self.policy.incomplete_pair,
            night_allocation: self.policy.night_allocation,
            ignore_times_when_not_ok: self.policy.ignore_times_when_not_ok,
            rates: self.policy.rates.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{DEFAULT_NIGHT_WINDOW, IncompletePairPolicy, NightAllocation, RateMultipliers};
    use crate::models::HolidayDate;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/ponto"
    }

    fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn temp_config(name: &str, policy: &str, holidays: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ponto-config-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("policy.yaml"), policy).unwrap();
        fs::write(dir.join("holidays.yaml"), holidays).unwrap();
        dir
    }

    const MINIMAL_POLICY: &str = "
policy:
  code: test
  name: Test
  version: '1'
night_window:
  start: '22:00'
  end: '04:59'
";

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy().code, "clt_padrao");
    }

    #[test]
    fn test_shipped_policy_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let options = loader.payroll_options(2025);
        let defaults = PayrollOptions::default();

        assert_eq!(options.standard_daily_minutes, defaults.standard_daily_minutes);
        assert_eq!(options.overtime50_cap, defaults.overtime50_cap);
        assert_eq!(options.night_window, DEFAULT_NIGHT_WINDOW);
        assert_eq!(options.rates, RateMultipliers::default());
        assert_eq!(options.incomplete_pair, IncompletePairPolicy::DropSegment);
        assert_eq!(options.night_allocation, NightAllocation::Chronological);
    }

    #[test]
    fn test_payroll_options_include_holidays() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let options = loader.payroll_options(2025);
        assert!(options.holidays.is_holiday(make_date(2025, 12, 25)));
        assert!(options.holidays.is_holiday(make_date(2025, 3, 4)));
    }

    #[test]
    fn test_missing_directory_returns_not_found() {
        match ConfigLoader::load("./config/does-not-exist") {
            Err(EngineError::ConfigNotFound { path }) => assert!(path.ends_with("policy.yaml")),
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_minimal_policy_uses_defaults() {
        let dir = temp_config("minimal", MINIMAL_POLICY, "regional: []\n");
        let loader = ConfigLoader::load(&dir).unwrap();
        let options = loader.payroll_options(2025);
        assert_eq!(options.standard_daily_minutes, 440);
        assert_eq!(options.rates, RateMultipliers::default());
        assert!(!options.ignore_times_when_not_ok);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = temp_config("bad-yaml", "policy: [unclosed", "regional: []\n");
        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_invalid_night_window_returns_parse_error() {
        let policy = MINIMAL_POLICY.replace("'04:59'", "'29:00'");
        let dir = temp_config("bad-window", &policy, "regional: []\n");
        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { message, .. }) => assert!(message.contains("29:00")),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_zero_divisor_returns_parse_error() {
        let policy = format!("{}rates:\n  monthly_hours_divisor: '0'\n", MINIMAL_POLICY);
        let dir = temp_config("zero-divisor", &policy, "regional: []\n");
        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::ConfigParseError { .. })
        ));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_regional_holidays_structured_and_text() {
        let holidays = "
include_national: false
regional:
  - date: '20/01'
    name: São Sebastião
  - date: '2025-07-09'
regional_text: |
  15/08 - Assunção
";
        let dir = temp_config("regional", MINIMAL_POLICY, holidays);
        let loader = ConfigLoader::load(&dir).unwrap();

        let regional = loader.regional_holidays();
        assert_eq!(regional.len(), 3);
        assert_eq!(regional[0].date, HolidayDate::Recurring { day: 20, month: 1 });
        assert_eq!(regional[1].name, DEFAULT_REGIONAL_NAME);
        assert_eq!(regional[2].name, "Assunção");

        let calendar = loader.calendar(2025, Vec::new());
        assert_eq!(calendar.len(), 3);
        assert!(!calendar.is_holiday(make_date(2025, 12, 25)));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_bad_holiday_date_returns_parse_error() {
        let dir = temp_config("bad-holiday", MINIMAL_POLICY, "regional:\n  - date: '31/02'\n");
        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::ConfigParseError { .. })
        ));
        fs::remove_dir_all(dir).ok();
    }
}
