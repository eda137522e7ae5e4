//! Configuration types for the payroll policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::calculation::{
    DEFAULT_OVERTIME50_CAP, DEFAULT_STANDARD_DAILY_MINUTES, IncompletePairPolicy, NightAllocation,
    RateMultipliers,
};

/// Metadata about the policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// Short identifier (e.g., "clt_padrao").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Version or effective date of the policy.
    pub version: String,
}

/// Working-day limits.
#[derive(Debug, Clone, Deserialize)]
pub struct HoursConfig {
    /// Minutes in a standard working day.
    #[serde(default = "default_standard_daily_minutes")]
    pub standard_daily_minutes: u32,
    /// Daily overtime minutes paid at 50% before the 100% tier.
    #[serde(default = "default_overtime50_cap")]
    pub overtime50_cap: u32,
}

fn default_standard_daily_minutes() -> u32 {
    DEFAULT_STANDARD_DAILY_MINUTES
}

fn default_overtime50_cap() -> u32 {
    DEFAULT_OVERTIME50_CAP
}

impl Default for HoursConfig {
    fn default() -> Self {
        Self {
            standard_daily_minutes: DEFAULT_STANDARD_DAILY_MINUTES,
            overtime50_cap: DEFAULT_OVERTIME50_CAP,
        }
    }
}

/// Night window as written in the file: first and last minute, `HH:MM`.
#[derive(Debug, Clone, Deserialize)]
pub struct NightWindowConfig {
    /// First minute inside the window (e.g., "22:00").
    pub start: String,
    /// Last minute inside the window (e.g., "04:59").
    pub end: String,
}

/// Policy configuration from policy.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Policy metadata.
    pub policy: PolicyMetadata,
    /// Working-day limits.
    #[serde(default)]
    pub hours: HoursConfig,
    /// Night-differential window.
    pub night_window: NightWindowConfig,
    /// Handling of lone punches.
    #[serde(default)]
    pub incomplete_pair: IncompletePairPolicy,
    /// Night-minute attribution mode.
    #[serde(default)]
    pub night_allocation: NightAllocation,
    /// When set, days whose status is not OK count zero minutes.
    #[serde(default)]
    pub ignore_times_when_not_ok: bool,
    /// Monetary conversion constants.
    #[serde(default)]
    pub rates: RateMultipliers,
}

/// One configured regional holiday.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionalHolidayConfig {
    /// `YYYY-MM-DD`, `DD/MM/YYYY` or `DD/MM`.
    pub date: String,
    /// Holiday name; defaults to "Feriado Local".
    #[serde(default)]
    pub name: Option<String>,
}

/// Holiday configuration from holidays.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// Whether the built-in national holidays are added.
    #[serde(default = "default_include_national")]
    pub include_national: bool,
    /// Structured regional holidays.
    #[serde(default)]
    pub regional: Vec<RegionalHolidayConfig>,
    /// Regional holidays in the one-per-line text format.
    #[serde(default)]
    pub regional_text: Option<String>,
}

fn default_include_national() -> bool {
    true
}
