//! Request types for the Ponto Engine API.
//!
//! This module defines the JSON request structures for the `/payroll` and
//! `/report` endpoints.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::calculation::{IncompletePairPolicy, NightAllocation, PayrollOptions};
use crate::holidays::{DEFAULT_REGIONAL_NAME, parse_holiday_date, parse_regional_holidays};
use crate::models::{DailyPunchRecord, Employee, HolidayEntry};

/// Request body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employee, including the base salary.
    pub employee: Employee,
    /// The daily punch records to account.
    #[serde(default)]
    pub days: Vec<DailyPunchRecord>,
    /// Extra regional holidays on top of the configured ones.
    #[serde(default)]
    pub regional_holidays: Vec<RegionalHolidayRequest>,
    /// Extra regional holidays in the one-per-line text format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regional_holidays_text: Option<String>,
    /// Per-request policy overrides.
    #[serde(default)]
    pub overrides: PolicyOverrides,
}

/// Request body for the `/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Payroll input.
    #[serde(flatten)]
    pub payroll: PayrollRequest,
    /// Report year.
    pub year: i32,
    /// Report month, 1 through 12.
    pub month: u32,
    /// Store printed in the header; defaults to the employee's store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
}

/// A regional holiday supplied with a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalHolidayRequest {
    /// `YYYY-MM-DD`, `DD/MM/YYYY` or `DD/MM`.
    pub date: String,
    /// Holiday name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Policy switches a request may change. Unset fields keep the configured
/// value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyOverrides {
    /// Handling of lone punches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incomplete_pair: Option<IncompletePairPolicy>,
    /// Night-minute attribution mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub night_allocation: Option<NightAllocation>,
    /// Whether non-OK days count zero minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_times_when_not_ok: Option<bool>,
}

impl PolicyOverrides {
    /// Applies the set fields to `options`.
    pub fn apply(&self, options: &mut PayrollOptions) {
        if let Some(policy) = self.incomplete_pair {
            options.incomplete_pair = policy;
        }
        if let Some(mode) = self.night_allocation {
            options.night_allocation = mode;
        }
        if let Some(ignore) = self.ignore_times_when_not_ok {
            options.ignore_times_when_not_ok = ignore;
        }
    }
}

impl PayrollRequest {
    /// Regional holidays carried by the request.
    ///
    /// Structured entries whose date does not parse are returned in the
    /// error list; text lines that do not parse are skipped with a warning.
    pub fn extra_holidays(&self) -> (Vec<HolidayEntry>, Vec<String>) {
        let mut entries = Vec::new();
        let mut rejected = Vec::new();
        for holiday in &self.regional_holidays {
            match parse_holiday_date(&holiday.date) {
                Some(date) => {
                    let name = holiday
                        .name
                        .as_deref()
                        .map(str::trim)
                        .filter(|n| !n.is_empty())
                        .unwrap_or(DEFAULT_REGIONAL_NAME);
                    entries.push(HolidayEntry::regional(date, name));
                }
                None => rejected.push(holiday.date.clone()),
            }
        }
        if let Some(text) = &self.regional_holidays_text {
            entries.extend(parse_regional_holidays(text));
        }
        (entries, rejected)
    }

    /// Years whose holiday calendars apply: every year a day falls in,
    /// ascending, or just `fallback` when there are no days.
    pub fn calendar_years(&self, fallback: i32) -> Vec<i32> {
        let mut years: Vec<i32> = self.days.iter().map(|d| d.date.year()).collect();
        years.sort_unstable();
        years.dedup();
        if years.is_empty() {
            years.push(fallback);
        }
        years
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HolidayDate;

    fn request_json(extra: &str) -> String {
        format!(
            r#"{{
                "employee": {{ "id": "func_1", "name": "Ana Souza", "base_salary": "2200" }},
                "days": [
                    {{ "date": "2025-10-07", "entrada": "08:00", "saida": "17:00" }},
                    {{ "date": "2025-10-06", "entrada": "08:00", "saida": "17:00" }}
                ]{}
            }}"#,
            extra
        )
    }

    #[test]
    fn test_minimal_request_deserializes() {
        let request: PayrollRequest = serde_json::from_str(&request_json("")).unwrap();
        assert_eq!(request.employee.id, "func_1");
        assert_eq!(request.days.len(), 2);
        assert!(request.regional_holidays.is_empty());
        assert!(request.overrides.night_allocation.is_none());
    }

    #[test]
    fn test_calendar_years_cover_every_day() {
        let mut request: PayrollRequest = serde_json::from_str(&request_json("")).unwrap();
        assert_eq!(request.calendar_years(1999), vec![2025]);

        let mut new_year = request.days[0].clone();
        new_year.date = chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        request.days.insert(0, new_year);
        assert_eq!(request.calendar_years(1999), vec![2025, 2026]);

        request.days.clear();
        assert_eq!(request.calendar_years(1999), vec![1999]);
    }

    #[test]
    fn test_extra_holidays_from_both_sources() {
        let extra = r#",
            "regional_holidays": [ { "date": "20/01", "name": "São Sebastião" }, { "date": "40/40" } ],
            "regional_holidays_text": "09/07 - Revolução\nnot a holiday"
        "#;
        let request: PayrollRequest = serde_json::from_str(&request_json(extra)).unwrap();
        let (entries, rejected) = request.extra_holidays();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date, HolidayDate::Recurring { day: 20, month: 1 });
        assert_eq!(entries[1].name, "Revolução");
        assert_eq!(rejected, vec!["40/40".to_string()]);
    }

    #[test]
    fn test_overrides_apply_only_set_fields() {
        let extra = r#", "overrides": { "night_allocation": "proportional" }"#;
        let request: PayrollRequest = serde_json::from_str(&request_json(extra)).unwrap();

        let mut options = PayrollOptions::default();
        request.overrides.apply(&mut options);
        assert_eq!(options.night_allocation, NightAllocation::Proportional);
        assert_eq!(options.incomplete_pair, IncompletePairPolicy::DropSegment);
        assert!(!options.ignore_times_when_not_ok);
    }

    #[test]
    fn test_report_request_flattens_payroll_fields() {
        let json = request_json(r#", "year": 2025, "month": 10, "store": "Loja Centro""#);
        let request: ReportRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.year, 2025);
        assert_eq!(request.month, 10);
        assert_eq!(request.store.as_deref(), Some("Loja Centro"));
        assert_eq!(request.payroll.days.len(), 2);
    }
}
