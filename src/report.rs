//! Monthly timesheet report.
//!
//! [`build_monthly_report`] assembles everything a renderer needs to print
//! an employee's month: one row per calendar day, the holidays in the
//! month, the worked-time total and the payroll summary. Layout is the
//! renderer's business.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::attendance::month_name;
use crate::calculation::format_minutes;
use crate::error::{EngineError, EngineResult};
use crate::holidays::HolidayCalendar;
use crate::models::{DailyPunchRecord, Employee, HolidaySource, PayBreakdown, PayrollResult, PunchField};

/// Cell shown for a punch that was never recorded.
pub const EMPTY_CELL: &str = "-";

/// One line of the timesheet table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// `DD/MM/YYYY`.
    pub date: String,
    /// Weekday label, with ` (Feriado)` on holidays.
    pub weekday: String,
    /// Clock-in cell.
    pub entrada: String,
    /// Break start cell.
    pub intervalo_saida: String,
    /// Break end cell.
    pub intervalo_volta: String,
    /// Clock-out cell.
    pub saida: String,
    /// Whether the day is a holiday.
    pub is_holiday: bool,
}

/// A holiday listed under the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportHoliday {
    /// `DD/MM/YYYY`.
    pub date: String,
    /// Holiday name.
    pub name: String,
    /// Where the holiday came from.
    pub source: HolidaySource,
    /// `Nacional` or `Regional`.
    pub source_label: String,
}

/// Everything printed on a monthly timesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Report heading.
    pub title: String,
    /// Employee name, or id when unnamed.
    pub employee_name: String,
    /// Store name.
    pub store: String,
    /// Report year.
    pub year: i32,
    /// Report month (1-12).
    pub month: u32,
    /// One row per day of the month.
    pub rows: Vec<ReportRow>,
    /// Holidays falling in the month, by day.
    pub holidays: Vec<ReportHoliday>,
    /// Worked minutes over the month.
    pub total_worked_minutes: u32,
    /// The same total formatted `Hh Mm`.
    pub total_worked: String,
    /// Pay amounts rounded to cents.
    pub payroll: PayBreakdown,
    /// Suggested file name for the rendered document.
    pub file_name: String,
}

/// Portuguese weekday label, capitalized.
pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Segunda-feira",
        Weekday::Tue => "Terça-feira",
        Weekday::Wed => "Quarta-feira",
        Weekday::Thu => "Quinta-feira",
        Weekday::Fri => "Sexta-feira",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn report_row(date: NaiveDate, record: Option<&DailyPunchRecord>, calendar: &HolidayCalendar) -> ReportRow {
    let is_holiday = calendar.is_holiday(date);
    let weekday = if is_holiday {
        format!("{} (Feriado)", weekday_label(date.weekday()))
    } else {
        weekday_label(date.weekday()).to_string()
    };

    let cell = |field: PunchField| -> String {
        match record {
            Some(r) if !r.status.is_ok() => r.status.label().to_string(),
            Some(r) => r.punch(field).unwrap_or(EMPTY_CELL).to_string(),
            None => EMPTY_CELL.to_string(),
        }
    };

    ReportRow {
        date: format_date(date),
        weekday,
        entrada: cell(PunchField::Entrada),
        intervalo_saida: cell(PunchField::IntervaloSaida),
        intervalo_volta: cell(PunchField::IntervaloVolta),
        saida: cell(PunchField::Saida),
        is_holiday,
    }
}

/// Builds the timesheet for one employee and month.
///
/// `days` may hold records of other months; only the requested month is
/// printed. The worked-time total is taken from `payroll`'s per-day detail
/// for the month.
///
/// # Errors
///
/// Returns [`EngineError::InvalidArgument`] when `month` is not 1-12.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ponto_engine::calculation::{compute_monthly_payroll, PayrollOptions};
/// use ponto_engine::holidays::HolidayCalendar;
/// use ponto_engine::models::{DailyPunchRecord, Employee};
/// use ponto_engine::report::build_monthly_report;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "func_001".to_string(),
///     name: Some("Ana Souza".to_string()),
///     store: None,
///     base_salary: Decimal::from(2200),
/// };
/// let mut day = DailyPunchRecord::new(NaiveDate::from_ymd_opt(2025, 10, 6).unwrap());
/// day.entrada = Some("08:00".to_string());
/// day.saida = Some("17:00".to_string());
///
/// let calendar = HolidayCalendar::for_year(2025, Vec::new());
/// let options = PayrollOptions::default().with_holidays(calendar.clone());
/// let days = vec![day];
/// let payroll = compute_monthly_payroll(&days, employee.base_salary, &options).unwrap();
///
/// let report =
///     build_monthly_report(&employee, "Loja Centro", 2025, 10, &days, &calendar, &payroll).unwrap();
/// assert_eq!(report.rows.len(), 31);
/// assert_eq!(report.total_worked, "9h 0m");
/// assert_eq!(report.file_name, "Relatorio_Outubro2025_ana_souza.pdf");
/// ```
pub fn build_monthly_report(
    employee: &Employee,
    store: &str,
    year: i32,
    month: u32,
    days: &[DailyPunchRecord],
    calendar: &HolidayCalendar,
    payroll: &PayrollResult,
) -> EngineResult<MonthlyReport> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        EngineError::invalid_argument("month", format!("{}-{} is not a valid month", year, month))
    })?;
    let month_title = capitalize(month_name(month).unwrap_or_default());

    let in_month = |date: &NaiveDate| date.year() == year && date.month() == month;

    let rows: Vec<ReportRow> = first
        .iter_days()
        .take_while(in_month)
        .map(|date| {
            let record = days.iter().find(|r| r.date == date);
            report_row(date, record, calendar)
        })
        .collect();

    let holidays = calendar
        .holidays_in_month(year, month)
        .into_iter()
        .map(|(date, entry)| ReportHoliday {
            date: format_date(date),
            name: entry.name.clone(),
            source: entry.source,
            source_label: entry.source.label().to_string(),
        })
        .collect();

    let total_worked_minutes: u32 = payroll
        .per_day
        .iter()
        .filter(|day| in_month(&day.date))
        .map(|day| day.worked_minutes)
        .sum();

    let file_name = format!(
        "Relatorio_{}{}_{}.pdf",
        month_title,
        year,
        employee.file_slug()
    );

    info!(
        employee_id = %employee.id,
        year,
        month,
        total_worked_minutes,
        "Built monthly report"
    );

    Ok(MonthlyReport {
        title: format!("Relatório de Ponto - {} de {}", month_title, year),
        employee_name: employee.display_name().to_string(),
        store: store.to_string(),
        year,
        month,
        rows,
        holidays,
        total_worked_minutes,
        total_worked: format_minutes(total_worked_minutes),
        payroll: payroll.pays.rounded(),
        file_name,
    })
}
