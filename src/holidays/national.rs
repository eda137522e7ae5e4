//! Built-in Brazilian national holidays.

use chrono::{Days, NaiveDate};

use crate::models::HolidayEntry;

/// First year Black Consciousness Day is a national holiday.
const CONSCIENCIA_NEGRA_SINCE: i32 = 2024;

/// Easter Sunday for a Gregorian year (anonymous computus).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ponto_engine::holidays::easter_sunday;
///
/// assert_eq!(easter_sunday(2025), NaiveDate::from_ymd_opt(2025, 4, 20));
/// ```
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// The national holidays of a year, sorted by date.
///
/// Fixed-date holidays plus the movable feasts anchored on Easter:
/// Carnival Monday and Tuesday, Good Friday, Easter and Corpus Christi.
pub fn national_holidays(year: i32) -> Vec<HolidayEntry> {
    let fixed: &[(u32, u32, &str)] = &[
        (1, 1, "Confraternização mundial"),
        (4, 21, "Tiradentes"),
        (5, 1, "Dia do trabalho"),
        (9, 7, "Independência do Brasil"),
        (10, 12, "Nossa Senhora Aparecida"),
        (11, 2, "Finados"),
        (11, 15, "Proclamação da República"),
        (12, 25, "Natal"),
    ];

    let mut holidays: Vec<HolidayEntry> = fixed
        .iter()
        .filter_map(|&(month, day, name)| {
            NaiveDate::from_ymd_opt(year, month, day).map(|date| HolidayEntry::national(date, name))
        })
        .collect();

    if year >= CONSCIENCIA_NEGRA_SINCE {
        if let Some(date) = NaiveDate::from_ymd_opt(year, 11, 20) {
            holidays.push(HolidayEntry::national(date, "Dia da consciência negra"));
        }
    }

    if let Some(easter) = easter_sunday(year) {
        let movable = [
            (easter.checked_sub_days(Days::new(48)), "Carnaval"),
            (easter.checked_sub_days(Days::new(47)), "Carnaval"),
            (easter.checked_sub_days(Days::new(2)), "Sexta-feira Santa"),
            (Some(easter), "Páscoa"),
            (easter.checked_add_days(Days::new(60)), "Corpus Christi"),
        ];
        holidays.extend(
            movable
                .into_iter()
                .filter_map(|(date, name)| date.map(|d| HolidayEntry::national(d, name))),
        );
    }

    holidays.sort_by_key(|h| {
        let (day, month) = h.date.day_month();
        (month, day)
    });
    holidays
}
