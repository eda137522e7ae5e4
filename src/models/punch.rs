//! Daily punch record and related types.
//!
//! This module defines [`DailyPunchRecord`], the one-document-per-day shape
//! the time clock writes, together with the closed [`Status`] tag and the
//! [`PunchField`] slot names.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Attendance status of a day.
///
/// When the status is not [`Status::Ok`] the time fields are informational;
/// a timesheet shows the status label in place of the times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// Regular working day.
    #[default]
    #[serde(rename = "OK")]
    Ok,
    /// Day off.
    #[serde(rename = "FOLGA")]
    Folga,
    /// Medical leave backed by a certificate.
    #[serde(rename = "ATESTADO")]
    Atestado,
    /// Unjustified absence.
    #[serde(rename = "FALTA")]
    Falta,
    /// Vacation.
    #[serde(rename = "FÉRIAS", alias = "FERIAS")]
    Ferias,
    /// Disciplinary suspension.
    #[serde(rename = "SUSPENSÃO", alias = "SUSPENSAO")]
    Suspensao,
    /// Dismissed from work for the day.
    #[serde(rename = "DISPENSA")]
    Dispensa,
}

impl Status {
    /// Every status, in the order the editor offers them.
    pub const ALL: [Status; 7] = [
        Status::Ok,
        Status::Folga,
        Status::Atestado,
        Status::Falta,
        Status::Ferias,
        Status::Suspensao,
        Status::Dispensa,
    ];

    /// The label printed on timesheets.
    pub fn label(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Folga => "FOLGA",
            Status::Atestado => "ATESTADO",
            Status::Falta => "FALTA",
            Status::Ferias => "FÉRIAS",
            Status::Suspensao => "SUSPENSÃO",
            Status::Dispensa => "DISPENSA",
        }
    }

    /// Returns true for a regular working day.
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the four punch slots of a day, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PunchField {
    /// Clock-in.
    Entrada,
    /// Break start.
    IntervaloSaida,
    /// Break end.
    IntervaloVolta,
    /// Clock-out.
    Saida,
}

impl PunchField {
    /// The slots in the order punches fill them.
    pub const ALL: [PunchField; 4] = [
        PunchField::Entrada,
        PunchField::IntervaloSaida,
        PunchField::IntervaloVolta,
        PunchField::Saida,
    ];

    /// The document field name.
    pub fn as_str(self) -> &'static str {
        match self {
            PunchField::Entrada => "entrada",
            PunchField::IntervaloSaida => "intervaloSaida",
            PunchField::IntervaloVolta => "intervaloVolta",
            PunchField::Saida => "saida",
        }
    }
}

impl fmt::Display for PunchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One calendar day's attendance for one employee.
///
/// Time fields hold the raw `HH:MM` strings as stored; they are validated
/// when the engine parses them. Empty strings count as absent.
///
/// # Example
///
/// ```
/// use ponto_engine::models::{DailyPunchRecord, Status};
///
/// let json = r#"{
///     "date": "2025-10-06",
///     "entrada": "08:00",
///     "intervaloSaida": "12:00",
///     "intervaloVolta": "13:00",
///     "saida": "18:00"
/// }"#;
/// let record: DailyPunchRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.status, Status::Ok);
/// assert!(record.has_any_punch());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPunchRecord {
    /// The calendar day, also the document key.
    #[serde(alias = "id", alias = "data")]
    pub date: NaiveDate,
    /// Clock-in time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrada: Option<String>,
    /// Break start time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intervalo_saida: Option<String>,
    /// Break end time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intervalo_volta: Option<String>,
    /// Clock-out time, possibly after midnight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saida: Option<String>,
    /// Attendance status.
    #[serde(default)]
    pub status: Status,
    /// Link to an uploaded medical certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atestado_url: Option<String>,
    /// Set when the record was written by the automatic day-off stamp.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub criado_automaticamente: bool,
}

/// An editor's replacement of a day's punches.
///
/// Every time field is written: a value sets it, `None` or an empty string
/// removes it. A missing status resets the day to [`Status::Ok`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchEdit {
    /// New clock-in.
    #[serde(default)]
    pub entrada: Option<String>,
    /// New break start.
    #[serde(default)]
    pub intervalo_saida: Option<String>,
    /// New break end.
    #[serde(default)]
    pub intervalo_volta: Option<String>,
    /// New clock-out.
    #[serde(default)]
    pub saida: Option<String>,
    /// New status.
    #[serde(default)]
    pub status: Option<Status>,
}

impl DailyPunchRecord {
    /// Creates an empty record for a day.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entrada: None,
            intervalo_saida: None,
            intervalo_volta: None,
            saida: None,
            status: Status::Ok,
            atestado_url: None,
            criado_automaticamente: false,
        }
    }

    /// Returns the trimmed value of a slot, treating blank values as absent.
    pub fn punch(&self, field: PunchField) -> Option<&str> {
        let raw = match field {
            PunchField::Entrada => &self.entrada,
            PunchField::IntervaloSaida => &self.intervalo_saida,
            PunchField::IntervaloVolta => &self.intervalo_volta,
            PunchField::Saida => &self.saida,
        };
        raw.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    fn slot_mut(&mut self, field: PunchField) -> &mut Option<String> {
        match field {
            PunchField::Entrada => &mut self.entrada,
            PunchField::IntervaloSaida => &mut self.intervalo_saida,
            PunchField::IntervaloVolta => &mut self.intervalo_volta,
            PunchField::Saida => &mut self.saida,
        }
    }

    /// Sets or clears a slot. Blank values clear it.
    pub fn set_punch(&mut self, field: PunchField, value: Option<String>) {
        *self.slot_mut(field) = value.filter(|v| !v.trim().is_empty());
    }

    /// Returns true if at least one slot holds a time.
    pub fn has_any_punch(&self) -> bool {
        PunchField::ALL.iter().any(|f| self.punch(*f).is_some())
    }

    /// The first empty slot in punch order, if any.
    pub fn next_empty_slot(&self) -> Option<PunchField> {
        PunchField::ALL
            .iter()
            .copied()
            .find(|f| self.punch(*f).is_none())
    }

    /// Records a clock punch into the next empty slot.
    ///
    /// Returns the slot that was filled, or
    /// [`EngineError::DayAlreadyComplete`] when all four are taken.
    ///
    /// # Example
    ///
    /// ```
    /// use ponto_engine::models::{DailyPunchRecord, PunchField};
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let mut record = DailyPunchRecord::new(NaiveDate::from_ymd_opt(2025, 10, 6).unwrap());
    /// let slot = record.record_punch(NaiveTime::from_hms_opt(8, 2, 0).unwrap()).unwrap();
    /// assert_eq!(slot, PunchField::Entrada);
    /// assert_eq!(record.entrada.as_deref(), Some("08:02"));
    /// ```
    pub fn record_punch(&mut self, time: NaiveTime) -> EngineResult<PunchField> {
        let slot = self
            .next_empty_slot()
            .ok_or(EngineError::DayAlreadyComplete { date: self.date })?;
        *self.slot_mut(slot) = Some(time.format("%H:%M").to_string());
        Ok(slot)
    }

    /// Merges an editor's changes into the record.
    pub fn apply_edit(&mut self, edit: &PunchEdit) {
        self.set_punch(PunchField::Entrada, edit.entrada.clone());
        self.set_punch(PunchField::IntervaloSaida, edit.intervalo_saida.clone());
        self.set_punch(PunchField::IntervaloVolta, edit.intervalo_volta.clone());
        self.set_punch(PunchField::Saida, edit.saida.clone());
        self.status = edit.status.unwrap_or_default();
    }
}
