//! Punch parsing and work segmentation.
//!
//! A day has at most two worked segments: `entrada -> intervaloSaida` and
//! `intervaloVolta -> saida`. A day with no break punches at all is one
//! continuous segment `entrada -> saida`. Incomplete pairs are absorbed
//! according to [`IncompletePairPolicy`].

use crate::error::{EngineError, EngineResult};
use crate::models::{DailyPunchRecord, PunchField};

use super::clock::parse_clock_time;
use super::options::IncompletePairPolicy;
use super::window::WorkSegment;

/// The four punches of a day as minutes since midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParsedPunches {
    /// Clock-in.
    pub entrada: Option<u32>,
    /// Break start.
    pub intervalo_saida: Option<u32>,
    /// Break end.
    pub intervalo_volta: Option<u32>,
    /// Clock-out.
    pub saida: Option<u32>,
}

/// Parses every present punch of a record.
///
/// Fails with [`EngineError::MalformedTimeValue`] naming the day and field
/// of the first value that is not a valid `HH:MM`.
pub fn parse_punches(record: &DailyPunchRecord) -> EngineResult<ParsedPunches> {
    let parse = |field: PunchField| -> EngineResult<Option<u32>> {
        match record.punch(field) {
            None => Ok(None),
            Some(raw) => parse_clock_time(raw).map(Some).ok_or_else(|| {
                EngineError::MalformedTimeValue {
                    date: record.date,
                    field: field.as_str().to_string(),
                    value: raw.to_string(),
                }
            }),
        }
    };

    Ok(ParsedPunches {
        entrada: parse(PunchField::Entrada)?,
        intervalo_saida: parse(PunchField::IntervaloSaida)?,
        intervalo_volta: parse(PunchField::IntervaloVolta)?,
        saida: parse(PunchField::Saida)?,
    })
}

/// Builds the day's worked segments in chronological order.
///
/// Zero-length segments are dropped.
pub fn work_segments(punches: &ParsedPunches, policy: IncompletePairPolicy) -> Vec<WorkSegment> {
    if punches.intervalo_saida.is_none() && punches.intervalo_volta.is_none() {
        return pair(punches.entrada, punches.saida)
            .into_iter()
            .filter(|s| s.length > 0)
            .collect();
    }

    let first = pair(punches.entrada, punches.intervalo_saida);
    let second = pair(punches.intervalo_volta, punches.saida);

    let first_incomplete = punches.entrada.is_some() != punches.intervalo_saida.is_some();
    let second_incomplete = punches.intervalo_volta.is_some() != punches.saida.is_some();

    if policy == IncompletePairPolicy::SpanEntradaToSaida && (first_incomplete || second_incomplete) {
        if let (Some(entrada), Some(saida)) = (punches.entrada, punches.saida) {
            return [WorkSegment::between(entrada, saida)]
                .into_iter()
                .filter(|s| s.length > 0)
                .collect();
        }
    }

    [first, second]
        .into_iter()
        .flatten()
        .filter(|s| s.length > 0)
        .collect()
}

fn pair(start: Option<u32>, end: Option<u32>) -> Option<WorkSegment> {
    Some(WorkSegment::between(start?, end?))
}
