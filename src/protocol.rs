//! Wire types and normalization for the thermostat's JSON bodies.
//!
//! Hardware generations disagree about where fan status lives and which
//! field carries the active setpoint; this module owns that
//! reconciliation.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::types::{
    Clock, FanMode, FanRunState, HvacRunState, Identity, ProgramPeriod, ProgramSchedule,
    ProgramStatus, ThermostatState, ThermostatTarget,
};
use crate::{Error, Result};

pub(crate) const MODEL_PATH: &str = "/tstat/model";
pub(crate) const STATUS_PATH: &str = "/tstat";
pub(crate) const PROGRAM_HEAT_PATH: &str = "/tstat/program/heat";
pub(crate) const PROGRAM_COOL_PATH: &str = "/tstat/program/cool";

/// The one model that reports fan status in `fstate`; every other model
/// uses `fmode`.
const FSTATE_MODEL: &str = "CT30";

#[derive(Debug, Deserialize)]
pub(crate) struct RawModel {
    pub model: String,
}

/// `/tstat` status body. `temp`, `ttarget`, and `tmode` are required by
/// the device protocol; everything else may be absent depending on model
/// and operating mode.
#[derive(Debug, Deserialize)]
pub(crate) struct RawStatus {
    pub temp: f64,
    #[serde(alias = "tstate")]
    pub ttarget: u8,
    pub tmode: u8,
    pub fstate: Option<u8>,
    pub fmode: Option<u8>,
    pub time: Option<Clock>,
    pub t_heat: Option<f64>,
    pub t_cool: Option<f64>,
    pub it_heat: Option<f64>,
    pub it_cool: Option<f64>,
    pub a_heat: Option<f64>,
    pub a_cool: Option<f64>,
    pub program_mode: Option<u8>,
    #[serde(rename = "override")]
    pub override_flag: Option<u8>,
    pub hold: Option<u8>,
}

/// `/tstat/program/*` body: day index key, flat array of alternating
/// start minutes and setpoints.
pub(crate) type RawProgram = BTreeMap<String, Vec<f64>>;

/// Split the device's single `"<model> <version>"` string into its two
/// tokens.
pub(crate) fn parse_identity(model_field: &str) -> Result<Identity> {
    match model_field.split_once(' ') {
        Some((model, version)) if !model.is_empty() && !version.is_empty() => Ok(Identity {
            model: model.to_string(),
            version: version.to_string(),
        }),
        _ => Err(Error::Protocol(format!(
            "malformed model string: {model_field:?}"
        ))),
    }
}

pub(crate) fn normalize_state(model: &str, raw: &RawStatus) -> Result<ThermostatState> {
    let hvac_run_state = HvacRunState::from_code(raw.ttarget)
        .ok_or_else(|| Error::Protocol(format!("unknown run state code: {}", raw.ttarget)))?;
    Ok(ThermostatState {
        current_temp: raw.temp,
        hvac_run_state,
        fan_run_state: fan_run_state(model, raw),
        clock: raw.time,
    })
}

pub(crate) fn normalize_target(raw: &RawStatus) -> ThermostatTarget {
    ThermostatTarget {
        target_temp: target_temp(raw),
        hvac_mode: raw.tmode,
        fan_mode: fan_mode(raw.fmode.unwrap_or(0)),
        program: ProgramStatus {
            mode: raw.program_mode.unwrap_or(0),
            override_flag: raw.override_flag.unwrap_or(0),
            hold: raw.hold.unwrap_or(0) != 0,
        },
    }
}

/// The CT30 reports fan status in `fstate` (used directly); everything
/// else reports `fmode`, where any value >= 1 means the fan is blowing.
fn fan_run_state(model: &str, raw: &RawStatus) -> FanRunState {
    let running = if model == FSTATE_MODEL {
        raw.fstate.unwrap_or(0) != 0
    } else {
        raw.fmode.unwrap_or(0) >= 1
    };
    if running { FanRunState::On } else { FanRunState::Off }
}

/// The active setpoint lives in a different field per operating mode.
/// Checked in fixed priority order; a zero value counts as absent.
fn target_temp(raw: &RawStatus) -> f64 {
    [
        raw.t_heat, raw.t_cool, raw.it_heat, raw.it_cool, raw.a_heat, raw.a_cool,
    ]
    .into_iter()
    .flatten()
    .find(|t| *t != 0.0)
    .unwrap_or(ThermostatTarget::NO_TARGET)
}

/// Configured fan mode. The cutoff is inclusive at 1: both 0 and 1 mean
/// auto. Distinct from the run-state threshold above.
fn fan_mode(fmode: u8) -> FanMode {
    if fmode <= 1 { FanMode::Auto } else { FanMode::On }
}

pub(crate) fn normalize_program(raw: &RawProgram) -> Result<ProgramSchedule> {
    let mut schedule = ProgramSchedule::default();
    for (key, row) in raw {
        let day: usize = key
            .parse()
            .ok()
            .filter(|d| *d < 7)
            .ok_or_else(|| Error::Protocol(format!("bad program day key: {key:?}")))?;
        if row.len() % 2 != 0 {
            return Err(Error::Protocol(format!(
                "odd-length program row for day {day}: {} entries",
                row.len()
            )));
        }
        schedule.days[day] = row
            .chunks_exact(2)
            .map(|pair| ProgramPeriod {
                start_minute: pair[0] as u16,
                setpoint: pair[1],
            })
            .collect();
    }
    Ok(schedule)
}
