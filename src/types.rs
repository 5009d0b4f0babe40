use serde::Deserialize;

/// Day names indexed the way the thermostat counts days: 0 = Monday.
const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Model name and firmware version as reported by the device,
/// e.g. `("CT80", "V2.14T")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub model: String,
    pub version: String,
}

/// What the unit is actively running, distinct from the configured mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HvacRunState {
    Off,
    Heat,
    Cool,
}

impl HvacRunState {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(HvacRunState::Off),
            1 => Some(HvacRunState::Heat),
            2 => Some(HvacRunState::Cool),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HvacRunState::Off => "Off",
            HvacRunState::Heat => "Heat",
            HvacRunState::Cool => "Cool",
        }
    }
}

/// Whether the circulation fan is currently blowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanRunState {
    Off,
    On,
}

/// How the circulation fan is configured to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanMode {
    Auto,
    On,
}

impl FanMode {
    pub fn label(&self) -> &'static str {
        match self {
            FanMode::Auto => "auto",
            FanMode::On => "on",
        }
    }
}

/// Configured operating mode. [`ThermostatTarget`] carries the raw `tmode`
/// code; this is the typed view for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HvacMode {
    Off,
    Heat,
    Cool,
    Auto,
}

impl HvacMode {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(HvacMode::Off),
            1 => Some(HvacMode::Heat),
            2 => Some(HvacMode::Cool),
            3 => Some(HvacMode::Auto),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HvacMode::Off => "Off",
            HvacMode::Heat => "Heat",
            HvacMode::Cool => "Cool",
            HvacMode::Auto => "Auto",
        }
    }
}

/// Device clock, passed through as reported. Older firmware spells the
/// minute field `minutes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Clock {
    pub day: u8,
    pub hour: u8,
    #[serde(alias = "minutes")]
    pub minute: u8,
}

impl Clock {
    pub fn day_name(&self) -> Option<&'static str> {
        DAY_NAMES.get(self.day as usize).copied()
    }
}

/// Normalized snapshot of what the thermostat is doing right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermostatState {
    pub current_temp: f64,
    pub hvac_run_state: HvacRunState,
    pub fan_run_state: FanRunState,
    pub clock: Option<Clock>,
}

/// Program selector, override flag, and hold flag from the status body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgramStatus {
    pub mode: u8,
    pub override_flag: u8,
    pub hold: bool,
}

/// Normalized view of what the thermostat is trying to do: the active
/// setpoint, the configured mode (raw `tmode` code), and program flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermostatTarget {
    pub target_temp: f64,
    pub hvac_mode: u8,
    pub fan_mode: FanMode,
    pub program: ProgramStatus,
}

impl ThermostatTarget {
    /// Sentinel reported when the status body carries no setpoint field.
    pub const NO_TARGET: f64 = -1.0;
}

/// One period of a stored weekly program: when it starts and what it sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgramPeriod {
    pub start_minute: u16,
    pub setpoint: f64,
}

/// A full weekly program table, one row per day (0 = Monday).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgramSchedule {
    pub days: [Vec<ProgramPeriod>; 7],
}

impl ProgramSchedule {
    pub fn day(&self, day: usize) -> Option<&[ProgramPeriod]> {
        self.days.get(day).map(Vec::as_slice)
    }
}
