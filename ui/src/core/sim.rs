//! Data contract for simulation output consumed by the comparison panel.
//!
//! The simulation engine lives elsewhere; these types only mirror the JSON it
//! emits (`timeSec`, `errMagnitude`, `maxErrorKm`, ...). They carry no
//! behavior beyond a few read helpers and are never mutated after loading.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed length of a simulation run. The time axis always spans
/// `[0, SIMULATION_DURATION_SEC]`, regardless of where the samples stop.
pub const SIMULATION_DURATION_SEC: f64 = 60.0;

/// One instant of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimSample {
    /// Seconds since run start. Non-decreasing across a run.
    pub time_sec: f64,
    /// Positional error magnitude (km). Never negative.
    pub err_magnitude: f64,
}

impl SimSample {
    pub fn new(time_sec: f64, err_magnitude: f64) -> Self {
        Self {
            time_sec,
            err_magnitude,
        }
    }
}

/// Safety verdict reported by the engine. Only `"maintained"` is a positive
/// outcome; every other literal is shown as-is with cautionary styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SafetyStatus(String);

impl SafetyStatus {
    pub const MAINTAINED: &'static str = "maintained";

    pub fn new<T: Into<String>>(literal: T) -> Self {
        Self(literal.into())
    }

    pub fn maintained() -> Self {
        Self::new(Self::MAINTAINED)
    }

    pub fn is_maintained(&self) -> bool {
        self.0 == Self::MAINTAINED
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A completed run: the sampled error trace plus three scalar summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub samples: Vec<SimSample>,
    pub max_error_km: f64,
    /// `None` when the error never recovered within the run.
    #[serde(default)]
    pub recovery_time_sec: Option<f64>,
    pub safety_status: SafetyStatus,
}

/// Which run(s) feed the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonMode {
    #[default]
    With,
    Without,
    Both,
}

impl ComparisonMode {
    pub const ALL: [ComparisonMode; 3] = [
        ComparisonMode::With,
        ComparisonMode::Without,
        ComparisonMode::Both,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonMode::With => "with",
            ComparisonMode::Without => "without",
            ComparisonMode::Both => "both",
        }
    }

    /// The run whose scalars back the summary cards. Only `Without` promotes
    /// the without-intervention run; `Both` reports on the with-run.
    pub fn primary<'a>(
        &self,
        with_result: &'a SimulationResult,
        without_result: &'a SimulationResult,
    ) -> &'a SimulationResult {
        match self {
            ComparisonMode::Without => without_result,
            ComparisonMode::With | ComparisonMode::Both => with_result,
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown comparison mode `{0}` (expected with, without or both)")]
pub struct ParseModeError(pub String);

impl FromStr for ComparisonMode {
    type Err = ParseModeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "with" => Ok(ComparisonMode::With),
            "without" => Ok(ComparisonMode::Without),
            "both" => Ok(ComparisonMode::Both),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}
