/// # CPU Module
///
/// Turns the user's desired CPU utilisation and the current CPU frequency into an
/// estimated power figure.
///
/// The desired utilisation arrives as free-form text and is parsed and range
/// checked on every tick. A bad value only affects the CPU field; the rest of the
/// tick carries on.
///
/// ## Example
///
/// ```rust
/// use host_telemetry::cpu::{cpu_performance, parse_cpu_target};
///
/// let target = parse_cpu_target("50").unwrap();
/// let perf = cpu_performance(target, Some(2.0));
/// assert_eq!(perf.estimated_power_watts, Some(1.0));
/// ```
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use thiserror::Error;

use crate::core::types::Percentage;
use crate::error::Error;
use crate::traits::CpuTargetSource;

/// Reasons a CPU target string is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CpuTargetError {
    /// The text is not a number
    #[error("Please enter a valid percentage.")]
    NotANumber,
    /// The number lies outside 0..=100
    #[error("Percentage should be between 0 and 100")]
    OutOfRange(f64),
}

impl From<CpuTargetError> for Error {
    fn from(err: CpuTargetError) -> Self {
        Error::invalid_input(err.to_string())
    }
}

/// CPU figures derived for one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CpuPerformance {
    /// The validated user target
    pub requested_percent: Percentage,
    /// Current frequency, `None` when the sensor could not provide it
    pub frequency_ghz: Option<f64>,
    /// `requested_percent / 100 * frequency_ghz`; `None` whenever the frequency is
    pub estimated_power_watts: Option<f64>,
}

/// Parses and validates a CPU target entered by the user
pub fn parse_cpu_target(text: &str) -> Result<Percentage, CpuTargetError> {
    let value: f64 = text.trim().parse().map_err(|_| CpuTargetError::NotANumber)?;
    if value.is_nan() {
        return Err(CpuTargetError::NotANumber);
    }
    Percentage::new(value).ok_or(CpuTargetError::OutOfRange(value))
}

/// Derives the CPU figures for a validated target
///
/// A missing or non-finite frequency leaves both derived values empty; nothing is
/// substituted for it.
pub fn cpu_performance(requested: Percentage, frequency_ghz: Option<f64>) -> CpuPerformance {
    let frequency_ghz = frequency_ghz.filter(|ghz| ghz.is_finite());
    CpuPerformance {
        requested_percent: requested,
        frequency_ghz,
        estimated_power_watts: frequency_ghz.map(|ghz| requested * ghz),
    }
}

/// Renders the CPU field
pub fn format_cpu(perf: &CpuPerformance) -> String {
    let frequency = match perf.frequency_ghz {
        Some(ghz) => format!("{ghz:.2} GHz"),
        None => "unavailable".to_string(),
    };
    let power = match perf.estimated_power_watts {
        Some(watts) => format!("{watts:.2} Watts"),
        None => "unavailable".to_string(),
    };

    // the target always keeps a decimal point, so "50" shows as "50.0"
    format!(
        "Desired CPU Usage: {:?}%\nCPU Frequency: {}\nEstimated CPU Power Consumption: {}",
        perf.requested_percent.as_f64(),
        frequency,
        power
    )
}

/// Renders the CPU field for a rejected target
pub fn format_cpu_error(err: &CpuTargetError) -> String {
    format!("Error: {err}")
}

/// A CPU target that can be changed from outside while the monitor runs
///
/// Cloning shares the underlying value, so a UI handle and the scheduler can hold
/// the same input.
#[derive(Debug, Clone, Default)]
pub struct CpuTargetInput {
    text: Arc<RwLock<String>>,
}

impl CpuTargetInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: Arc::new(RwLock::new(text.into())) }
    }

    /// Replaces the entered text
    pub fn set(&self, text: impl Into<String>) {
        *self.text.write() = text.into();
    }
}

impl CpuTargetSource for CpuTargetInput {
    fn cpu_target(&self) -> String {
        self.text.read().clone()
    }
}
