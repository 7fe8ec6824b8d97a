//! # Power Module
//!
//! Battery state as read from the host, plus the fixed thermal design power figure
//! shown next to it.
//!
//! A host without a battery is a normal condition: the sensor read returns `None`
//! and the power field shows an explicit "unavailable" message instead of being
//! left blank.
//!
//! ## Example
//!
//! ```rust
//! use host_telemetry::power::{format_power, thermal_design_power, PowerReading};
//!
//! let reading = PowerReading::new(true, Some(87.0));
//! let text = format_power(Some(&reading), thermal_design_power());
//! assert!(text.starts_with("Power Status: Plugged In, Battery: 87%"));
//! ```

use serde::Serialize;

use crate::core::types::Percentage;

/// CPU share of the thermal design power, in watts
pub const CPU_TDP_WATTS: f64 = 35.0;
/// Memory share of the thermal design power, in watts
pub const MEMORY_TDP_WATTS: f64 = 8.0;
/// Network interface share of the thermal design power, in watts
pub const NIC_TDP_WATTS: f64 = 5.0;

/// Message shown in the power field when no battery sensor exists
pub const POWER_UNAVAILABLE: &str = "Failed to retrieve power information.";

/// Where the host is drawing power from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PowerSource {
    /// Running from external power
    PluggedIn,
    /// Running from the battery
    OnBattery,
}

impl std::fmt::Display for PowerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PowerSource::PluggedIn => write!(f, "Plugged In"),
            PowerSource::OnBattery => write!(f, "On Battery"),
        }
    }
}

/// A point-in-time battery reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerReading {
    /// Whether external power is connected
    pub plugged: bool,
    /// Charge level; `None` if the sensor reported nothing usable
    pub battery_percent: Option<Percentage>,
}

impl PowerReading {
    /// Builds a reading, dropping a charge level that falls outside 0..=100
    pub fn new(plugged: bool, battery_percent: Option<f64>) -> Self {
        Self { plugged, battery_percent: battery_percent.and_then(Percentage::new) }
    }

    pub fn source(&self) -> PowerSource {
        if self.plugged {
            PowerSource::PluggedIn
        } else {
            PowerSource::OnBattery
        }
    }
}

/// Fixed thermal design power of the monitored components (CPU + memory + NIC)
///
/// Not a measurement: no sensor feeds into it.
pub fn thermal_design_power() -> f64 {
    CPU_TDP_WATTS + MEMORY_TDP_WATTS + NIC_TDP_WATTS
}

/// Renders the power field
pub fn format_power(reading: Option<&PowerReading>, tdp_watts: f64) -> String {
    let status = match reading {
        Some(reading) => {
            let battery = match reading.battery_percent {
                Some(percent) => format!("{percent}%"),
                None => "unavailable".to_string(),
            };
            format!("Power Status: {}, Battery: {}", reading.source(), battery)
        },
        None => POWER_UNAVAILABLE.to_string(),
    };

    format!("{status}\nThermal Design Power: {tdp_watts} W")
}
