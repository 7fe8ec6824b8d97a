//! Graphics usage
//!
//! There is no live GPU sensor behind this module. [`GraphicsUsage::PLACEHOLDER`] is
//! a fixed stub value and every tick reports the same figures; consumers must not
//! read it as a fresh measurement.

use serde::Serialize;

use crate::core::types::bytes_to_gigabytes;

const MIB: u64 = 1024 * 1024;

/// Graphics load and memory, in raw units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphicsUsage {
    /// GPU load percentage (0-100)
    pub load_percent: f64,
    /// Total GPU memory in bytes
    pub total_bytes: u64,
    /// Used GPU memory in bytes
    pub used_bytes: u64,
}

impl GraphicsUsage {
    /// Static stand-in for an integrated GPU reading
    pub const PLACEHOLDER: GraphicsUsage =
        GraphicsUsage { load_percent: 45.6, total_bytes: 2048 * MIB, used_bytes: 1024 * MIB };
}

/// Graphics figures as displayed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphicsUsageGb {
    pub load_percent: f64,
    pub total_gb: f64,
    pub used_gb: f64,
}

/// Pure unit conversion of a graphics reading
pub fn graphics_usage_gb(usage: &GraphicsUsage) -> GraphicsUsageGb {
    GraphicsUsageGb {
        load_percent: usage.load_percent,
        total_gb: bytes_to_gigabytes(usage.total_bytes),
        used_gb: bytes_to_gigabytes(usage.used_bytes),
    }
}

/// Renders the graphics field
pub fn format_graphics(gb: &GraphicsUsageGb) -> String {
    format!(
        "Iris Graphics Load: {:.2}%\nIris Graphics Total Memory: {:.2} GB\nIris Graphics Used Memory: {:.2} GB",
        gb.load_percent, gb.total_gb, gb.used_gb
    )
}
