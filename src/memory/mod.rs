//! Memory usage module
//!
//! Holds the raw memory counters read from the host and the gigabyte figures shown
//! on screen.
//!
//! The displayed "remaining" value is `total - used`. It is deliberately not the
//! OS-reported available figure, which also counts reclaimable memory; that raw
//! figure stays reachable through [`MemoryUsage::reclaimable_gb`].
//!
//! # Examples
//!
//! ```rust
//! use host_telemetry::memory::{memory_usage_gb, MemoryUsage};
//!
//! let gib = 1024 * 1024 * 1024;
//! let usage = MemoryUsage::new(16 * gib, 6 * gib, 9 * gib);
//! let gb = memory_usage_gb(&usage);
//! assert_eq!(gb.remaining_gb, 10.0);
//! ```

use serde::Serialize;

use crate::core::types::{bytes_to_gigabytes, ByteSize};

/// Raw memory counters, all in bytes
///
/// `used + available` is not expected to equal `total`; each value is reported by
/// the host independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MemoryUsage {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
}

impl MemoryUsage {
    pub fn new(total_bytes: u64, used_bytes: u64, available_bytes: u64) -> Self {
        Self { total_bytes, used_bytes, available_bytes }
    }

    /// The host's available (reclaimable) memory in gigabytes
    pub fn reclaimable_gb(&self) -> f64 {
        bytes_to_gigabytes(self.available_bytes)
    }
}

/// Memory figures as displayed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MemoryUsageGb {
    pub total_gb: f64,
    pub used_gb: f64,
    pub remaining_gb: f64,
}

/// Converts the counters to gigabytes, deriving remaining as `total - used`
pub fn memory_usage_gb(usage: &MemoryUsage) -> MemoryUsageGb {
    let total = ByteSize::new(usage.total_bytes);
    let used = ByteSize::new(usage.used_bytes);

    MemoryUsageGb { total_gb: total.as_gb(), used_gb: used.as_gb(), remaining_gb: (total - used).as_gb() }
}

/// Renders the memory field
pub fn format_memory(gb: &MemoryUsageGb) -> String {
    format!(
        "Total Memory: {:.2} GB\nUsed Memory: {:.2} GB\nRemaining Memory: {:.2} GB",
        gb.total_gb, gb.used_gb, gb.remaining_gb
    )
}
