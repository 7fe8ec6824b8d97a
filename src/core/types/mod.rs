//! # Core Types Module
//!
//! Unit-carrying value types shared by the metric modules.
//!
//! ## Key Types
//!
//! * `ByteSize` - A byte count with binary gigabyte (GiB) conversions
//! * `Percentage` - A value validated to lie within 0.0 and 100.0
//!
//! ## Example
//!
//! ```rust
//! use host_telemetry::core::types::ByteSize;
//!
//! let size = ByteSize::new(1024 * 1024 * 1024);
//! assert_eq!(size.as_gb(), 1.0);
//! ```

use serde::Serialize;

/// Number of bytes in one binary gigabyte (1024^3).
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Converts a byte count to binary gigabytes.
///
/// Plain IEEE-754 division; no rounding is applied here, only at display time.
pub fn bytes_to_gigabytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

/// Converts a signed byte count (such as a counter delta) to binary gigabytes.
pub fn signed_bytes_to_gigabytes(bytes: i64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

/// Converts binary gigabytes back to a byte count, rounding to the nearest byte.
///
/// Negative inputs saturate to zero.
pub fn gigabytes_to_bytes(gigabytes: f64) -> u64 {
    (gigabytes * BYTES_PER_GB).round() as u64
}

/// Represents a percentage value between 0.0 and 100.0
///
/// # Examples
///
/// ```rust
/// use host_telemetry::core::types::Percentage;
///
/// let p = Percentage::new(75.0).unwrap();
/// assert_eq!(p.as_f64(), 75.0);
///
/// // Values outside 0-100 range return None
/// assert!(Percentage::new(150.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Creates a new Percentage from a value between 0 and 100
    /// Returns None if the value is outside the valid range (NaN included)
    pub fn new(value: f64) -> Option<Self> {
        if (0.0..=100.0).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the percentage value as a float
    pub fn as_f64(&self) -> f64 {
        self.0
    }

    /// Returns the value as a fraction in 0.0..=1.0
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Mul<f64> for Percentage {
    type Output = f64;

    fn mul(self, rhs: f64) -> Self::Output {
        self.as_fraction() * rhs
    }
}

/// Represents a size in bytes with convenient conversion methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct ByteSize(pub u64);

impl ByteSize {
    /// Creates a new ByteSize instance from the given number of bytes
    pub fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Returns the size in bytes
    pub fn as_bytes(&self) -> u64 {
        self.0
    }

    /// Returns the size in gigabytes
    pub fn as_gb(&self) -> f64 {
        bytes_to_gigabytes(self.0)
    }
}

impl std::ops::Sub for ByteSize {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}
