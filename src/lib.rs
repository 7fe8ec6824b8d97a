//! Host Telemetry - periodic sampling of host power, CPU, memory and network state
//!
//! This crate samples a handful of host sensors on a fixed schedule, derives
//! human-readable metrics from them and hands the formatted text to a display sink.
//! A separate stopwatch reports how long monitoring has been running.
//!
//! # Features
//!
//! - **Power**: Power source, battery level and the combined thermal design power
//! - **CPU**: Frequency and estimated power draw at a user-chosen utilisation
//! - **Memory**: Total, used and remaining memory in gigabytes
//! - **Graphics**: Fixed placeholder load and memory figures
//! - **Network**: Traffic since the previous sample and a two-column interface table
//! - **Stopwatch**: Elapsed time since monitoring started
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use host_telemetry::prelude::*;
//! use host_telemetry::system::SysinfoSensors;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = MonitorConfig::default().with_cpu_target("50");
//!     let (mut telemetry, cpu_input) =
//!         Telemetry::from_config(&config, Arc::new(SysinfoSensors::new()), Arc::new(TracingSink))?;
//!
//!     telemetry.start().await?;
//!     tokio::time::sleep(Duration::from_secs(5)).await;
//!     cpu_input.set("80");
//!     tokio::time::sleep(Duration::from_secs(5)).await;
//!     telemetry.stop().await
//! }
//! ```
//!
//! # Error Handling
//!
//! Sensors that do not exist on the host are not errors; they are rendered as
//! unavailable. Unexpected sensor failures surface as [`Error`] from the adapter and
//! abort only the tick that hit them:
//!
//! ```rust
//! use host_telemetry::{Error, Result};
//!
//! fn read_counters() -> Result<u64> {
//!     Err(Error::SensorUnavailable("network counters".to_string()))
//! }
//!
//! assert!(read_counters().is_err());
//! ```
//!
//! # Thread Safety
//!
//! Sensor adapters and display sinks are shared between the sampling task and the
//! caller, so both traits require `Send + Sync`. A sampling tick runs on tokio's
//! blocking pool; ticks never overlap.

#![doc(html_root_url = "https://docs.rs/host-telemetry/0.1.0")]

// Public modules
pub mod battery;
pub mod config;
pub mod core;
pub mod cpu;
pub mod display;
pub mod error;
pub mod gpu;
pub mod memory;
pub mod monitor;
pub mod network;
pub mod power;
pub mod stopwatch;
pub mod system;
pub mod telemetry;
pub mod traits;

pub use error::{Error, Result};
pub use telemetry::Telemetry;

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::config::MonitorConfig;
    pub use crate::core::prelude::*;
    pub use crate::cpu::CpuTargetInput;
    pub use crate::display::{Field, MemorySink, TracingSink};
    pub use crate::memory::MemoryUsage;
    pub use crate::monitor::{MonitoringState, SamplingScheduler};
    pub use crate::network::{NetworkCounterSample, NicAddress, NicTable};
    pub use crate::power::PowerReading;
    pub use crate::stopwatch::Stopwatch;
    pub use crate::traits::Lifecycle;
    pub use crate::Error;
    pub use crate::Result;
    pub use crate::Telemetry;
}
