//! Monitor configuration
//!
//! ```rust
//! use host_telemetry::config::MonitorConfig;
//!
//! let config = MonitorConfig::from_json(r#"{ "sample_interval_ms": 500, "cpu_target": "40" }"#).unwrap();
//! assert_eq!(config.sample_interval().as_millis(), 500);
//! assert_eq!(config.stopwatch_interval().as_millis(), 1000);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default gap between sampling ticks
pub const DEFAULT_SAMPLE_INTERVAL_MS: u64 = 2000;
/// Default gap between stopwatch ticks
pub const DEFAULT_STOPWATCH_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Milliseconds between the end of one sampling tick and the start of the next
    pub sample_interval_ms: u64,
    /// Milliseconds between stopwatch updates
    pub stopwatch_interval_ms: u64,
    /// Initial desired CPU utilisation text
    pub cpu_target: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
            stopwatch_interval_ms: DEFAULT_STOPWATCH_INTERVAL_MS,
            cpu_target: String::new(),
        }
    }
}

impl MonitorConfig {
    /// Parses a JSON document; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_sample_interval(mut self, interval: Duration) -> Self {
        self.sample_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_stopwatch_interval(mut self, interval: Duration) -> Self {
        self.stopwatch_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_cpu_target(mut self, target: impl Into<String>) -> Self {
        self.cpu_target = target.into();
        self
    }

    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }

    pub fn stopwatch_interval(&self) -> Duration {
        Duration::from_millis(self.stopwatch_interval_ms)
    }

    /// Rejects intervals that would make a task spin
    pub fn validate(&self) -> Result<()> {
        if self.sample_interval_ms == 0 {
            return Err(Error::config("sample_interval_ms must be greater than zero"));
        }
        if self.stopwatch_interval_ms == 0 {
            return Err(Error::config("stopwatch_interval_ms must be greater than zero"));
        }
        Ok(())
    }
}
