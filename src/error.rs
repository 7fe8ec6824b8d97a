//! Error types for host-telemetry operations
//!
//! Per-metric problems (a missing battery, a bad CPU target) are not errors at the
//! tick level; they are rendered in place of the metric. The variants here cover the
//! failures that abort a single tick or reject a configuration.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sensor unavailable: {0}")]
    SensorUnavailable(String),

    #[error("Invalid user input: {0}")]
    InvalidUserInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Background task failed: {0}")]
    TaskFailed(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn sensor_unavailable<S: Into<String>>(msg: S) -> Self {
        Error::SensorUnavailable(msg.into())
    }

    pub(crate) fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidUserInput(msg.into())
    }

    pub(crate) fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub(crate) fn task_failed<S: Into<String>>(msg: S) -> Self {
        Error::TaskFailed(msg.into())
    }
}

/// Result type for host-telemetry operations
pub type Result<T> = std::result::Result<T, Error>;
