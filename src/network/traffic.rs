use serde::Serialize;
use tracing::warn;

use crate::core::types::signed_bytes_to_gigabytes;

/// Cumulative traffic counters as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NetworkCounterSample {
    /// Total bytes sent
    pub sent_bytes: u64,
    /// Total bytes received
    pub recv_bytes: u64,
}

impl NetworkCounterSample {
    pub fn new(sent_bytes: u64, recv_bytes: u64) -> Self {
        Self { sent_bytes, recv_bytes }
    }
}

/// Difference between two consecutive counter samples
///
/// Negative when a counter went backwards, e.g. after an interface reset. The raw
/// signed value is kept so regressions stay visible downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NetworkDelta {
    pub sent_bytes: i64,
    pub recv_bytes: i64,
}

impl NetworkDelta {
    pub fn new(sent_bytes: i64, recv_bytes: i64) -> Self {
        Self { sent_bytes, recv_bytes }
    }

    /// Whether either counter decreased
    pub fn is_regression(&self) -> bool {
        self.sent_bytes < 0 || self.recv_bytes < 0
    }

    /// Sent delta in gigabytes
    pub fn sent_gb(&self) -> f64 {
        signed_bytes_to_gigabytes(self.sent_bytes)
    }

    /// Received delta in gigabytes
    pub fn recv_gb(&self) -> f64 {
        signed_bytes_to_gigabytes(self.recv_bytes)
    }
}

/// Signed difference of two unsigned counters
fn counter_delta(current: u64, previous: u64) -> i64 {
    current.wrapping_sub(previous) as i64
}

/// Retains the previous counter sample and turns each new one into a delta
///
/// The tracker starts from `{0, 0}`, so the first delta after a reset equals the
/// first absolute reading.
#[derive(Debug, Clone, Default)]
pub struct DeltaTracker {
    previous: NetworkCounterSample,
}

impl DeltaTracker {
    /// Creates a tracker whose previous sample is zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the retained sample
    pub fn reset(&mut self) {
        self.previous = NetworkCounterSample::default();
    }

    /// The sample the next delta will be measured against
    pub fn previous(&self) -> NetworkCounterSample {
        self.previous
    }

    /// Computes `current - previous` and retains `current`
    pub fn tick(&mut self, current: NetworkCounterSample) -> NetworkDelta {
        let delta = NetworkDelta::new(
            counter_delta(current.sent_bytes, self.previous.sent_bytes),
            counter_delta(current.recv_bytes, self.previous.recv_bytes),
        );

        if delta.is_regression() {
            warn!(
                previous = ?self.previous,
                current = ?current,
                "network counters went backwards, reporting negative delta"
            );
        }

        self.previous = current;
        delta
    }
}

/// Renders the network field
///
/// Six decimals, since a delta over a couple of seconds is usually well below a
/// megabyte.
pub fn format_network(delta: &NetworkDelta) -> String {
    format!("Network Traffic: Sent = {:.6} GB, Received = {:.6} GB", delta.sent_gb(), delta.recv_gb())
}
