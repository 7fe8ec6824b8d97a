//! Display boundary
//!
//! Formatted text leaves the crate through a [`DisplaySink`], keyed by [`Field`].
//! Rendering is the sink's business; two sinks ship with the crate:
//!
//! * [`MemorySink`] keeps the most recent values per field, for headless consumers
//!   and tests.
//! * [`TracingSink`] forwards each value to `tracing` at info level.

use std::collections::{HashMap, VecDeque};

use parking_lot::Mutex;
use serde::Serialize;
use tracing::info;

use crate::traits::DisplaySink;

/// Display slots the monitor writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    Power,
    Cpu,
    Memory,
    Graphics,
    Network,
    NicLeft,
    NicRight,
    Stopwatch,
}

impl Field {
    /// Every field, in display order
    pub const ALL: [Field; 8] = [
        Field::Power,
        Field::Cpu,
        Field::Memory,
        Field::Graphics,
        Field::Network,
        Field::NicLeft,
        Field::NicRight,
        Field::Stopwatch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Power => "power",
            Field::Cpu => "cpu",
            Field::Memory => "memory",
            Field::Graphics => "graphics",
            Field::Network => "network",
            Field::NicLeft => "nic-left",
            Field::NicRight => "nic-right",
            Field::Stopwatch => "stopwatch",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values kept per field by [`MemorySink::new`]
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

#[derive(Debug, Default)]
struct Recorded {
    history: HashMap<Field, VecDeque<String>>,
    relayouts: usize,
}

/// Sink that records what it is given
///
/// Each field keeps at most `limit` values; older ones are dropped first, so a
/// long-running monitor holds a bounded amount of text.
#[derive(Debug)]
pub struct MemorySink {
    inner: Mutex<Recorded>,
    limit: usize,
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySink {
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Keeps the last `limit` values per field (at least one)
    pub fn with_history_limit(limit: usize) -> Self {
        Self { inner: Mutex::new(Recorded::default()), limit: limit.max(1) }
    }

    /// Most recent text emitted for `field`
    pub fn latest(&self, field: Field) -> Option<String> {
        self.inner.lock().history.get(&field).and_then(|values| values.back().cloned())
    }

    /// Retained text for `field`, oldest first
    pub fn history(&self, field: Field) -> Vec<String> {
        self.inner.lock().history.get(&field).map(|values| values.iter().cloned().collect()).unwrap_or_default()
    }

    /// Number of re-layout requests received
    pub fn relayout_count(&self) -> usize {
        self.inner.lock().relayouts
    }
}

impl DisplaySink for MemorySink {
    fn emit(&self, field: Field, text: &str) {
        let mut inner = self.inner.lock();
        let values = inner.history.entry(field).or_default();
        if values.len() == self.limit {
            values.pop_front();
        }
        values.push_back(text.to_string());
    }

    fn relayout(&self) {
        self.inner.lock().relayouts += 1;
    }
}

/// Sink that logs each field through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DisplaySink for TracingSink {
    fn emit(&self, field: Field, text: &str) {
        info!(target: "host_telemetry::display", field = field.as_str(), "\n{text}");
    }
}
