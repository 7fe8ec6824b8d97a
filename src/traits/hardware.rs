use crate::display::Field;
use crate::error::Result;
use crate::memory::MemoryUsage;
use crate::network::{NetworkCounterSample, NicTable};
use crate::power::PowerReading;
use async_trait::async_trait;

/// Read-only access to the host's sensors
///
/// Every call is a point-in-time snapshot with no caching. A sensor that does not
/// exist on this host is reported as `Ok(None)`; `Err` is reserved for unexpected
/// failures and aborts the tick that issued the read.
///
/// # Examples
///
/// ```rust
/// use host_telemetry::prelude::*;
///
/// struct Desktop;
///
/// impl SensorAdapter for Desktop {
///     fn read_power(&self) -> Result<Option<PowerReading>> { Ok(None) }
///     fn read_cpu_frequency(&self) -> Result<Option<f64>> { Ok(Some(3.2)) }
///     fn read_memory(&self) -> Result<MemoryUsage> { Ok(MemoryUsage::new(16, 8, 8)) }
///     fn read_nic_table(&self) -> Result<NicTable> { Ok(NicTable::new()) }
///     fn read_network_counters(&self) -> Result<NetworkCounterSample> {
///         Ok(NetworkCounterSample::default())
///     }
/// }
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait SensorAdapter: Send + Sync {
    /// Battery state, `None` when the host has no battery
    fn read_power(&self) -> Result<Option<PowerReading>>;

    /// Current CPU frequency in GHz, `None` when it cannot be read
    fn read_cpu_frequency(&self) -> Result<Option<f64>>;

    /// System memory counters
    fn read_memory(&self) -> Result<MemoryUsage>;

    /// Addresses of every network interface, keyed by interface name
    fn read_nic_table(&self) -> Result<NicTable>;

    /// Cumulative bytes sent and received across all interfaces
    fn read_network_counters(&self) -> Result<NetworkCounterSample>;
}

/// Receiver of fully formatted metric text
///
/// The sink decides how (and whether) to render; the scheduler only hands over text
/// keyed by field and asks for a re-layout once per tick.
pub trait DisplaySink: Send + Sync {
    /// Replace the text shown for `field`
    fn emit(&self, field: Field, text: &str);

    /// Called once after every sampling tick has emitted all of its fields
    fn relayout(&self) {}
}

/// Source of the user's desired CPU utilisation, read fresh on every tick
///
/// The value is free-form text; parsing and range validation happen on the
/// consumer side each time it is read.
pub trait CpuTargetSource: Send + Sync {
    fn cpu_target(&self) -> String;
}

impl<F> CpuTargetSource for F
where
    F: Fn() -> String + Send + Sync,
{
    fn cpu_target(&self) -> String {
        self()
    }
}

/// Start/stop lifecycle shared by the repeating tasks
///
/// Both operations are idempotent: starting a running task restarts it with fresh
/// state, stopping a stopped task does nothing.
#[async_trait]
pub trait Lifecycle: Send {
    /// Begin (or restart) the repeating task
    async fn start(&mut self) -> Result<()>;

    /// Stop the repeating task once the in-flight tick, if any, has completed
    async fn stop(&mut self) -> Result<()>;

    /// Whether the task is currently scheduled
    fn is_running(&self) -> bool;
}
