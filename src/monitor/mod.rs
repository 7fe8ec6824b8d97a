//! # Sampling Scheduler
//!
//! The sampling loop reads every sensor once per tick, derives the display values,
//! hands them to the [`DisplaySink`] and asks it to re-layout.
//!
//! ## Failure handling
//!
//! * A missing sensor (`Ok(None)`) is rendered as "unavailable" in its field.
//! * A rejected CPU target replaces only the CPU field with an error message.
//! * A negative network delta is reported as-is and logged.
//! * Any `Err` from the sensors, or a panic inside the tick, ends that tick early.
//!   It is logged and the next tick is scheduled as usual.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use host_telemetry::display::TracingSink;
//! use host_telemetry::monitor::SamplingScheduler;
//! use host_telemetry::system::SysinfoSensors;
//! use host_telemetry::traits::Lifecycle;
//!
//! #[tokio::main]
//! async fn main() -> host_telemetry::Result<()> {
//!     let mut scheduler = SamplingScheduler::new(
//!         Arc::new(SysinfoSensors::new()),
//!         Arc::new(|| "50".to_string()),
//!         Arc::new(TracingSink),
//!         Duration::from_secs(2),
//!     );
//!
//!     scheduler.start().await?;
//!     tokio::time::sleep(Duration::from_secs(10)).await;
//!     scheduler.stop().await
//! }
//! ```

pub mod ticker;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use crate::cpu::{cpu_performance, format_cpu, format_cpu_error, parse_cpu_target, CpuPerformance};
use crate::display::Field;
use crate::error::Result;
use crate::gpu::{format_graphics, graphics_usage_gb, GraphicsUsage, GraphicsUsageGb};
use crate::memory::{format_memory, memory_usage_gb, MemoryUsageGb};
use crate::network::{format_network, nic_columns, DeltaTracker, NetworkDelta, NicColumns};
use crate::power::{format_power, thermal_design_power, PowerReading};
use crate::traits::{CpuTargetSource, DisplaySink, Lifecycle, SensorAdapter};

use self::ticker::RepeatingTask;

/// Lifecycle of the sampling loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MonitoringState {
    #[default]
    Stopped,
    Running,
}

/// Outcome of the CPU slice of a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CpuOutcome {
    Sampled(CpuPerformance),
    Rejected(String),
}

/// Everything a completed tick derived and emitted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickReport {
    pub power: Option<PowerReading>,
    pub tdp_watts: f64,
    pub cpu: CpuOutcome,
    pub memory: MemoryUsageGb,
    pub graphics: GraphicsUsageGb,
    pub network: NetworkDelta,
    pub nic: NicColumns,
}

/// One sampling pass over all sensors
///
/// Owns the [`DeltaTracker`]; nothing else keeps sensor state between ticks.
pub struct Sampler {
    sensors: Arc<dyn SensorAdapter>,
    cpu_target: Arc<dyn CpuTargetSource>,
    sink: Arc<dyn DisplaySink>,
    tracker: DeltaTracker,
}

impl Sampler {
    pub fn new(
        sensors: Arc<dyn SensorAdapter>,
        cpu_target: Arc<dyn CpuTargetSource>,
        sink: Arc<dyn DisplaySink>,
    ) -> Self {
        Self { sensors, cpu_target, sink, tracker: DeltaTracker::new() }
    }

    /// Clears the retained network sample
    pub fn reset(&mut self) {
        self.tracker.reset();
    }

    /// Runs one tick, emitting each field as soon as it is ready
    ///
    /// Returns early with the sensor error if a read fails unexpectedly; fields
    /// emitted before the failure keep their new values.
    pub fn tick(&mut self) -> Result<TickReport> {
        let power = self.sensors.read_power()?;
        let tdp_watts = thermal_design_power();
        self.sink.emit(Field::Power, &format_power(power.as_ref(), tdp_watts));

        let cpu = self.sample_cpu()?;
        let cpu_text = match &cpu {
            CpuOutcome::Sampled(perf) => format_cpu(perf),
            CpuOutcome::Rejected(message) => message.clone(),
        };
        self.sink.emit(Field::Cpu, &cpu_text);

        let memory = memory_usage_gb(&self.sensors.read_memory()?);
        self.sink.emit(Field::Memory, &format_memory(&memory));

        let graphics = graphics_usage_gb(&GraphicsUsage::PLACEHOLDER);
        self.sink.emit(Field::Graphics, &format_graphics(&graphics));

        let network = self.tracker.tick(self.sensors.read_network_counters()?);
        self.sink.emit(Field::Network, &format_network(&network));

        let nic = nic_columns(&self.sensors.read_nic_table()?);
        self.sink.emit(Field::NicLeft, &nic.left);
        self.sink.emit(Field::NicRight, &nic.right);

        self.sink.relayout();

        Ok(TickReport { power, tdp_watts, cpu, memory, graphics, network, nic })
    }

    fn sample_cpu(&self) -> Result<CpuOutcome> {
        let text = self.cpu_target.cpu_target();
        match parse_cpu_target(&text) {
            Ok(target) => {
                let frequency = self.sensors.read_cpu_frequency()?;
                Ok(CpuOutcome::Sampled(cpu_performance(target, frequency)))
            },
            Err(err) => {
                warn!(input = %text, error = %err, "rejected CPU target");
                Ok(CpuOutcome::Rejected(format_cpu_error(&err)))
            },
        }
    }
}

/// Runs one tick on the blocking pool and contains whatever goes wrong in it
#[instrument(name = "sampling_tick", skip_all)]
async fn run_tick(sampler: Arc<Mutex<Sampler>>) {
    match tokio::task::spawn_blocking(move || sampler.lock().tick()).await {
        Ok(Ok(report)) => debug!(network = ?report.network, "tick complete"),
        Ok(Err(err)) => error!(error = %err, "sampling tick aborted"),
        Err(err) => error!(error = %err, "sampling tick panicked"),
    }
}

/// Drives the [`Sampler`] at a fixed interval between explicit start and stop
pub struct SamplingScheduler {
    sampler: Arc<Mutex<Sampler>>,
    interval: Duration,
    state: MonitoringState,
    task: Option<RepeatingTask>,
}

impl SamplingScheduler {
    pub fn new(
        sensors: Arc<dyn SensorAdapter>,
        cpu_target: Arc<dyn CpuTargetSource>,
        sink: Arc<dyn DisplaySink>,
        interval: Duration,
    ) -> Self {
        Self {
            sampler: Arc::new(Mutex::new(Sampler::new(sensors, cpu_target, sink))),
            interval,
            state: MonitoringState::Stopped,
            task: None,
        }
    }

    pub fn state(&self) -> MonitoringState {
        self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[async_trait]
impl Lifecycle for SamplingScheduler {
    async fn start(&mut self) -> Result<()> {
        if let Some(task) = self.task.take() {
            debug!("restarting sampling scheduler");
            task.stop().await?;
        }

        self.sampler.lock().reset();

        let sampler = Arc::clone(&self.sampler);
        self.task = Some(RepeatingTask::spawn("sampling", self.interval, move || run_tick(Arc::clone(&sampler))));
        self.state = MonitoringState::Running;

        info!(interval_ms = self.interval.as_millis() as u64, "sampling scheduler started");
        Ok(())
    }

    async fn stop(&mut self) -> Result<()> {
        let Some(task) = self.task.take() else {
            return Ok(());
        };
        self.state = MonitoringState::Stopped;
        info!("sampling scheduler stopped");
        task.stop().await
    }

    fn is_running(&self) -> bool {
        self.state == MonitoringState::Running
    }
}
