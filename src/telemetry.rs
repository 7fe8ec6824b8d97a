//! Top-level monitor
//!
//! [`Telemetry`] owns the sampling scheduler and the stopwatch and starts and stops
//! them together. Their ticks are independent; only the lifecycle is shared.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::MonitorConfig;
use crate::cpu::CpuTargetInput;
use crate::error::Result;
use crate::monitor::{MonitoringState, SamplingScheduler};
use crate::stopwatch::Stopwatch;
use crate::traits::{CpuTargetSource, DisplaySink, Lifecycle, SensorAdapter};

pub struct Telemetry {
    scheduler: SamplingScheduler,
    stopwatch: Stopwatch,
}

impl Telemetry {
    /// Builds a monitor that reads the CPU target from `cpu_target`
    pub fn new(
        config: &MonitorConfig,
        sensors: Arc<dyn SensorAdapter>,
        cpu_target: Arc<dyn CpuTargetSource>,
        sink: Arc<dyn DisplaySink>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            scheduler: SamplingScheduler::new(sensors, cpu_target, Arc::clone(&sink), config.sample_interval()),
            stopwatch: Stopwatch::with_interval(sink, config.stopwatch_interval()),
        })
    }

    /// Builds a monitor whose CPU target starts as `config.cpu_target`
    ///
    /// The returned [`CpuTargetInput`] updates the target while the monitor runs.
    pub fn from_config(
        config: &MonitorConfig,
        sensors: Arc<dyn SensorAdapter>,
        sink: Arc<dyn DisplaySink>,
    ) -> Result<(Self, CpuTargetInput)> {
        let input = CpuTargetInput::new(config.cpu_target.clone());
        let telemetry = Self::new(config, sensors, Arc::new(input.clone()), sink)?;
        Ok((telemetry, input))
    }

    pub fn state(&self) -> MonitoringState {
        self.scheduler.state()
    }

    pub fn scheduler(&self) -> &SamplingScheduler {
        &self.scheduler
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }
}

#[async_trait]
impl Lifecycle for Telemetry {
    /// Starts, or restarts, both loops
    async fn start(&mut self) -> Result<()> {
        self.scheduler.start().await?;
        self.stopwatch.start().await?;
        info!("monitoring started");
        Ok(())
    }

    /// Stops both loops; each waits for its in-flight tick
    async fn stop(&mut self) -> Result<()> {
        let (scheduler, stopwatch) = futures::join!(self.scheduler.stop(), self.stopwatch.stop());
        info!("monitoring stopped");
        scheduler.and(stopwatch)
    }

    fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }
}
