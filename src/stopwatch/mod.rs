//! Elapsed-time stopwatch
//!
//! Runs on its own repeating task, separate from the sampling scheduler. The two are
//! started and stopped together but are not synchronised, so their ticks may drift
//! relative to each other.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::info;

use crate::config::DEFAULT_STOPWATCH_INTERVAL_MS;
use crate::display::Field;
use crate::error::Result;
use crate::monitor::ticker::RepeatingTask;
use crate::traits::{DisplaySink, Lifecycle};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Formats a duration as a `HH:MM:SS` clock reading
///
/// Like a wall clock, the hour wraps after 23:59:59.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs() % SECONDS_PER_DAY;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Renders the stopwatch field
pub fn format_stopwatch(elapsed: Duration) -> String {
    format!("Elapsed Time: {}", format_elapsed(elapsed))
}

/// Whether the stopwatch is counting, and since when
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StopwatchState {
    start_instant: Option<Instant>,
}

impl StopwatchState {
    pub fn is_running(&self) -> bool {
        self.start_instant.is_some()
    }

    pub fn start_instant(&self) -> Option<Instant> {
        self.start_instant
    }

    /// Enters the running state, resetting the start to `now`
    pub fn start(&mut self, now: Instant) {
        self.start_instant = Some(now);
    }

    /// Returns to idle
    pub fn stop(&mut self) {
        self.start_instant = None;
    }

    /// Time since start, `None` while idle
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.start_instant.map(|start| now.saturating_duration_since(start))
    }
}

/// Repeating elapsed-time display
pub struct Stopwatch {
    sink: Arc<dyn DisplaySink>,
    interval: Duration,
    state: StopwatchState,
    task: Option<RepeatingTask>,
}

impl Stopwatch {
    pub fn new(sink: Arc<dyn DisplaySink>) -> Self {
        Self::with_interval(sink, Duration::from_millis(DEFAULT_STOPWATCH_INTERVAL_MS))
    }

    pub fn with_interval(sink: Arc<dyn DisplaySink>, interval: Duration) -> Self {
        Self { sink, interval, state: StopwatchState::default(), task: None }
    }

    pub fn state(&self) -> StopwatchState {
        self.state
    }

    /// Time since the last start, `None` while idle
    pub fn elapsed(&self) -> Option<Duration> {
        self.state.elapsed(Instant::now())
    }
}

#[async_trait]
impl Lifecycle for Stopwatch {
    async fn start(&mut self) -> Result<()> {
        if let Some(task) = self.task.take() {
            task.stop().await?;
        }

        let start = Instant::now();
        self.state.start(start);

        let sink = Arc::clone(&self.sink);
        self.task = Some(RepeatingTask::spawn("stopwatch", self.interval, move || {
            sink.emit(Field::Stopwatch, &format_stopwatch(start.elapsed()));
            std::future::ready(())
        }));

        info!("stopwatch started");
        Ok(())
    }

    async fn stop(&mut self) -> Result<()> {
        let Some(task) = self.task.take() else {
            return Ok(());
        };
        self.state.stop();
        info!("stopwatch stopped");
        task.stop().await
    }

    fn is_running(&self) -> bool {
        self.state.is_running()
    }
}
