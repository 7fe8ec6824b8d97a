// Traits module
//
// Seams between the sampling core and its collaborators: the platform sensors,
// the display, the user's CPU target input and the start/stop lifecycle.

pub mod hardware;

pub use hardware::{CpuTargetSource, DisplaySink, Lifecycle, SensorAdapter};

#[cfg(test)]
pub use hardware::MockSensorAdapter;
