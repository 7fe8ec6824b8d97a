// Core modules
pub mod types;

/// Core prelude module that re-exports commonly used types and traits
pub mod prelude {
    pub use super::types::{bytes_to_gigabytes, gigabytes_to_bytes, ByteSize, Percentage};
    pub use crate::traits::{CpuTargetSource, DisplaySink, SensorAdapter};
}
