#![allow(dead_code)]

pub mod mocks;

pub use builders::nic::TestNicTableBuilder;
pub use mocks::sensors::{Failure, ScriptedSensors};

pub const GIB: u64 = 1024 * 1024 * 1024;
