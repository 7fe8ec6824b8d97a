use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use host_telemetry::error::{Error, Result};
use host_telemetry::memory::MemoryUsage;
use host_telemetry::network::{NetworkCounterSample, NicTable};
use host_telemetry::power::PowerReading;
use host_telemetry::traits::SensorAdapter;
use parking_lot::Mutex;

use super::super::GIB;

/// What goes wrong on a scripted tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Error,
    Panic,
}

/// Sensor adapter that replays a fixed script
///
/// Network counters are served in order; once the script runs out the last sample
/// repeats. Ticks are counted by `read_power`, the first read of every tick.
pub struct ScriptedSensors {
    counters: Mutex<VecDeque<NetworkCounterSample>>,
    last_counters: Mutex<NetworkCounterSample>,
    nic_table: NicTable,
    power: Option<PowerReading>,
    frequency: Option<f64>,
    memory: MemoryUsage,
    failures: HashMap<usize, Failure>,
    read_delay: Duration,
    ticks: AtomicUsize,
    frequency_reads: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedSensors {
    pub fn new() -> Self {
        Self {
            counters: Mutex::new(VecDeque::new()),
            last_counters: Mutex::new(NetworkCounterSample::default()),
            nic_table: NicTable::new(),
            power: Some(PowerReading::new(true, Some(80.0))),
            frequency: Some(2.4),
            memory: MemoryUsage::new(16 * GIB, 6 * GIB, 10 * GIB),
            failures: HashMap::new(),
            read_delay: Duration::ZERO,
            ticks: AtomicUsize::new(0),
            frequency_reads: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn with_counters(self, samples: &[(u64, u64)]) -> Self {
        self.counters.lock().extend(samples.iter().map(|&(sent, recv)| NetworkCounterSample::new(sent, recv)));
        self
    }

    pub fn with_nic_table(mut self, table: NicTable) -> Self {
        self.nic_table = table;
        self
    }

    pub fn with_power(mut self, power: Option<PowerReading>) -> Self {
        self.power = power;
        self
    }

    pub fn with_frequency(mut self, ghz: Option<f64>) -> Self {
        self.frequency = ghz;
        self
    }

    pub fn with_memory(mut self, memory: MemoryUsage) -> Self {
        self.memory = memory;
        self
    }

    /// Makes the tick with the given zero-based index fail
    pub fn failing_on_tick(mut self, tick: usize, failure: Failure) -> Self {
        self.failures.insert(tick, failure);
        self
    }

    /// Blocks each tick's first read for `delay` of real time
    pub fn with_read_delay(mut self, delay: Duration) -> Self {
        self.read_delay = delay;
        self
    }

    /// Number of ticks that have started
    pub fn ticks(&self) -> usize {
        self.ticks.load(Ordering::SeqCst)
    }

    pub fn frequency_reads(&self) -> usize {
        self.frequency_reads.load(Ordering::SeqCst)
    }

    /// Highest number of ticks ever inside `read_power` at once
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl Default for ScriptedSensors {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorAdapter for ScriptedSensors {
    fn read_power(&self) -> Result<Option<PowerReading>> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);

        let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(in_flight, Ordering::SeqCst);
        if !self.read_delay.is_zero() {
            std::thread::sleep(self.read_delay);
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.failures.get(&tick) {
            Some(Failure::Error) => Err(Error::SensorUnavailable(format!("scripted failure on tick {tick}"))),
            Some(Failure::Panic) => panic!("scripted panic on tick {tick}"),
            None => Ok(self.power),
        }
    }

    fn read_cpu_frequency(&self) -> Result<Option<f64>> {
        self.frequency_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.frequency)
    }

    fn read_memory(&self) -> Result<MemoryUsage> {
        Ok(self.memory)
    }

    fn read_nic_table(&self) -> Result<NicTable> {
        Ok(self.nic_table.clone())
    }

    fn read_network_counters(&self) -> Result<NetworkCounterSample> {
        let mut last = self.last_counters.lock();
        if let Some(next) = self.counters.lock().pop_front() {
            *last = next;
        }
        Ok(*last)
    }
}
