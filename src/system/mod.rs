//! Host sensor adapter
//!
//! [`SysinfoSensors`] implements [`SensorAdapter`] on top of the `sysinfo` crate for
//! memory, CPU frequency and network data, and reads the battery from the Linux
//! power-supply class.

use std::net::IpAddr;
use std::path::PathBuf;

use parking_lot::Mutex;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, Networks, RefreshKind, System};
use tracing::debug;

use crate::battery::{read_power_supply, POWER_SUPPLY_ROOT};
use crate::error::{Error, Result};
use crate::memory::MemoryUsage;
use crate::network::{NetworkCounterSample, NicAddress, NicTable};
use crate::power::PowerReading;
use crate::traits::SensorAdapter;

/// Averages the per-core frequencies (MHz) and converts to GHz
///
/// Cores reporting zero are ignored; `None` if none report a value.
pub fn average_frequency_ghz<I>(frequencies_mhz: I) -> Option<f64>
where
    I: IntoIterator<Item = u64>,
{
    let (sum, count) = frequencies_mhz
        .into_iter()
        .filter(|mhz| *mhz > 0)
        .fold((0u64, 0u64), |(sum, count), mhz| (sum + mhz, count + 1));

    (count > 0).then(|| sum as f64 / count as f64 / 1000.0)
}

/// Sensor adapter backed by `sysinfo`
pub struct SysinfoSensors {
    system: Mutex<System>,
    networks: Mutex<Networks>,
    power_supply_root: PathBuf,
}

impl SysinfoSensors {
    pub fn new() -> Self {
        let system = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::nothing().with_frequency())
                .with_memory(MemoryRefreshKind::everything()),
        );

        Self {
            system: Mutex::new(system),
            networks: Mutex::new(Networks::new_with_refreshed_list()),
            power_supply_root: PathBuf::from(POWER_SUPPLY_ROOT),
        }
    }

    /// Reads the battery from a different power-supply directory
    pub fn with_power_supply_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.power_supply_root = root.into();
        self
    }
}

impl Default for SysinfoSensors {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorAdapter for SysinfoSensors {
    fn read_power(&self) -> Result<Option<PowerReading>> {
        read_power_supply(&self.power_supply_root)
    }

    fn read_cpu_frequency(&self) -> Result<Option<f64>> {
        let mut system = self.system.lock();
        system.refresh_cpu_frequency();
        Ok(average_frequency_ghz(system.cpus().iter().map(|cpu| cpu.frequency())))
    }

    fn read_memory(&self) -> Result<MemoryUsage> {
        let mut system = self.system.lock();
        system.refresh_memory();

        let total = system.total_memory();
        if total == 0 {
            return Err(Error::sensor_unavailable("memory counters reported zero total"));
        }
        Ok(MemoryUsage::new(total, system.used_memory(), system.available_memory()))
    }

    fn read_nic_table(&self) -> Result<NicTable> {
        let mut networks = self.networks.lock();
        networks.refresh(true);

        let mut names: Vec<_> = networks.list().keys().cloned().collect();
        names.sort();

        let mut table = NicTable::new();
        for name in names {
            let Some(data) = networks.list().get(&name) else {
                continue;
            };

            let mut addresses: Vec<NicAddress> = data
                .ip_networks()
                .iter()
                .map(|net| match net.addr {
                    IpAddr::V4(v4) => NicAddress::ipv4(v4, net.prefix),
                    IpAddr::V6(v6) => NicAddress::ipv6(v6, net.prefix),
                })
                .collect();
            addresses.sort_by_key(|addr| addr.family as u8);
            addresses.push(NicAddress::link(data.mac_address().to_string()));

            table.insert(name, addresses);
        }

        debug!(interfaces = table.len(), "read NIC table");
        Ok(table)
    }

    fn read_network_counters(&self) -> Result<NetworkCounterSample> {
        let mut networks = self.networks.lock();
        networks.refresh(true);

        let sample = networks.list().values().fold(NetworkCounterSample::default(), |acc, data| {
            NetworkCounterSample::new(
                acc.sent_bytes.saturating_add(data.total_transmitted()),
                acc.recv_bytes.saturating_add(data.total_received()),
            )
        });
        Ok(sample)
    }
}
