use std::net::{Ipv4Addr, Ipv6Addr};

use host_telemetry::network::{NicAddress, NicTable};

/// Builder for interface tables with predictable addresses
pub struct TestNicTableBuilder {
    table: NicTable,
}

impl TestNicTableBuilder {
    pub fn new() -> Self {
        Self { table: NicTable::new() }
    }

    /// Adds a loopback interface with a single IPv4 address
    pub fn with_loopback(mut self) -> Self {
        self.table.insert("lo", vec![NicAddress::ipv4(Ipv4Addr::LOCALHOST, 8)]);
        self
    }

    /// Adds an interface with IPv4, IPv6 and link addresses
    pub fn with_ethernet(mut self, name: &str, octet: u8) -> Self {
        self.table.insert(
            name,
            vec![
                NicAddress::ipv4(Ipv4Addr::new(192, 168, 1, octet), 24),
                NicAddress::ipv6(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, u16::from(octet)), 64),
                NicAddress::link(format!("02:00:00:00:00:{octet:02x}")),
            ],
        );
        self
    }

    /// Adds an interface with only a hardware address
    pub fn with_link_only(mut self, name: &str) -> Self {
        self.table.insert(name, vec![NicAddress::link("02:00:00:00:ff:ff")]);
        self
    }

    pub fn build(self) -> NicTable {
        self.table
    }
}

impl Default for TestNicTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
