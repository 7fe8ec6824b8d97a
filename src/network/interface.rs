use std::net::{Ipv4Addr, Ipv6Addr};

use serde::Serialize;

/// Address family of a network interface address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddressFamily {
    /// IPv4 address
    Ipv4,
    /// IPv6 address
    Ipv6,
    /// Link-layer (hardware) address
    Link,
}

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressFamily::Ipv4 => write!(f, "IPv4"),
            AddressFamily::Ipv6 => write!(f, "IPv6"),
            AddressFamily::Link => write!(f, "Link"),
        }
    }
}

/// One address bound to an interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NicAddress {
    pub family: AddressFamily,
    pub address: String,
    pub netmask: Option<String>,
    pub broadcast: Option<String>,
}

impl NicAddress {
    pub fn new(
        family: AddressFamily,
        address: impl Into<String>,
        netmask: Option<String>,
        broadcast: Option<String>,
    ) -> Self {
        Self { family, address: address.into(), netmask, broadcast }
    }

    /// IPv4 address with netmask and broadcast derived from the prefix length
    ///
    /// Host routes (/31, /32) carry no broadcast address.
    pub fn ipv4(addr: Ipv4Addr, prefix: u8) -> Self {
        let prefix = prefix.min(32);
        let mask = u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0);
        let broadcast = (prefix < 31).then(|| Ipv4Addr::from(u32::from(addr) | !mask).to_string());

        Self::new(AddressFamily::Ipv4, addr.to_string(), Some(Ipv4Addr::from(mask).to_string()), broadcast)
    }

    /// IPv6 address with the netmask derived from the prefix length
    pub fn ipv6(addr: Ipv6Addr, prefix: u8) -> Self {
        let prefix = prefix.min(128);
        let mask = u128::MAX.checked_shl(128 - u32::from(prefix)).unwrap_or(0);

        Self::new(AddressFamily::Ipv6, addr.to_string(), Some(Ipv6Addr::from(mask).to_string()), None)
    }

    /// Hardware address
    pub fn link(mac: impl Into<String>) -> Self {
        Self::new(AddressFamily::Link, mac, None, None)
    }
}

/// An interface and its addresses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NicInterface {
    pub name: String,
    pub addresses: Vec<NicAddress>,
}

/// Interfaces keyed by name, in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct NicTable {
    interfaces: Vec<NicInterface>,
}

impl NicTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the addresses for `name`, keeping its position if it already exists
    pub fn insert(&mut self, name: impl Into<String>, addresses: Vec<NicAddress>) {
        let name = name.into();
        match self.interfaces.iter_mut().find(|nic| nic.name == name) {
            Some(existing) => existing.addresses = addresses,
            None => self.interfaces.push(NicInterface { name, addresses }),
        }
    }

    /// Appends one address to `name`, creating the interface if needed
    pub fn push_address(&mut self, name: &str, address: NicAddress) {
        match self.interfaces.iter_mut().find(|nic| nic.name == name) {
            Some(existing) => existing.addresses.push(address),
            None => self.interfaces.push(NicInterface { name: name.to_string(), addresses: vec![address] }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[NicAddress]> {
        self.interfaces.iter().find(|nic| nic.name == name).map(|nic| nic.addresses.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &NicInterface> {
        self.interfaces.iter()
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<NicAddress>)> for NicTable {
    fn from_iter<I: IntoIterator<Item = (S, Vec<NicAddress>)>>(iter: I) -> Self {
        let mut table = NicTable::new();
        for (name, addresses) in iter {
            table.insert(name, addresses);
        }
        table
    }
}

/// Renders the description block of one interface, ending with a blank line
pub fn describe_interface(nic: &NicInterface) -> String {
    let mut text = format!("Interface: {}\n", nic.name);
    for addr in &nic.addresses {
        text.push_str(&format!("  {} Address: {}\n", addr.family, addr.address));
        if let Some(netmask) = &addr.netmask {
            text.push_str(&format!("  Netmask: {netmask}\n"));
        }
        if let Some(broadcast) = &addr.broadcast {
            text.push_str(&format!("  Broadcast: {broadcast}\n"));
        }
    }
    text.push('\n');
    text
}

/// Two-column layout of the interface descriptions
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NicColumns {
    pub left: String,
    pub right: String,
}

/// Distributes text blocks over two columns by line count
///
/// Each block goes to whichever column currently has fewer lines; ties go left.
/// Lines are counted, not bytes, and blocks are never split.
pub fn balance_columns<I>(blocks: I) -> NicColumns
where
    I: IntoIterator<Item = String>,
{
    let mut columns = NicColumns::default();
    for block in blocks {
        if columns.left.lines().count() <= columns.right.lines().count() {
            columns.left.push_str(&block);
        } else {
            columns.right.push_str(&block);
        }
    }
    columns
}

/// Lays out the whole table in two balanced columns
pub fn nic_columns(table: &NicTable) -> NicColumns {
    balance_columns(table.iter().map(describe_interface))
}
