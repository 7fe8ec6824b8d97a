//! Battery state from the Linux power-supply class
//!
//! Each entry under `/sys/class/power_supply` describes one supply. Entries of type
//! `Battery` provide the charge level and status; entries of type `Mains` or `USB`
//! tell whether external power is connected. On hosts without that directory, or
//! without a battery entry, the reading is `None`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{trace, warn};

use crate::error::Result;
use crate::power::PowerReading;

/// Default location of the power-supply class
pub const POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

#[derive(Debug, Default)]
struct SupplyScan {
    battery_found: bool,
    capacity: Option<f64>,
    discharging: bool,
    mains_seen: bool,
    mains_online: bool,
}

/// Reads one attribute file, `None` if the supply does not expose it
///
/// Drivers sometimes fail reads on attributes they list (EIO, ENODATA). Such an
/// attribute is logged and treated as missing.
fn read_attr(dir: &Path, name: &str) -> Option<String> {
    match fs::read_to_string(dir.join(name)) {
        Ok(value) => Some(value.trim().to_string()),
        Err(err) if err.kind() == ErrorKind::NotFound => None,
        Err(err) => {
            warn!(supply = %dir.display(), attr = name, error = %err, "unreadable power-supply attribute");
            None
        },
    }
}

/// Scans a power-supply directory and summarises it as a [`PowerReading`]
///
/// The first present battery (by entry name) provides the charge level. Whether the
/// host is plugged in comes from the mains/USB supplies when any exist, otherwise
/// from the battery status. Read failures degrade to missing values; they never
/// surface as `Err`, so a broken battery only affects the power field.
pub fn read_power_supply(root: &Path) -> Result<Option<PowerReading>> {
    if !root.is_dir() {
        return Ok(None);
    }

    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(root = %root.display(), error = %err, "cannot list power supplies");
            return Ok(None);
        },
    };
    let mut dirs: Vec<_> = entries.filter_map(|entry| entry.ok()).map(|entry| entry.path()).collect();
    dirs.sort();

    let mut scan = SupplyScan::default();
    for dir in &dirs {
        let kind = read_attr(dir, "type");
        trace!(supply = %dir.display(), kind = ?kind, "power supply");

        match kind.as_deref() {
            Some("Battery") if !scan.battery_found => {
                if read_attr(dir, "present").as_deref() == Some("0") {
                    continue;
                }
                scan.battery_found = true;
                scan.capacity = read_attr(dir, "capacity").and_then(|v| v.parse().ok());
                scan.discharging = read_attr(dir, "status").as_deref() == Some("Discharging");
            },
            Some("Mains") | Some("USB") => {
                scan.mains_seen = true;
                scan.mains_online |= read_attr(dir, "online").as_deref() == Some("1");
            },
            _ => {},
        }
    }

    if !scan.battery_found {
        return Ok(None);
    }

    let plugged = if scan.mains_seen { scan.mains_online } else { !scan.discharging };
    Ok(Some(PowerReading::new(plugged, scan.capacity)))
}
