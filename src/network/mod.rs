//! Network traffic and interface configuration
//!
//! * [`traffic`] turns cumulative byte counters into per-tick deltas.
//! * [`interface`] models the address table of the host's interfaces and lays it
//!   out in two columns for display.

pub mod interface;
pub mod traffic;

pub use interface::{
    balance_columns, describe_interface, nic_columns, AddressFamily, NicAddress, NicColumns, NicInterface, NicTable,
};
pub use traffic::{format_network, DeltaTracker, NetworkCounterSample, NetworkDelta};
