use std::sync::Arc;
use std::time::Duration;

use host_telemetry::network::nic_columns;
use host_telemetry::prelude::*;

use crate::common::{ScriptedSensors, TestNicTableBuilder};

#[test]
fn test_columns_balance_by_lines() {
    // eth0 and wlan0 take 8 lines each, lo 5 and veth0 3
    let table = TestNicTableBuilder::new()
        .with_ethernet("eth0", 10)
        .with_loopback()
        .with_ethernet("wlan0", 20)
        .with_link_only("veth0")
        .build();

    let columns = nic_columns(&table);

    assert!(columns.left.starts_with("Interface: eth0\n"));
    assert!(columns.right.starts_with("Interface: lo\n"));
    assert!(columns.right.contains("Interface: wlan0\n"));
    assert!(columns.left.contains("Interface: veth0\n"));
    assert_eq!(columns.left.lines().count(), 11);
    assert_eq!(columns.right.lines().count(), 13);
}

#[test]
fn test_every_interface_lands_in_exactly_one_column() {
    let table = TestNicTableBuilder::new()
        .with_loopback()
        .with_ethernet("eth0", 1)
        .with_ethernet("eth1", 2)
        .with_link_only("dummy0")
        .build();

    let columns = nic_columns(&table);
    for nic in table.iter() {
        let header = format!("Interface: {}\n", nic.name);
        let hits = columns.left.matches(&header).count() + columns.right.matches(&header).count();
        assert_eq!(hits, 1, "{} placed {} times", nic.name, hits);
    }
}

#[tokio::test(start_paused = true)]
async fn test_scheduler_emits_both_columns() {
    let table = TestNicTableBuilder::new().with_ethernet("eth0", 5).with_loopback().build();
    let expected = nic_columns(&table);
    let sensors = Arc::new(ScriptedSensors::new().with_nic_table(table));
    let sink = Arc::new(MemorySink::new());

    let mut scheduler =
        SamplingScheduler::new(sensors, Arc::new(|| "10".to_string()), sink.clone(), Duration::from_secs(2));
    scheduler.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    scheduler.stop().await.unwrap();

    assert_eq!(sink.latest(Field::NicLeft), Some(expected.left));
    assert_eq!(sink.latest(Field::NicRight), Some(expected.right));
}
