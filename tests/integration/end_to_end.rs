use std::sync::Arc;
use std::time::Duration;

use host_telemetry::prelude::*;

use crate::common::{ScriptedSensors, TestNicTableBuilder};

#[tokio::test(start_paused = true)]
async fn test_two_ticks_render_every_field() {
    let sensors = Arc::new(
        ScriptedSensors::new()
            .with_counters(&[(0, 0), (2_097_152, 1_048_576)])
            .with_nic_table(TestNicTableBuilder::new().with_loopback().build()),
    );
    let sink = Arc::new(MemorySink::new());
    let config = MonitorConfig::default().with_cpu_target("50");
    let (mut telemetry, _input) = Telemetry::from_config(&config, sensors.clone(), sink.clone()).unwrap();

    telemetry.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(2_100)).await;

    assert_eq!(sensors.ticks(), 2);
    assert_eq!(sink.relayout_count(), 2);

    assert_eq!(
        sink.latest(Field::Power).as_deref(),
        Some("Power Status: Plugged In, Battery: 80%\nThermal Design Power: 48 W")
    );
    assert_eq!(
        sink.latest(Field::Cpu).as_deref(),
        Some("Desired CPU Usage: 50.0%\nCPU Frequency: 2.40 GHz\nEstimated CPU Power Consumption: 1.20 Watts")
    );
    assert_eq!(
        sink.latest(Field::Memory).as_deref(),
        Some("Total Memory: 16.00 GB\nUsed Memory: 6.00 GB\nRemaining Memory: 10.00 GB")
    );
    assert_eq!(
        sink.latest(Field::Graphics).as_deref(),
        Some("Iris Graphics Load: 45.60%\nIris Graphics Total Memory: 2.00 GB\nIris Graphics Used Memory: 1.00 GB")
    );
    assert_eq!(
        sink.history(Field::Network),
        [
            "Network Traffic: Sent = 0.000000 GB, Received = 0.000000 GB",
            "Network Traffic: Sent = 0.001953 GB, Received = 0.000977 GB",
        ]
    );
    assert_eq!(
        sink.latest(Field::NicLeft).as_deref(),
        Some("Interface: lo\n  IPv4 Address: 127.0.0.1\n  Netmask: 255.0.0.0\n  Broadcast: 127.255.255.255\n\n")
    );
    assert_eq!(sink.latest(Field::NicRight).as_deref(), Some(""));
    assert_eq!(sink.latest(Field::Stopwatch).as_deref(), Some("Elapsed Time: 00:00:02"));

    telemetry.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_host_without_sensors_renders_unavailable() {
    let sensors = Arc::new(ScriptedSensors::new().with_power(None).with_frequency(None));
    let sink = Arc::new(MemorySink::new());
    let config = MonitorConfig::default().with_cpu_target("25");
    let (mut telemetry, _input) = Telemetry::from_config(&config, sensors, sink.clone()).unwrap();

    telemetry.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    telemetry.stop().await.unwrap();

    assert_eq!(
        sink.latest(Field::Power).as_deref(),
        Some("Failed to retrieve power information.\nThermal Design Power: 48 W")
    );
    assert_eq!(
        sink.latest(Field::Cpu).as_deref(),
        Some("Desired CPU Usage: 25.0%\nCPU Frequency: unavailable\nEstimated CPU Power Consumption: unavailable")
    );
}

#[tokio::test(start_paused = true)]
async fn test_cpu_target_edits_apply_on_next_tick() {
    let sensors = Arc::new(ScriptedSensors::new());
    let sink = Arc::new(MemorySink::new());
    let (mut telemetry, input) =
        Telemetry::from_config(&MonitorConfig::default().with_cpu_target("abc"), sensors.clone(), sink.clone())
            .unwrap();

    telemetry.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(sink.latest(Field::Cpu).as_deref(), Some("Error: Please enter a valid percentage."));
    assert_eq!(sensors.frequency_reads(), 0);

    input.set("150");
    tokio::time::sleep(Duration::from_millis(2_000)).await;
    assert_eq!(sink.latest(Field::Cpu).as_deref(), Some("Error: Percentage should be between 0 and 100"));

    input.set("100");
    tokio::time::sleep(Duration::from_millis(2_000)).await;
    assert!(sink.latest(Field::Cpu).unwrap().starts_with("Desired CPU Usage: 100.0%"));
    assert_eq!(sensors.frequency_reads(), 1);

    // the rest of the tick is unaffected by a bad target
    assert_eq!(sink.history(Field::Memory).len(), 3);

    telemetry.stop().await.unwrap();
}
