use std::sync::Arc;
use std::time::Duration;

use host_telemetry::prelude::*;

use crate::common::{ScriptedSensors, GIB};

fn telemetry(sensors: Arc<ScriptedSensors>, sink: Arc<MemorySink>) -> Telemetry {
    let config = MonitorConfig::default().with_cpu_target("50");
    Telemetry::new(&config, sensors, Arc::new(CpuTargetInput::new("50")), sink).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_second_start_restarts_instead_of_doubling() {
    let sensors = Arc::new(ScriptedSensors::new().with_counters(&[(GIB, 0), (3 * GIB, 0)]));
    let sink = Arc::new(MemorySink::new());
    let mut telemetry = telemetry(sensors.clone(), sink.clone());

    telemetry.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    telemetry.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(1_000)).await;

    // one tick per start, and only one loop left afterwards
    assert_eq!(sensors.ticks(), 2);
    tokio::time::sleep(Duration::from_millis(1_000)).await;
    assert_eq!(sensors.ticks(), 3);

    // the restart forgot the first sample, so the delta is measured from zero
    assert_eq!(
        sink.history(Field::Network)[1],
        "Network Traffic: Sent = 3.000000 GB, Received = 0.000000 GB"
    );

    telemetry.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_restart_resets_the_stopwatch() {
    let sink = Arc::new(MemorySink::new());
    let mut telemetry = telemetry(Arc::new(ScriptedSensors::new()), sink.clone());

    telemetry.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(5_500)).await;
    assert_eq!(sink.latest(Field::Stopwatch).as_deref(), Some("Elapsed Time: 00:00:05"));

    telemetry.stop().await.unwrap();
    telemetry.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(1_500)).await;
    assert_eq!(sink.latest(Field::Stopwatch).as_deref(), Some("Elapsed Time: 00:00:01"));

    telemetry.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_stop_is_idempotent() {
    let sensors = Arc::new(ScriptedSensors::new());
    let mut telemetry = telemetry(sensors.clone(), Arc::new(MemorySink::new()));

    telemetry.stop().await.unwrap();
    assert!(!telemetry.is_running());

    telemetry.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    telemetry.stop().await.unwrap();
    telemetry.stop().await.unwrap();

    assert_eq!(telemetry.state(), MonitoringState::Stopped);
    assert!(!telemetry.stopwatch().is_running());
    assert_eq!(sensors.ticks(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_stopwatch_and_sampler_tick_independently() {
    let sensors = Arc::new(ScriptedSensors::new());
    let sink = Arc::new(MemorySink::new());
    let mut telemetry = telemetry(sensors.clone(), sink.clone());

    telemetry.start().await.unwrap();
    tokio::time::sleep(Duration::from_millis(4_100)).await;
    telemetry.stop().await.unwrap();

    assert_eq!(sensors.ticks(), 3);
    assert_eq!(sink.history(Field::Stopwatch).len(), 5);
}
