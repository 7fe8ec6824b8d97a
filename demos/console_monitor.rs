use std::collections::BTreeMap;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use host_telemetry::prelude::*;
use host_telemetry::system::SysinfoSensors;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

/// Prints every field after each sampling tick
#[derive(Default)]
struct ConsoleSink {
    fields: Mutex<BTreeMap<Field, String>>,
}

impl DisplaySink for ConsoleSink {
    fn emit(&self, field: Field, text: &str) {
        self.fields.lock().insert(field, text.to_string());
    }

    fn relayout(&self) {
        let fields = self.fields.lock();
        println!("\n==================== Host Telemetry ====================");
        for (field, text) in fields.iter() {
            println!("[{field}]");
            println!("{text}");
        }
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // usage: console_monitor [seconds] [cpu-target]
    let mut args = std::env::args().skip(1);
    let seconds: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(10);
    let cpu_target = args.next().unwrap_or_else(|| "50".to_string());

    let config = match std::env::var("HOST_TELEMETRY_CONFIG") {
        Ok(path) => MonitorConfig::from_json(&std::fs::read_to_string(path)?)?,
        Err(_) => MonitorConfig::default(),
    }
    .with_cpu_target(cpu_target);

    println!("Host Telemetry - Console Monitor");
    println!("Running for {seconds}s, press Ctrl+C to exit early\n");

    let (mut telemetry, _cpu_input) =
        Telemetry::from_config(&config, Arc::new(SysinfoSensors::new()), Arc::new(ConsoleSink::default()))?;

    telemetry.start().await?;
    tokio::select! {
        _ = tokio::time::sleep(Duration::from_secs(seconds)) => {},
        _ = tokio::signal::ctrl_c() => println!("\nInterrupted"),
    }
    telemetry.stop().await?;

    Ok(())
}
