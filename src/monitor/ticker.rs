use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::error::{Error, Result};

/// A cancellable task that runs a tick, waits `interval`, and repeats
///
/// The first tick runs as soon as the task is spawned. The wait starts after a tick
/// completes, so a slow tick delays the next one instead of causing a burst. A stop
/// request is only observed between ticks: a tick in progress always finishes.
pub struct RepeatingTask {
    stop_tx: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl RepeatingTask {
    /// Spawns the loop on the current tokio runtime
    pub fn spawn<F, Fut>(name: &'static str, interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (stop_tx, mut stop_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            loop {
                tick().await;

                tokio::select! {
                    biased;
                    _ = stop_rx.changed() => break,
                    _ = tokio::time::sleep(interval) => {},
                }

                if *stop_rx.borrow() {
                    break;
                }
            }
            trace!(task = name, "repeating task exited");
        });

        Self { stop_tx, handle: Some(handle) }
    }

    /// Requests a stop and waits for the in-flight tick, if any, to complete
    pub async fn stop(mut self) -> Result<()> {
        let _ = self.stop_tx.send(true);
        match self.handle.take() {
            Some(handle) => handle.await.map_err(|e| Error::task_failed(e.to_string())),
            None => Ok(()),
        }
    }
}

impl Drop for RepeatingTask {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.stop_tx.send(true);
            handle.abort();
        }
    }
}
