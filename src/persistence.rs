//! Fire-and-forget persistence of display settings
//!
//! Callers hand a full snapshot to `SaveQueue::schedule` and move on. A single
//! worker thread drains a `watch` channel, so pending snapshots coalesce to the
//! newest one and saves land strictly in version order.

use std::sync::Arc;
use std::thread::JoinHandle;

use anyhow::{Context, Result};
use tokio::sync::watch;
use tracing::{debug, error, warn};

use crate::config::{DisplaySettings, SettingsStore};
use crate::constants::persistence::WORKER_THREAD_NAME;

/// Snapshot stamped with the order it was scheduled in
#[derive(Debug, Clone)]
struct SaveRequest {
    version: u64,
    settings: DisplaySettings,
}

/// Handle to the background save worker
pub struct SaveQueue {
    tx: Option<watch::Sender<Option<SaveRequest>>>,
    worker: Option<JoinHandle<()>>,
    next_version: u64,
}

impl SaveQueue {
    /// Spawn the worker thread writing through `store`
    pub fn spawn(store: Arc<dyn SettingsStore>) -> Result<Self> {
        let (tx, rx) = watch::channel(None);

        let worker = std::thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_current_thread().build() {
                    Ok(runtime) => runtime,
                    Err(err) => {
                        error!(error = ?err, "Failed to build save worker runtime");
                        return;
                    }
                };
                runtime.block_on(drain(rx, store));
            })
            .context("Failed to spawn settings save worker")?;

        Ok(Self {
            tx: Some(tx),
            worker: Some(worker),
            next_version: 1,
        })
    }

    /// Queue `settings` for saving without waiting for the write
    pub fn schedule(&mut self, settings: DisplaySettings) {
        let Some(tx) = &self.tx else {
            warn!("Save requested after shutdown, dropping snapshot");
            return;
        };

        let version = self.next_version;
        self.next_version += 1;

        if tx.send(Some(SaveRequest { version, settings })).is_err() {
            warn!(version, "Save worker is not running, snapshot not persisted");
        }
    }

    /// Close the queue and wait for the last pending snapshot to be written
    pub fn shutdown(&mut self) {
        drop(self.tx.take());
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            error!("Settings save worker panicked");
        }
    }
}

impl Drop for SaveQueue {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn drain(mut rx: watch::Receiver<Option<SaveRequest>>, store: Arc<dyn SettingsStore>) {
    // `changed` still reports a value sent right before the sender closed
    while rx.changed().await.is_ok() {
        let Some(request) = rx.borrow_and_update().clone() else {
            continue;
        };

        match store.set_display_settings(&request.settings) {
            Ok(()) => debug!(version = request.version, "Persisted display settings"),
            Err(err) => warn!(version = request.version, error = ?err, "Failed to save display settings"),
        }
    }
    debug!("Save worker exiting");
}
