//! Cache Sweep Task
//!
//! Background task that periodically removes stale entries from the cache
//! store.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

// == Sweeper Handle ==

/// Controls the background sweeper spawned alongside the cache.
///
/// Dropping the handle leaves the sweeper running for the life of the
/// process; calling [`SweeperHandle::shutdown`] asks the loop to exit and
/// waits for the task to finish.
pub struct SweeperHandle {
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// Signals the sweeper to stop and waits for the task to exit.
    pub async fn shutdown(self) {
        // A send failure means the task is already gone; nothing to do.
        let _ = self.shutdown_tx.send(()).await;
        let _ = self.task.await;
    }
}

// == Spawn ==

/// Spawns the background task that sweeps stale entries out of `store`.
///
/// The task sleeps for `stale_limit`, then takes the write lock for a single
/// scan-and-delete pass removing every entry strictly older than
/// `stale_limit`. A stale entry therefore survives at most just under two
/// full windows: inserted right after one pass, removed by the first pass
/// after it ages out.
///
/// Each cycle also listens for a shutdown request and exits as soon as the
/// matching [`SweeperHandle`] asks it to. If the handle is dropped without a
/// shutdown call, the loop keeps sweeping until the process exits.
///
/// # Arguments
/// * `store` - Shared cache store to sweep
/// * `stale_limit` - Staleness window and sweep cadence, one value
///
/// # Returns
/// A handle that can stop the spawned task
pub fn spawn_sweeper(store: Arc<RwLock<CacheStore>>, stale_limit: Duration) -> SweeperHandle {
    let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

    let task = tokio::spawn(async move {
        debug!("cache sweeper started, waking every {:?}", stale_limit);

        let mut listening = true;
        loop {
            tokio::select! {
                _ = tokio::time::sleep(stale_limit) => {
                    let removed = {
                        let mut store = store.write().await;
                        store.remove_stale()
                    };

                    if removed > 0 {
                        info!("cache sweep removed {} stale entries", removed);
                    } else {
                        debug!("cache sweep found no stale entries");
                    }
                }
                message = shutdown_rx.recv(), if listening => {
                    match message {
                        Some(()) => {
                            debug!("cache sweeper shutting down");
                            break;
                        }
                        // A closed channel means the handle was dropped with
                        // no shutdown call. Stop polling it and sweep on.
                        None => {
                            debug!("sweeper handle dropped, sweeping until process exit");
                            listening = false;
                        }
                    }
                }
            }
        }
    });

    SweeperHandle { shutdown_tx, task }
}
