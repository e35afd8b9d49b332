//! Background sweep that evicts expired descriptions.

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::DescriptionCache;

/// Handle to the periodic sweep task.
///
/// The sweep runs until [`CacheSweeper::stop`] is awaited or the handle is
/// dropped.
#[derive(Debug)]
pub struct CacheSweeper {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl CacheSweeper {
    /// Spawn the sweep on the current tokio runtime.
    ///
    /// The first pass runs one full `interval` after start.
    pub fn start(cache: DescriptionCache, interval: Duration) -> Self {
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let removed = cache.purge_expired().await;
                        if removed > 0 {
                            tracing::info!(removed, "swept expired descriptions from cache");
                        } else {
                            tracing::debug!("cache sweep found nothing to evict");
                        }
                    }
                    _ = shutdown_rx.changed() => break,
                }
            }

            tracing::debug!("cache sweeper stopped");
        });

        tracing::debug!(interval_secs = interval.as_secs(), "cache sweeper started");

        Self { shutdown, handle }
    }

    /// Signal the sweep task to exit and wait for it.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        if let Err(e) = self.handle.await {
            tracing::warn!("cache sweeper task ended abnormally: {}", e);
        }
    }
}
