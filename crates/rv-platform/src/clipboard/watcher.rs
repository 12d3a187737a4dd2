use std::sync::Arc;
use std::time::Duration;

use rv_core::clipboard::ClipItem;
use rv_core::ports::{ClipboardSampleHandler, SystemClipboardPort};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Polls the system clipboard on a fixed cadence and hands every sample to a
/// [`ClipboardSampleHandler`].
///
/// Each read runs on a blocking worker and is awaited before the next tick, so
/// at most one read is in flight; ticks missed during a slow read are skipped.
pub struct ClipboardPollWatcher {
    clipboard: Arc<dyn SystemClipboardPort>,
    handler: Arc<dyn ClipboardSampleHandler>,
    interval: Duration,
}

impl ClipboardPollWatcher {
    pub fn new(
        clipboard: Arc<dyn SystemClipboardPort>,
        handler: Arc<dyn ClipboardSampleHandler>,
        interval: Duration,
    ) -> Self {
        Self {
            clipboard,
            handler,
            interval,
        }
    }

    pub fn spawn(self, cancel: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(self.run(cancel))
    }

    pub async fn run(self, cancel: CancellationToken) {
        info!(interval_ms = self.interval.as_millis() as u64, "clipboard watcher started");

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {}
            }

            let sample = tokio::select! {
                _ = cancel.cancelled() => break,
                sample = self.poll_once() => sample,
            };

            if let Some(sample) = sample {
                if let Err(e) = self.handler.on_sample(sample).await {
                    warn!(error = %e, "clipboard sample handler failed");
                }
            }
        }

        info!("clipboard watcher stopped");
    }

    async fn poll_once(&self) -> Option<ClipItem> {
        let clipboard = Arc::clone(&self.clipboard);
        match tokio::task::spawn_blocking(move || clipboard.read_sample()).await {
            Ok(Ok(sample)) => {
                if let Some(item) = &sample {
                    debug!(kind = %item.kind, "clipboard sample read");
                }
                sample
            }
            Ok(Err(e)) => {
                warn!(error = %e, "failed to read clipboard");
                None
            }
            Err(e) => {
                error!(error = %e, "clipboard read task failed");
                None
            }
        }
    }
}
