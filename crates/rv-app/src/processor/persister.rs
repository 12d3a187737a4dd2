use std::sync::Arc;

use anyhow::Result;
use rv_core::ports::SnapshotStorePort;
use rv_core::snapshot::StoreSnapshot;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

/// Single writer for snapshot files.
///
/// Queued snapshots coalesce: when several are waiting only the newest is
/// written.
pub(crate) struct SnapshotPersister {
    snapshots: Arc<dyn SnapshotStorePort>,
    tx: mpsc::UnboundedSender<StoreSnapshot>,
    writer: JoinHandle<()>,
}

impl SnapshotPersister {
    pub(crate) fn spawn(snapshots: Arc<dyn SnapshotStorePort>) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<StoreSnapshot>();
        let store = Arc::clone(&snapshots);

        let writer = tokio::spawn(async move {
            while let Some(mut snapshot) = rx.recv().await {
                while let Ok(newer) = rx.try_recv() {
                    snapshot = newer;
                }
                match store.save(&snapshot).await {
                    Ok(()) => debug!("checkpoint saved"),
                    Err(e) => error!(error = %format!("{e:#}"), "checkpoint save failed"),
                }
            }
        });

        Self {
            snapshots,
            tx,
            writer,
        }
    }

    /// Queue a background save.
    pub(crate) fn submit(&self, snapshot: StoreSnapshot) {
        if self.tx.send(snapshot).is_err() {
            warn!("snapshot writer is gone, checkpoint skipped");
        }
    }

    /// Finish queued writes, then write `last` and report its outcome.
    pub(crate) async fn shutdown(self, last: StoreSnapshot) -> Result<()> {
        let Self {
            snapshots,
            tx,
            writer,
        } = self;
        drop(tx);
        if let Err(e) = writer.await {
            warn!(error = %e, "snapshot writer task failed");
        }
        snapshots.save(&last).await
    }
}
