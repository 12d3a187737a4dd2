//! Use case for loading the clipboard store at startup
//! 启动时加载剪贴板存储的用例

use std::sync::Arc;

use rv_core::ports::SnapshotStorePort;
use rv_core::snapshot::StoreSnapshot;
use rv_core::store::ClipStore;
use tracing::{error, info, info_span, warn, Instrument};

/// Loads the persisted store, merged over defaults.
///
/// ## Behavior / 行为
/// - stored snapshot present: fields it carries override the defaults
/// - missing or unreadable snapshot: the built-in default store is used and
///   written back immediately so a valid file exists from now on
pub struct LoadStore {
    snapshots: Arc<dyn SnapshotStorePort>,
}

impl LoadStore {
    pub fn new(snapshots: Arc<dyn SnapshotStorePort>) -> Self {
        Self { snapshots }
    }

    /// Never fails: every load problem falls back to defaults.
    pub async fn execute(&self) -> ClipStore {
        let span = info_span!("usecase.load_store.execute");

        async {
            match self.snapshots.load().await {
                Ok(Some(snapshot)) => {
                    let store = snapshot.into_store();
                    info!(
                        groups = store.groups().len(),
                        active_group = %store.active_group(),
                        "clipboard store loaded"
                    );
                    store
                }
                Ok(None) => {
                    info!("no stored snapshot, starting from defaults");
                    self.write_defaults().await
                }
                Err(e) => {
                    warn!(error = %format!("{e:#}"), "stored snapshot unusable, starting from defaults");
                    self.write_defaults().await
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn write_defaults(&self) -> ClipStore {
        let store = ClipStore::default();
        if let Err(e) = self.snapshots.save(&StoreSnapshot::from(&store)).await {
            error!(error = %format!("{e:#}"), "failed to write default snapshot");
        }
        store
    }
}
