use async_trait::async_trait;

use crate::snapshot::StoreSnapshot;

/// Durable snapshot storage
#[async_trait]
pub trait SnapshotStorePort: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet; `Err` for unreadable or
    /// malformed content.
    async fn load(&self) -> anyhow::Result<Option<StoreSnapshot>>;

    /// Replace the stored snapshot. A concurrent `load` never observes a
    /// partially written file.
    async fn save(&self, snapshot: &StoreSnapshot) -> anyhow::Result<()>;
}
