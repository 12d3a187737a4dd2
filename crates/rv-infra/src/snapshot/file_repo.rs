use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use rv_core::ports::SnapshotStorePort;
use rv_core::snapshot::StoreSnapshot;

/// JSON snapshot file with write-to-temp-then-rename saves.
pub struct FileSnapshotRepository {
    path: PathBuf,
}

impl FileSnapshotRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create snapshot dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// The target holds either the previous contents or the complete new
    /// contents, never a prefix.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp snapshot failed: {}", tmp_path.display()))?;

        // TODO: Windows 上 rename 覆盖可能不一致；macOS/Linux OK。
        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp snapshot to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl SnapshotStorePort for FileSnapshotRepository {
    async fn load(&self) -> Result<Option<StoreSnapshot>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot on disk");
                return Ok(None);
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read snapshot failed: {}", self.path.display()))
            }
        };

        let snapshot = StoreSnapshot::from_json(&content)
            .with_context(|| format!("parse snapshot failed: {}", self.path.display()))?;
        Ok(Some(snapshot))
    }

    async fn save(&self, snapshot: &StoreSnapshot) -> Result<()> {
        let content = snapshot
            .to_json_pretty()
            .context("serialize snapshot failed")?;

        self.atomic_write(&content).await?;
        debug!(path = %self.path.display(), bytes = content.len(), "snapshot saved");
        Ok(())
    }
}
