use anyhow::Result;
use rv_core::clipboard::ClipItem;
use rv_core::ports::ClipboardSampleHandler;
use rv_core::settings::Settings;
use rv_core::snapshot::StoreSnapshot;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

use super::command::StoreCommand;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("store processor is not running")]
    Closed,

    #[error("store processor queue is full")]
    Busy,
}

/// Cloneable sender side of the store processor.
///
/// Fire-and-forget methods return once the command is queued; `get_settings`,
/// `snapshot` and `shutdown` wait for the reply.
#[derive(Debug, Clone)]
pub struct ProcessorHandle {
    tx: mpsc::Sender<StoreCommand>,
}

impl ProcessorHandle {
    pub(crate) fn new(tx: mpsc::Sender<StoreCommand>) -> Self {
        Self { tx }
    }

    pub async fn send(&self, cmd: StoreCommand) -> Result<(), ProcessorError> {
        self.tx.send(cmd).await.map_err(|_| ProcessorError::Closed)
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> StoreCommand,
    ) -> Result<T, ProcessorError> {
        let (reply, rx) = oneshot::channel();
        self.send(make(reply)).await?;
        rx.await.map_err(|_| ProcessorError::Closed)
    }

    pub async fn ingest(&self, sample: ClipItem) -> Result<(), ProcessorError> {
        self.send(StoreCommand::Ingest(sample)).await
    }

    pub async fn request_groups_view(&self) -> Result<(), ProcessorError> {
        self.send(StoreCommand::RequestGroupsView).await
    }

    /// Non-blocking variant for hotkey callbacks that run outside the runtime.
    pub fn trigger_launcher(&self) -> Result<(), ProcessorError> {
        self.tx
            .try_send(StoreCommand::ShowLauncher)
            .map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => ProcessorError::Busy,
                mpsc::error::TrySendError::Closed(_) => ProcessorError::Closed,
            })
    }

    pub async fn get_group_items(&self, name: impl Into<String>) -> Result<(), ProcessorError> {
        self.send(StoreCommand::GetGroupItems(name.into())).await
    }

    pub async fn add_group(&self, name: impl Into<String>) -> Result<(), ProcessorError> {
        self.send(StoreCommand::AddGroup(name.into())).await
    }

    pub async fn delete_group(&self, name: impl Into<String>) -> Result<(), ProcessorError> {
        self.send(StoreCommand::DeleteGroup(name.into())).await
    }

    pub async fn rename_group(
        &self,
        old: impl Into<String>,
        new: impl Into<String>,
    ) -> Result<(), ProcessorError> {
        self.send(StoreCommand::RenameGroup {
            old: old.into(),
            new: new.into(),
        })
        .await
    }

    pub async fn delete_item(
        &self,
        group: impl Into<String>,
        item: ClipItem,
    ) -> Result<(), ProcessorError> {
        self.send(StoreCommand::DeleteItem {
            group: group.into(),
            item,
        })
        .await
    }

    pub async fn paste_item(&self, item: ClipItem) -> Result<(), ProcessorError> {
        self.send(StoreCommand::PasteItem(item)).await
    }

    pub async fn get_settings(&self) -> Result<Settings, ProcessorError> {
        self.request(|reply| StoreCommand::GetSettings { reply }).await
    }

    pub async fn save_settings(&self, settings: Settings) -> Result<(), ProcessorError> {
        self.send(StoreCommand::SaveSettings(settings)).await
    }

    pub async fn reset_settings(&self) -> Result<(), ProcessorError> {
        self.send(StoreCommand::ResetSettings).await
    }

    pub async fn hide_window(&self) -> Result<(), ProcessorError> {
        self.send(StoreCommand::HideWindow).await
    }

    pub async fn snapshot(&self) -> Result<StoreSnapshot, ProcessorError> {
        self.request(|reply| StoreCommand::Snapshot { reply }).await
    }

    /// Stop the processor after every command queued before this one, and
    /// return the outcome of the final save.
    pub async fn shutdown(&self) -> Result<()> {
        self.request(|reply| StoreCommand::Shutdown { reply }).await?
    }
}

#[async_trait::async_trait]
impl ClipboardSampleHandler for ProcessorHandle {
    async fn on_sample(&self, sample: ClipItem) -> Result<()> {
        self.ingest(sample).await?;
        Ok(())
    }
}
