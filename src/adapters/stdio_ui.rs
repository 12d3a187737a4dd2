//! UI port over a line-delimited JSON stream.
//!
//! 通过逐行 JSON 流实现的 UI 端口。

use anyhow::Result;
use rv_core::clipboard::ClipItem;
use rv_core::ports::UiPort;
use rv_core::store::GroupsView;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::trace;

use crate::ipc::UiEvent;

/// Writes each [`UiEvent`] as one JSON line. The lock keeps lines from
/// interleaving when the store processor and request dispatch emit together.
pub struct StdioUiPort<W> {
    out: Mutex<W>,
}

pub type StdoutUiPort = StdioUiPort<tokio::io::Stdout>;

impl StdoutUiPort {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W> StdioUiPort<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub async fn emit(&self, event: &UiEvent<'_>) -> Result<()> {
        let mut line = serde_json::to_vec(event)?;
        line.push(b'\n');

        let mut out = self.out.lock().await;
        out.write_all(&line).await?;
        out.flush().await?;
        trace!(channel = event.channel(), bytes = line.len(), "ui event written");
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

#[async_trait::async_trait]
impl<W> UiPort for StdioUiPort<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn show_groups(&self, view: &GroupsView) -> Result<()> {
        self.emit(&UiEvent::ShowGroups(view)).await
    }

    async fn show_items(&self, items: &[ClipItem]) -> Result<()> {
        self.emit(&UiEvent::ShowItems(items)).await
    }

    async fn show_window(&self) -> Result<()> {
        self.emit(&UiEvent::ShowWindow).await
    }

    async fn hide_window(&self) -> Result<()> {
        self.emit(&UiEvent::HideWindow).await
    }
}
