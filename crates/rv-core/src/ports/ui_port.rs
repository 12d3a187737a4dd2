use anyhow::Result;

use crate::clipboard::ClipItem;
use crate::store::GroupsView;

/// Outbound notifications to the UI collaborator.
#[async_trait::async_trait]
pub trait UiPort: Send + Sync {
    /// `show-groups`
    async fn show_groups(&self, view: &GroupsView) -> Result<()>;

    /// `show-items`
    async fn show_items(&self, items: &[ClipItem]) -> Result<()>;

    async fn show_window(&self) -> Result<()>;

    async fn hide_window(&self) -> Result<()>;
}
