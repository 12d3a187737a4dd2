use anyhow::{Context, Result};
use rv_app::ProcessorHandle;
use rv_core::clipboard::ClipItem;
use rv_core::settings::Settings;
use serde::Deserialize;
use tokio::io::AsyncWrite;
use tracing::{debug, info};

use super::UiEvent;
use crate::adapters::StdioUiPort;

/// UI-to-engine messages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "channel", content = "payload", rename_all = "kebab-case")]
pub enum UiRequest {
    RequestGroupsView,
    GetGroupItems(String),
    AddGroup(String),
    DeleteGroup(String),
    EditGroupName(RenameGroupPayload),
    DeleteItem(DeleteItemPayload),
    PasteItem(ClipItem),
    GetSettings,
    SaveSettings(Settings),
    ResetSettings,
    HideWindow,
    QuitApp,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameGroupPayload {
    pub old_name: String,
    pub new_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteItemPayload {
    pub group_name: String,
    pub item_to_delete: ClipItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn parse_request(line: &str) -> Result<UiRequest> {
    serde_json::from_str(line).context("malformed UI request")
}

/// Forward one request to the store processor.
///
/// `get-settings` is answered on the event stream with a `settings` message.
pub async fn dispatch<W>(
    request: UiRequest,
    processor: &ProcessorHandle,
    events: &StdioUiPort<W>,
) -> Result<Flow>
where
    W: AsyncWrite + Unpin + Send,
{
    debug!(?request, "ui request");
    match request {
        UiRequest::RequestGroupsView => processor.request_groups_view().await?,
        UiRequest::GetGroupItems(name) => processor.get_group_items(name).await?,
        UiRequest::AddGroup(name) => processor.add_group(name).await?,
        UiRequest::DeleteGroup(name) => processor.delete_group(name).await?,
        UiRequest::EditGroupName(RenameGroupPayload { old_name, new_name }) => {
            processor.rename_group(old_name, new_name).await?
        }
        UiRequest::DeleteItem(DeleteItemPayload {
            group_name,
            item_to_delete,
        }) => processor.delete_item(group_name, item_to_delete).await?,
        UiRequest::PasteItem(item) => processor.paste_item(item).await?,
        UiRequest::GetSettings => {
            let settings = processor.get_settings().await?;
            events.emit(&UiEvent::Settings(&settings)).await?;
        }
        UiRequest::SaveSettings(settings) => processor.save_settings(settings).await?,
        UiRequest::ResetSettings => processor.reset_settings().await?,
        UiRequest::HideWindow => processor.hide_window().await?,
        UiRequest::QuitApp => {
            info!("quit requested by UI");
            return Ok(Flow::Quit);
        }
    }
    Ok(Flow::Continue)
}
