use rv_core::clipboard::ClipItem;
use rv_core::settings::Settings;
use rv_core::store::GroupsView;
use serde::Serialize;

/// Engine-to-UI messages.
#[derive(Debug, Serialize)]
#[serde(tag = "channel", content = "payload", rename_all = "kebab-case")]
pub enum UiEvent<'a> {
    ShowGroups(&'a GroupsView),
    ShowItems(&'a [ClipItem]),
    ShowWindow,
    HideWindow,
    /// Reply to `get-settings`
    Settings(&'a Settings),
}

impl UiEvent<'_> {
    pub fn channel(&self) -> &'static str {
        match self {
            UiEvent::ShowGroups(_) => "show-groups",
            UiEvent::ShowItems(_) => "show-items",
            UiEvent::ShowWindow => "show-window",
            UiEvent::HideWindow => "hide-window",
            UiEvent::Settings(_) => "settings",
        }
    }
}
