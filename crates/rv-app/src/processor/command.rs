use rv_core::clipboard::ClipItem;
use rv_core::settings::Settings;
use rv_core::snapshot::StoreSnapshot;
use tokio::sync::oneshot;

/// Everything that may touch the store, in arrival order.
#[derive(Debug)]
pub enum StoreCommand {
    /// A watcher tick produced a sample
    Ingest(ClipItem),
    RequestGroupsView,
    /// Hotkey: show the group list and bring the window up
    ShowLauncher,
    GetGroupItems(String),
    AddGroup(String),
    DeleteGroup(String),
    RenameGroup {
        old: String,
        new: String,
    },
    DeleteItem {
        group: String,
        item: ClipItem,
    },
    PasteItem(ClipItem),
    GetSettings {
        reply: oneshot::Sender<Settings>,
    },
    SaveSettings(Settings),
    ResetSettings,
    HideWindow,
    /// Copy of the current state
    Snapshot {
        reply: oneshot::Sender<StoreSnapshot>,
    },
    /// Flush a final save and stop
    Shutdown {
        reply: oneshot::Sender<anyhow::Result<()>>,
    },
}

impl StoreCommand {
    pub fn name(&self) -> &'static str {
        match self {
            StoreCommand::Ingest(_) => "ingest",
            StoreCommand::RequestGroupsView => "request_groups_view",
            StoreCommand::ShowLauncher => "show_launcher",
            StoreCommand::GetGroupItems(_) => "get_group_items",
            StoreCommand::AddGroup(_) => "add_group",
            StoreCommand::DeleteGroup(_) => "delete_group",
            StoreCommand::RenameGroup { .. } => "rename_group",
            StoreCommand::DeleteItem { .. } => "delete_item",
            StoreCommand::PasteItem(_) => "paste_item",
            StoreCommand::GetSettings { .. } => "get_settings",
            StoreCommand::SaveSettings(_) => "save_settings",
            StoreCommand::ResetSettings => "reset_settings",
            StoreCommand::HideWindow => "hide_window",
            StoreCommand::Snapshot { .. } => "snapshot",
            StoreCommand::Shutdown { .. } => "shutdown",
        }
    }
}
