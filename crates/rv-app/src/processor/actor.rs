use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use rv_core::clipboard::ClipItem;
use rv_core::ports::UiPort;
use rv_core::settings::Settings;
use rv_core::snapshot::StoreSnapshot;
use rv_core::store::{ClipStore, GroupRejection};
use rv_core::view::ViewState;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use super::command::StoreCommand;
use super::persister::SnapshotPersister;
use crate::usecases::{ApplyAutostartSetting, IngestClipboardSample, IngestOutcome, PasteItem};

pub(crate) struct StoreActor {
    store: ClipStore,
    view: ViewState,
    ingest: IngestClipboardSample,
    paste: Arc<PasteItem>,
    autostart: ApplyAutostartSetting,
    ui: Arc<dyn UiPort>,
    persister: SnapshotPersister,
    paste_tasks: JoinSet<()>,
    checkpoint: Option<Interval>,
    dirty: bool,
}

/// Next checkpoint tick, or never when checkpoints are off.
async fn next_checkpoint(checkpoint: &mut Option<Interval>) {
    match checkpoint {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

impl StoreActor {
    pub(crate) fn new(
        store: ClipStore,
        paste: Arc<PasteItem>,
        autostart: ApplyAutostartSetting,
        ui: Arc<dyn UiPort>,
        persister: SnapshotPersister,
        checkpoint_interval: Option<Duration>,
    ) -> Self {
        let checkpoint = checkpoint_interval.map(|period| {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });

        Self {
            store,
            view: ViewState::default(),
            ingest: IngestClipboardSample::new(),
            paste,
            autostart,
            ui,
            persister,
            paste_tasks: JoinSet::new(),
            checkpoint,
            dirty: false,
        }
    }

    pub(crate) async fn run(mut self, mut rx: mpsc::Receiver<StoreCommand>) {
        loop {
            tokio::select! {
                cmd = rx.recv() => match cmd {
                    Some(StoreCommand::Shutdown { reply }) => {
                        let result = self.shutdown().await;
                        let _ = reply.send(result);
                        return;
                    }
                    Some(cmd) => self.handle(cmd).await,
                    None => {
                        info!("all processor handles dropped");
                        if let Err(e) = self.shutdown().await {
                            error!(error = %format!("{e:#}"), "final save failed");
                        }
                        return;
                    }
                },
                _ = next_checkpoint(&mut self.checkpoint) => self.checkpoint(),
                Some(joined) = self.paste_tasks.join_next() => {
                    if let Err(e) = joined {
                        warn!(error = %e, "paste task ended abnormally");
                    }
                }
            }
        }
    }

    async fn handle(&mut self, cmd: StoreCommand) {
        debug!(command = cmd.name(), "store command");
        match cmd {
            StoreCommand::Ingest(sample) => self.ingest(sample).await,
            StoreCommand::RequestGroupsView => self.publish_groups().await,
            StoreCommand::ShowLauncher => {
                self.publish_groups().await;
                if let Err(e) = self.ui.show_window().await {
                    warn!(error = %e, "failed to show window");
                }
            }
            StoreCommand::GetGroupItems(name) => self.open_group(name).await,
            StoreCommand::AddGroup(name) => {
                let result = self.store.add_group(&name);
                self.after_group_change("add_group", result).await;
            }
            StoreCommand::DeleteGroup(name) => {
                let result = self.store.delete_group(&name);
                self.after_group_change("delete_group", result).await;
            }
            StoreCommand::RenameGroup { old, new } => {
                let result = self.store.rename_group(&old, &new);
                self.after_group_change("rename_group", result).await;
            }
            StoreCommand::DeleteItem { group, item } => {
                if self.store.delete_item(&group, &item) {
                    self.dirty = true;
                } else {
                    debug!(group = %group, "delete_item: no matching item");
                }
                self.view.select_group(group.clone());
                self.push_items(&group).await;
            }
            StoreCommand::PasteItem(item) => self.spawn_paste(item),
            StoreCommand::GetSettings { reply } => {
                let _ = reply.send(self.store.settings().clone());
            }
            StoreCommand::SaveSettings(settings) => self.save_settings(settings),
            StoreCommand::ResetSettings => {
                self.save_settings(Settings::default());
                self.publish_groups().await;
            }
            StoreCommand::HideWindow => {
                if let Err(e) = self.ui.hide_window().await {
                    warn!(error = %e, "failed to hide window");
                }
            }
            StoreCommand::Snapshot { reply } => {
                let _ = reply.send(StoreSnapshot::from(&self.store));
            }
            // Handled by the run loop.
            StoreCommand::Shutdown { .. } => {}
        }
    }

    async fn ingest(&mut self, sample: ClipItem) {
        match self.ingest.execute(&mut self.store, sample) {
            IngestOutcome::Inserted { group } => {
                self.dirty = true;
                if self.view.is_showing_items_of(&group) {
                    self.push_items(&group).await;
                }
            }
            IngestOutcome::Duplicate => {}
            IngestOutcome::Dropped => warn!("active group rejected clipboard sample"),
        }
    }

    async fn open_group(&mut self, name: String) {
        match self.store.set_active(&name) {
            Ok(()) => self.dirty = true,
            Err(rejection) => debug!(reason = %rejection, "get_group_items: active group unchanged"),
        }
        self.view.select_group(name.clone());
        self.push_items(&name).await;
    }

    async fn after_group_change(&mut self, op: &'static str, result: Result<(), GroupRejection>) {
        match result {
            Ok(()) => {
                self.dirty = true;
                self.publish_groups().await;
            }
            Err(rejection) => debug!(op, reason = %rejection, "group change rejected"),
        }
    }

    fn save_settings(&mut self, settings: Settings) {
        let launch_on_startup = settings.launch_on_startup;
        self.store.set_settings(settings);
        self.dirty = true;
        if let Err(e) = self.autostart.execute(launch_on_startup) {
            warn!(error = %format!("{e:#}"), launch_on_startup, "failed to apply autostart setting");
        }
    }

    fn spawn_paste(&mut self, item: ClipItem) {
        let paste = Arc::clone(&self.paste);
        self.paste_tasks.spawn(async move {
            if let Err(e) = paste.execute(item).await {
                warn!(error = %format!("{e:#}"), "paste failed");
            }
        });
    }

    async fn publish_groups(&mut self) {
        self.view.back();
        if let Err(e) = self.ui.show_groups(&self.store.groups_view()).await {
            warn!(error = %e, "failed to push group list");
        }
    }

    async fn push_items(&self, group: &str) {
        if let Err(e) = self.ui.show_items(self.store.list_items(group)).await {
            warn!(error = %e, group = %group, "failed to push item list");
        }
    }

    fn checkpoint(&mut self) {
        if !self.dirty {
            return;
        }
        self.persister.submit(StoreSnapshot::from(&self.store));
        self.dirty = false;
    }

    async fn shutdown(mut self) -> Result<()> {
        info!(pending_pastes = self.paste_tasks.len(), "store processor shutting down");
        self.paste_tasks.shutdown().await;

        let last = StoreSnapshot::from(&self.store);
        let result = self.persister.shutdown(last).await;
        match &result {
            Ok(()) => info!("final snapshot saved"),
            Err(e) => error!(error = %format!("{e:#}"), "final snapshot save failed"),
        }
        result
    }
}
