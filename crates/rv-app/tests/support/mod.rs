#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use rv_app::{spawn_store_processor, AppDeps, ProcessorHandle, ProcessorOptions};
use rv_core::clipboard::{ClipItem, ClipboardPayload};
use rv_core::ports::{
    AutostartPort, HotkeyCallback, HotkeyError, HotkeyPort, KeyModifier, KeystrokePort,
    SnapshotStorePort, SystemClipboardPort, UiPort,
};
use rv_core::snapshot::StoreSnapshot;
use rv_core::store::{ClipStore, GroupsView};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Groups(GroupsView),
    Items(Vec<ClipItem>),
    ShowWindow,
    HideWindow,
}

#[derive(Default)]
pub struct RecordingUi {
    events: Mutex<Vec<UiEvent>>,
}

impl RecordingUi {
    pub fn take(&self) -> Vec<UiEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }

    fn push(&self, event: UiEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl UiPort for RecordingUi {
    async fn show_groups(&self, view: &GroupsView) -> Result<()> {
        self.push(UiEvent::Groups(view.clone()));
        Ok(())
    }

    async fn show_items(&self, items: &[ClipItem]) -> Result<()> {
        self.push(UiEvent::Items(items.to_vec()));
        Ok(())
    }

    async fn show_window(&self) -> Result<()> {
        self.push(UiEvent::ShowWindow);
        Ok(())
    }

    async fn hide_window(&self) -> Result<()> {
        self.push(UiEvent::HideWindow);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemorySnapshots {
    pub stored: Mutex<Option<StoreSnapshot>>,
    pub saves: AtomicUsize,
    pub fail_saves: AtomicBool,
}

impl MemorySnapshots {
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Option<StoreSnapshot> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl SnapshotStorePort for MemorySnapshots {
    async fn load(&self) -> Result<Option<StoreSnapshot>> {
        Ok(self.stored())
    }

    async fn save(&self, snapshot: &StoreSnapshot) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            anyhow::bail!("disk full");
        }
        *self.stored.lock().unwrap() = Some(snapshot.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: Mutex<Vec<ClipboardPayload>>,
}

impl SystemClipboardPort for RecordingClipboard {
    fn read_sample(&self) -> Result<Option<ClipItem>> {
        Ok(None)
    }

    fn write(&self, payload: ClipboardPayload) -> Result<()> {
        self.writes.lock().unwrap().push(payload);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingKeystroke {
    pub sent: Mutex<Vec<(char, KeyModifier)>>,
}

impl RecordingKeystroke {
    pub fn sent(&self) -> Vec<(char, KeyModifier)> {
        self.sent.lock().unwrap().clone()
    }
}

impl KeystrokePort for RecordingKeystroke {
    fn send_keystroke(&self, key: char, modifier: KeyModifier) -> Result<()> {
        self.sent.lock().unwrap().push((key, modifier));
        Ok(())
    }
}

#[derive(Default)]
pub struct FlagAutostart {
    pub enabled: AtomicBool,
    pub changes: AtomicUsize,
}

impl AutostartPort for FlagAutostart {
    fn is_enabled(&self) -> Result<bool> {
        Ok(self.enabled.load(Ordering::SeqCst))
    }

    fn enable(&self) -> Result<()> {
        self.enabled.store(true, Ordering::SeqCst);
        self.changes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn disable(&self) -> Result<()> {
        self.enabled.store(false, Ordering::SeqCst);
        self.changes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub struct NoHotkey;

impl HotkeyPort for NoHotkey {
    fn register(&self, _combo: &str, _callback: HotkeyCallback) -> Result<(), HotkeyError> {
        Err(HotkeyError::Unsupported)
    }
}

pub struct Harness {
    pub handle: ProcessorHandle,
    pub join: JoinHandle<()>,
    pub ui: Arc<RecordingUi>,
    pub snapshots: Arc<MemorySnapshots>,
    pub clipboard: Arc<RecordingClipboard>,
    pub keystroke: Arc<RecordingKeystroke>,
    pub autostart: Arc<FlagAutostart>,
}

impl Harness {
    pub fn start(store: ClipStore, options: ProcessorOptions) -> Self {
        let ui = Arc::new(RecordingUi::default());
        let snapshots = Arc::new(MemorySnapshots::default());
        let clipboard = Arc::new(RecordingClipboard::default());
        let keystroke = Arc::new(RecordingKeystroke::default());
        let autostart = Arc::new(FlagAutostart::default());

        let deps = AppDeps {
            clipboard: clipboard.clone(),
            keystroke: keystroke.clone(),
            snapshots: snapshots.clone(),
            autostart: autostart.clone(),
            hotkey: Arc::new(NoHotkey),
            ui: ui.clone(),
        };
        let (handle, join) = spawn_store_processor(&deps, store, options);

        Self {
            handle,
            join,
            ui,
            snapshots,
            clipboard,
            keystroke,
            autostart,
        }
    }

    pub fn with_defaults() -> Self {
        Self::start(ClipStore::new(), ProcessorOptions::default())
    }

    /// Wait until every previously queued command has been applied.
    pub async fn settle(&self) -> StoreSnapshot {
        self.handle.snapshot().await.unwrap()
    }
}

/// Poll `check` until it holds or two seconds pass.
pub async fn eventually(mut check: impl FnMut() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while tokio::time::Instant::now() < deadline {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    check()
}
