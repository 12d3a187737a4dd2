//! # Application Dependencies / 应用依赖
//!
//! Plain parameter grouping for wiring the store processor. No defaults and
//! no build steps.
//! 仅用于参数打包，无默认值，无构建步骤。

use std::sync::Arc;

use rv_core::ports::*;

pub struct AppDeps {
    // Clipboard / 剪贴板
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub keystroke: Arc<dyn KeystrokePort>,

    // Storage / 存储
    pub snapshots: Arc<dyn SnapshotStorePort>,

    // Host integration / 宿主集成
    pub autostart: Arc<dyn AutostartPort>,
    pub hotkey: Arc<dyn HotkeyPort>,

    // UI
    pub ui: Arc<dyn UiPort>,
}
