//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (snapshot file) / 创建 infra 层具体实现
//! - ✅ Create platform implementations (clipboard, keystrokes, hotkey) / 创建 platform 层具体实现
//! - ✅ Bundle them into [`AppDeps`] / 打包为 AppDeps
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//! - Loading the store and applying settings happen in `run.rs`
//! - 加载存储与应用设置在 run.rs 中完成
//!
//! > **This is the only place allowed to depend on rv-infra + rv-platform + rv-app simultaneously.**
//! > **这是唯一允许同时依赖 rv-infra、rv-platform 和 rv-app 的地方。**

use std::path::PathBuf;
use std::sync::Arc;

use rv_app::{AppDeps, AppPaths};
use rv_core::config::AppConfig;
use rv_core::ports::{AppDirsError, AppDirsPort, UiPort};
use rv_infra::snapshot::FileSnapshotRepository;
use rv_platform::adapters::{PlaceholderAutostartPort, PlaceholderHotkeyPort};
use rv_platform::{DirsAppDirsAdapter, EnigoKeystroke, LocalClipboard};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WiringError {
    #[error("failed to resolve app directories: {0}")]
    AppDirs(#[from] AppDirsError),

    #[error("failed to open system clipboard: {0}")]
    ClipboardInit(String),
}

/// Resolve the per-user locations (snapshot file, logs directory).
pub fn resolve_app_paths() -> Result<AppPaths, WiringError> {
    let dirs = DirsAppDirsAdapter::new().get_app_dirs()?;
    Ok(AppPaths::from_app_dirs(&dirs))
}

/// The snapshot location: configured override first, app data dir otherwise.
pub fn snapshot_path(config: &AppConfig, paths: &AppPaths) -> PathBuf {
    config
        .storage
        .snapshot_path
        .clone()
        .unwrap_or_else(|| paths.snapshot_path.clone())
}

/// Wire every port to its concrete implementation.
/// 将每个端口连接到具体实现。
pub fn wire_dependencies(
    config: &AppConfig,
    paths: &AppPaths,
    ui: Arc<dyn UiPort>,
) -> Result<AppDeps, WiringError> {
    let clipboard =
        LocalClipboard::new().map_err(|e| WiringError::ClipboardInit(format!("{e:#}")))?;

    Ok(AppDeps {
        clipboard: Arc::new(clipboard),
        keystroke: Arc::new(EnigoKeystroke::new()),
        snapshots: Arc::new(FileSnapshotRepository::new(snapshot_path(config, paths))),
        autostart: Arc::new(PlaceholderAutostartPort::new()),
        hotkey: Arc::new(PlaceholderHotkeyPort),
        ui,
    })
}
