//! # Application lifecycle / 应用生命周期
//!
//! Startup order:
//! 1. resolve config and wire ports
//! 2. load the snapshot (defaults are written back when missing or corrupt)
//! 3. apply the persisted autostart setting
//! 4. start the store processor, hotkey and clipboard watcher
//! 5. serve UI requests until `quit-app`, end of input or Ctrl-C
//!
//! Shutdown stops the watcher first so no sample races the final save.

use std::sync::Arc;

use anyhow::Context;
use rv_app::usecases::{ApplyAutostartSetting, LoadStore};
use rv_app::{spawn_store_processor, AppPaths, ProcessorHandle, ProcessorOptions};
use rv_core::config::AppConfig;
use rv_core::ports::{HotkeyCallback, HotkeyError, HotkeyPort};
use rv_platform::ClipboardPollWatcher;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use super::config::resolve_config;
use super::wiring::{snapshot_path, wire_dependencies};
use crate::adapters::StdoutUiPort;
use crate::cli::Cli;
use crate::ipc::serve_requests;

pub fn processor_options(config: &AppConfig) -> ProcessorOptions {
    ProcessorOptions {
        queue_capacity: config.command_queue_capacity,
        paste_delay: config.paste_delay(),
        checkpoint_interval: config.checkpoint_interval(),
    }
}

/// Run until the UI quits. Returns the outcome of the final snapshot save.
pub async fn run_app(cli: Cli, paths: AppPaths) -> anyhow::Result<()> {
    let config = resolve_config(&cli, &paths.config_path)?;
    let events = Arc::new(StdoutUiPort::stdout());
    let deps = wire_dependencies(&config, &paths, events.clone())?;
    info!(
        snapshot = %snapshot_path(&config, &paths).display(),
        poll_ms = config.clipboard.poll_interval_ms,
        "starting rival"
    );

    let store = LoadStore::new(Arc::clone(&deps.snapshots)).execute().await;
    let launch_on_startup = store.settings().launch_on_startup;
    if let Err(e) = ApplyAutostartSetting::new(Arc::clone(&deps.autostart)).execute(launch_on_startup)
    {
        warn!(error = %e, "failed to apply autostart setting");
    }

    let (processor, processor_join) =
        spawn_store_processor(&deps, store, processor_options(&config));

    register_hotkey(deps.hotkey.as_ref(), &config.hotkey.combo, processor.clone());

    let cancel = CancellationToken::new();
    let watcher = ClipboardPollWatcher::new(
        Arc::clone(&deps.clipboard),
        Arc::new(processor.clone()),
        config.poll_interval(),
    )
    .spawn(cancel.clone());

    let stdin = BufReader::new(tokio::io::stdin());
    tokio::select! {
        result = serve_requests(stdin, &processor, events.as_ref()) => {
            if let Err(e) = result {
                error!(error = %format!("{e:#}"), "UI channel failed");
            }
        }
        _ = tokio::signal::ctrl_c() => info!("interrupt received"),
    }

    info!("shutting down");
    cancel.cancel();
    if let Err(e) = watcher.await {
        warn!(error = %e, "clipboard watcher task failed");
    }

    let saved = processor.shutdown().await;
    if let Err(e) = processor_join.await {
        error!(error = %e, "store processor task failed");
    }
    saved.context("final snapshot save failed")
}

/// 注册全局快捷键；失败时仅记录日志。
fn register_hotkey(hotkey: &dyn HotkeyPort, combo: &str, processor: ProcessorHandle) {
    let callback: HotkeyCallback = Box::new(move || {
        if let Err(e) = processor.trigger_launcher() {
            warn!(error = %e, "launcher trigger dropped");
        }
    });

    match hotkey.register(combo, callback) {
        Ok(()) => info!(combo, "global hotkey registered"),
        Err(HotkeyError::Unsupported) => {
            warn!(combo, "global hotkeys are unavailable, the launcher opens on UI request only")
        }
        Err(e) => warn!(error = %e, "hotkey registration failed"),
    }
}
