//! Port interfaces for the application layer
//!
//! Every boundary the store engine talks across is a trait here; the
//! platform, infra and binary crates provide the implementations.
//!
//! - clipboard read/write: [`SystemClipboardPort`]
//! - watcher callback: [`ClipboardSampleHandler`]
//! - synthetic paste keystroke: [`KeystrokePort`]
//! - global hotkey: [`HotkeyPort`]
//! - launch on login: [`AutostartPort`]
//! - view pushes: [`UiPort`]
//! - durable snapshot: [`SnapshotStorePort`]

pub mod app_dirs;
pub mod autostart;
pub mod clipboard;
mod clipboard_sample_handler;
pub mod errors;
pub mod hotkey;
pub mod keystroke;
pub mod snapshot_store;
pub mod ui_port;

pub use app_dirs::AppDirsPort;
pub use autostart::AutostartPort;
pub use clipboard::SystemClipboardPort;
pub use clipboard_sample_handler::ClipboardSampleHandler;
pub use errors::{AppDirsError, HotkeyError};
pub use hotkey::{HotkeyCallback, HotkeyPort};
pub use keystroke::{KeyModifier, KeystrokePort};
pub use snapshot_store::SnapshotStorePort;
pub use ui_port::UiPort;
