//! # rv-platform
//!
//! Platform-specific implementations for Rival.
//!
//! This crate contains the port implementations that talk to the operating
//! system: clipboard access, the clipboard poll watcher, synthetic keystrokes
//! and per-user directories.

pub mod adapters;
pub mod app_dirs;
pub mod clipboard;
pub mod input;

pub use app_dirs::DirsAppDirsAdapter;
pub use clipboard::{ClipboardPollWatcher, LocalClipboard};
pub use input::EnigoKeystroke;
