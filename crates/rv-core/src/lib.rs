//! # rv-core
//!
//! Core domain models and business logic for Rival.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod app_dirs;
pub mod clipboard;
pub mod config;
pub mod ports;
pub mod settings;
pub mod snapshot;
pub mod store;
pub mod view;

// Re-export commonly used types at the crate root
pub use clipboard::{ClipItem, ClipKind, ClipboardPayload, Deduplicator, Fingerprint};
pub use config::AppConfig;
pub use settings::Settings;
pub use snapshot::{SnapshotCodecError, StoreSnapshot};
pub use store::{ClipStore, Group, GroupRejection, GroupsView, DEFAULT_GROUP, GROUP_CAPACITY};
pub use view::ViewState;
