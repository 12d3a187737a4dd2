//! # Platform Adapters / 平台适配器
//!
//! - `autostart` - In-memory autostart registration
//! - `hotkey` - Combo parsing and a placeholder global hotkey port

pub mod autostart;
pub mod hotkey;

pub use autostart::PlaceholderAutostartPort;
pub use hotkey::PlaceholderHotkeyPort;
