use crate::ports::errors::HotkeyError;

pub type HotkeyCallback = Box<dyn Fn() + Send + Sync + 'static>;

/// Global hotkey registration
pub trait HotkeyPort: Send + Sync {
    /// Register `combo` (e.g. `CommandOrControl+Shift+V`). The callback runs on
    /// the host's hotkey thread and must not block.
    fn register(&self, combo: &str, callback: HotkeyCallback) -> Result<(), HotkeyError>;
}
