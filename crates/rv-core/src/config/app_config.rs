use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub clipboard: ClipboardConfig,
    pub paste: PasteConfig,
    pub storage: StorageConfig,
    pub hotkey: HotkeyConfig,

    /// Capacity of the store actor's command queue
    pub command_queue_capacity: usize,
}

/// Clipboard polling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Tick period of the clipboard watcher, in milliseconds
    pub poll_interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasteConfig {
    /// Delay between hiding the window and the paste keystroke, in milliseconds
    /// 隐藏窗口与发送粘贴按键之间的等待时间（毫秒）
    pub delay_ms: u64,
}

/// Snapshot storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides the snapshot location under the app data directory
    pub snapshot_path: Option<PathBuf>,

    /// Periodic checkpoint period in seconds; `0` saves only at shutdown
    pub checkpoint_interval_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyConfig {
    pub combo: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            clipboard: ClipboardConfig::default(),
            paste: PasteConfig::default(),
            storage: StorageConfig::default(),
            hotkey: HotkeyConfig::default(),
            command_queue_capacity: 64,
        }
    }
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 500,
        }
    }
}

impl Default for PasteConfig {
    fn default() -> Self {
        Self { delay_ms: 100 }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            checkpoint_interval_secs: 0,
        }
    }
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            combo: "CommandOrControl+Shift+V".to_string(),
        }
    }
}

impl AppConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.clipboard.poll_interval_ms.max(1))
    }

    pub fn paste_delay(&self) -> Duration {
        Duration::from_millis(self.paste.delay_ms)
    }

    /// `None` when periodic checkpoints are disabled.
    pub fn checkpoint_interval(&self) -> Option<Duration> {
        match self.storage.checkpoint_interval_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_timings() {
        let config = AppConfig::default();

        assert_eq!(config.poll_interval(), Duration::from_millis(500));
        assert_eq!(config.paste_delay(), Duration::from_millis(100));
        assert_eq!(config.checkpoint_interval(), None);
        assert_eq!(config.hotkey.combo, "CommandOrControl+Shift+V");
    }

    #[test]
    fn zero_poll_interval_is_clamped() {
        let mut config = AppConfig::default();
        config.clipboard.poll_interval_ms = 0;

        assert_eq!(config.poll_interval(), Duration::from_millis(1));
    }

    #[test]
    fn checkpoint_enabled_when_positive() {
        let mut config = AppConfig::default();
        config.storage.checkpoint_interval_secs = 30;

        assert_eq!(config.checkpoint_interval(), Some(Duration::from_secs(30)));
    }
}
