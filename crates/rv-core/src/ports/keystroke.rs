use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyModifier {
    /// Cmd on macOS
    Command,
    Control,
}

impl KeyModifier {
    /// Modifier of the platform paste shortcut.
    pub fn platform_paste() -> Self {
        if cfg!(target_os = "macos") {
            KeyModifier::Command
        } else {
            KeyModifier::Control
        }
    }
}

/// Synthetic keyboard input
pub trait KeystrokePort: Send + Sync {
    /// Press `key` while holding `modifier`.
    fn send_keystroke(&self, key: char, modifier: KeyModifier) -> Result<()>;
}
