use rv_core::ports::{HotkeyCallback, HotkeyError, HotkeyPort};
use tracing::warn;

const MODIFIERS: [&str; 6] = ["CommandOrControl", "Command", "Control", "Ctrl", "Shift", "Alt"];

/// Validate a combo such as `CommandOrControl+Shift+V`: modifiers first, then
/// exactly one non-modifier key.
pub fn parse_combo(combo: &str) -> Result<(Vec<&str>, &str), HotkeyError> {
    let parts: Vec<&str> = combo.split('+').map(str::trim).collect();
    let invalid = || HotkeyError::InvalidCombo(combo.to_string());

    let (key, modifiers) = parts.split_last().ok_or_else(invalid)?;
    if key.is_empty() || MODIFIERS.contains(key) {
        return Err(invalid());
    }
    if modifiers.iter().any(|m| !MODIFIERS.contains(m)) {
        return Err(invalid());
    }
    Ok((modifiers.to_vec(), key))
}

/// Placeholder hotkey port: no global shortcut backend is wired yet.
/// 占位符快捷键端口，尚未接入全局快捷键后端。
///
/// Registration validates the combo and then reports
/// [`HotkeyError::Unsupported`]; the launcher stays reachable through
/// `request-groups-view`. The callback contract is exercised by the
/// bootstrap tests with a capturing port.
#[derive(Debug, Default, Clone)]
pub struct PlaceholderHotkeyPort;

impl HotkeyPort for PlaceholderHotkeyPort {
    fn register(&self, combo: &str, _callback: HotkeyCallback) -> Result<(), HotkeyError> {
        parse_combo(combo)?;
        warn!(combo = %combo, "global hotkeys are not available on this host");
        Err(HotkeyError::Unsupported)
    }
}
