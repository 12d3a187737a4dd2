use serde::{Deserialize, Serialize};

/// User-facing settings record, exchanged with the UI as
/// `{theme, exitKey, launchOnStartup}`.
///
/// Missing fields fall back to the built-in defaults when deserializing, so a
/// partial `save-settings` payload resets the fields it omits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// UI theme name, e.g. `dark` / `light`
    pub theme: String,

    /// Key name that closes the window
    /// 关闭窗口的按键名
    pub exit_key: String,

    pub launch_on_startup: bool,
}
