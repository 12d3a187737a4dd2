use super::model::Settings;

pub const DEFAULT_THEME: &str = "dark";
pub const DEFAULT_EXIT_KEY: &str = "Escape";
pub const DEFAULT_LAUNCH_ON_STARTUP: bool = true;

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            exit_key: DEFAULT_EXIT_KEY.to_string(),
            launch_on_startup: DEFAULT_LAUNCH_ON_STARTUP,
        }
    }
}
