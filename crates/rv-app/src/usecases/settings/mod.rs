mod apply_autostart;

pub use apply_autostart::ApplyAutostartSetting;
