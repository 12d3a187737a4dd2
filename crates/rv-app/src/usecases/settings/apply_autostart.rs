use std::sync::Arc;

use anyhow::Result;
use rv_core::ports::AutostartPort;
use tracing::debug;

/// Brings the launch-on-login registration in line with the setting.
pub struct ApplyAutostartSetting {
    autostart: Arc<dyn AutostartPort>,
}

impl ApplyAutostartSetting {
    pub fn new(autostart: Arc<dyn AutostartPort>) -> Self {
        Self { autostart }
    }

    pub fn execute(&self, enabled: bool) -> Result<()> {
        if self.autostart.is_enabled()? == enabled {
            debug!(enabled, "autostart already in requested state");
            return Ok(());
        }

        if enabled {
            self.autostart.enable()
        } else {
            self.autostart.disable()
        }
    }
}
