//! Placeholder autostart port implementation
//! 占位符自动启动端口实现

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use rv_core::ports::AutostartPort;
use tracing::info;

/// Records the requested launch-on-login state in memory only.
#[derive(Debug, Default)]
pub struct PlaceholderAutostartPort {
    enabled: AtomicBool,
}

impl PlaceholderAutostartPort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AutostartPort for PlaceholderAutostartPort {
    fn is_enabled(&self) -> Result<bool> {
        Ok(self.enabled.load(Ordering::SeqCst))
    }

    fn enable(&self) -> Result<()> {
        self.enabled.store(true, Ordering::SeqCst);
        info!("autostart enabled (in-memory only)");
        Ok(())
    }

    fn disable(&self) -> Result<()> {
        self.enabled.store(false, Ordering::SeqCst);
        info!("autostart disabled (in-memory only)");
        Ok(())
    }
}
