//! Clipboard sample handler port
//!
//! The platform watcher pushes every sample it reads through this callback;
//! the app layer implements it by forwarding into the store actor.
//! 平台层的 watcher 通过该回调推送样本，应用层负责实现。

use anyhow::Result;

use crate::clipboard::ClipItem;

#[async_trait::async_trait]
pub trait ClipboardSampleHandler: Send + Sync {
    /// Called once per tick that produced a sample. Deduplication happens
    /// downstream, so repeated content is delivered every tick.
    async fn on_sample(&self, sample: ClipItem) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_sample_handler_is_object_safe() {
        fn assert_object_safe(_handler: Option<&dyn ClipboardSampleHandler>) {}
        assert_object_safe(None);
    }
}
