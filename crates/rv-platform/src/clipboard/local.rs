use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use clipboard_rs::ClipboardContext;
use rv_core::clipboard::{ClipItem, ClipboardPayload};
use rv_core::ports::SystemClipboardPort;

use super::common;

/// System clipboard backed by `clipboard-rs`.
pub struct LocalClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

impl LocalClipboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!(e))
            .context("ClipboardContext::new failed")?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }

    fn with_context<T>(&self, f: impl FnOnce(&ClipboardContext) -> Result<T>) -> Result<T> {
        let ctx = self
            .inner
            .lock()
            .map_err(|_| anyhow!("clipboard context lock poisoned"))?;
        f(&ctx)
    }
}

impl SystemClipboardPort for LocalClipboard {
    fn read_sample(&self) -> Result<Option<ClipItem>> {
        self.with_context(|ctx| common::read_sample(ctx))
    }

    fn write(&self, payload: ClipboardPayload) -> Result<()> {
        let format = payload.format_name();
        self.with_context(|ctx| common::write_payload(ctx, payload))
            .with_context(|| format!("write {format} to clipboard failed"))
    }
}
