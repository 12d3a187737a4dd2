//! System clipboard port
//!
//! Calls may block on the OS clipboard; async callers run them on a blocking
//! worker.

use anyhow::Result;

use crate::clipboard::{ClipItem, ClipboardPayload};

pub trait SystemClipboardPort: Send + Sync {
    /// Read one sample using the priority image > html > text.
    ///
    /// Returns `Ok(None)` when the clipboard holds nothing usable.
    fn read_sample(&self) -> Result<Option<ClipItem>>;

    /// Replace the clipboard content.
    fn write(&self, payload: ClipboardPayload) -> Result<()>;
}
