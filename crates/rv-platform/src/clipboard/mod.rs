mod common;
mod local;
mod watcher;

pub use common::{read_sample, write_payload, ClipboardFormats};
pub use local::LocalClipboard;
pub use watcher::ClipboardPollWatcher;
