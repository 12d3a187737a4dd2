mod ingest_sample;
mod paste_item;

pub use ingest_sample::{IngestClipboardSample, IngestOutcome};
pub use paste_item::{payload_for, strip_markup, PasteItem};
