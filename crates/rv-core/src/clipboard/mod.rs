//! Clipboard domain models.
mod dedup;
mod item;
mod payload;

pub use dedup::Deduplicator;
pub use item::{ClipItem, ClipKind, Fingerprint, ImagePayloadError};
pub use payload::ClipboardPayload;
