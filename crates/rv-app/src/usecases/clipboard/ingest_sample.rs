use rv_core::clipboard::{ClipItem, Deduplicator};
use rv_core::store::ClipStore;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Same fingerprint as the previous sample, suppressed.
    Duplicate,
    /// Inserted (or promoted) at the front of `group`.
    Inserted { group: String },
    /// The active group could not take the item.
    Dropped,
}

/// Feeds watcher samples through the global deduplicator into the active
/// group.
///
/// The last fingerprint is shared by all groups: re-copying the previous
/// content after switching groups does not add it to the new group.
#[derive(Debug, Default)]
pub struct IngestClipboardSample {
    dedup: Deduplicator,
}

impl IngestClipboardSample {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute(&mut self, store: &mut ClipStore, sample: ClipItem) -> IngestOutcome {
        if !self.dedup.observe(&sample) {
            return IngestOutcome::Duplicate;
        }

        let group = store.active_group().to_string();
        debug!(group = %group, kind = %sample.kind, preview = %sample.preview(), "ingesting clipboard sample");

        if store.insert_item(&group, sample) {
            IngestOutcome::Inserted { group }
        } else {
            IngestOutcome::Dropped
        }
    }
}
