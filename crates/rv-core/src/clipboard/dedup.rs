use super::{ClipItem, Fingerprint};

/// Suppresses samples identical to the last one observed.
///
/// The remembered fingerprint is global, not per group: after switching the
/// active group, re-copying the content seen last is still suppressed.
#[derive(Debug, Default, Clone)]
pub struct Deduplicator {
    last: Option<Fingerprint>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `sample` and report whether it differs from the previous one.
    ///
    /// The fingerprint is updated for every distinct sample, regardless of
    /// what the caller later does with it.
    pub fn observe(&mut self, sample: &ClipItem) -> bool {
        if self.last.as_ref().is_some_and(|last| sample.matches(last)) {
            return false;
        }
        self.last = Some(sample.fingerprint());
        true
    }

    pub fn last(&self) -> Option<&Fingerprint> {
        self.last.as_ref()
    }
}
