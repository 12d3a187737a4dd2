use crate::clipboard::ClipItem;

/// Maximum number of items retained per group.
pub const GROUP_CAPACITY: usize = 20;

/// A named, bounded, duplicate-free history ordered most-recent-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    items: Vec<ClipItem>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Build a group from stored items, dropping later duplicates and
    /// anything past [`GROUP_CAPACITY`].
    pub fn with_items(name: impl Into<String>, items: Vec<ClipItem>) -> Self {
        let mut kept: Vec<ClipItem> = Vec::with_capacity(items.len().min(GROUP_CAPACITY));
        for item in items {
            if kept.len() == GROUP_CAPACITY {
                break;
            }
            if !kept.contains(&item) {
                kept.push(item);
            }
        }
        Self {
            name: name.into(),
            items: kept,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[ClipItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Move `item` to the front, removing any earlier copy and evicting from
    /// the tail past capacity.
    pub(crate) fn promote(&mut self, item: ClipItem) {
        let fingerprint = item.fingerprint();
        if let Some(pos) = self.items.iter().position(|i| i.matches(&fingerprint)) {
            self.items.remove(pos);
        }
        self.items.insert(0, item);
        self.items.truncate(GROUP_CAPACITY);
    }

    /// Remove the first item equal to `item`. Returns whether anything was removed.
    pub(crate) fn remove(&mut self, item: &ClipItem) -> bool {
        let fingerprint = item.fingerprint();
        match self.items.iter().position(|i| i.matches(&fingerprint)) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
