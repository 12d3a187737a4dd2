use super::ClipStore;
use crate::clipboard::ClipItem;

impl ClipStore {
    /// Insert `item` at the front of `group`, promoting an existing copy and
    /// evicting from the tail past capacity.
    ///
    /// Returns `false` when the group does not exist.
    pub fn insert_item(&mut self, group: &str, item: ClipItem) -> bool {
        match self.group_mut(group) {
            Some(g) => {
                g.promote(item);
                true
            }
            None => {
                tracing::debug!(group = %group, "insert into missing group ignored");
                false
            }
        }
    }

    /// Remove the first copy of `item` from `group`.
    pub fn delete_item(&mut self, group: &str, item: &ClipItem) -> bool {
        self.group_mut(group)
            .map(|g| g.remove(item))
            .unwrap_or(false)
    }

    /// Items of `group`, most recent first; empty when the group is unknown.
    pub fn list_items(&self, group: &str) -> &[ClipItem] {
        self.group(group).map(|g| g.items()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DEFAULT_GROUP, GROUP_CAPACITY};

    fn text(s: &str) -> ClipItem {
        ClipItem::text(s)
    }

    #[test]
    fn inserting_twice_keeps_one_entry_at_front() {
        let mut store = ClipStore::new();
        store.insert_item(DEFAULT_GROUP, text("x"));
        store.insert_item(DEFAULT_GROUP, text("y"));
        store.insert_item(DEFAULT_GROUP, text("y"));

        assert_eq!(store.list_items(DEFAULT_GROUP), &[text("y"), text("x")]);
    }

    #[test]
    fn capacity_keeps_most_recent_twenty() {
        let mut store = ClipStore::new();
        for i in 0..25 {
            store.insert_item(DEFAULT_GROUP, text(&format!("item-{i}")));
        }

        let items = store.list_items(DEFAULT_GROUP);
        assert_eq!(items.len(), GROUP_CAPACITY);
        assert_eq!(items[0], text("item-24"));
        assert_eq!(items[19], text("item-5"));
    }

    #[test]
    fn reinserting_promotes_to_front() {
        let mut store = ClipStore::new();
        for s in ["C", "B", "A"] {
            store.insert_item(DEFAULT_GROUP, text(s));
        }
        assert_eq!(store.list_items(DEFAULT_GROUP), &[text("A"), text("B"), text("C")]);

        store.insert_item(DEFAULT_GROUP, text("C"));

        assert_eq!(store.list_items(DEFAULT_GROUP), &[text("C"), text("A"), text("B")]);
    }

    #[test]
    fn insert_into_missing_group_is_noop() {
        let mut store = ClipStore::new();
        let before = store.clone();

        assert!(!store.insert_item("Nope", text("a")));
        assert_eq!(store, before);
    }

    #[test]
    fn delete_removes_matching_item_only() {
        let mut store = ClipStore::new();
        store.insert_item("Work", text("a"));
        store.insert_item("Work", ClipItem::html("a"));

        assert!(!store.delete_item("Work", &text("missing")));
        assert!(!store.delete_item("Nope", &text("a")));
        assert!(store.delete_item("Work", &text("a")));
        assert_eq!(store.list_items("Work"), &[ClipItem::html("a")]);
    }

    #[test]
    fn list_missing_group_is_empty() {
        assert!(ClipStore::new().list_items("Nope").is_empty());
    }

    #[test]
    fn scenario_notes_lifecycle() {
        let mut store = ClipStore::new();
        store.add_group("Notes").unwrap();
        assert!(store.list_items("Notes").is_empty());

        store.insert_item("Notes", text("hello"));
        store.insert_item("Notes", text("hello"));
        assert_eq!(store.list_items("Notes"), &[text("hello")]);

        store.set_active("Notes").unwrap();
        store.delete_group("Notes").unwrap();
        assert!(store.list_items("Notes").is_empty());
        assert_eq!(store.active_group(), DEFAULT_GROUP);
    }
}
