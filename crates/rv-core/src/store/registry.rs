use thiserror::Error;

use super::{ClipStore, Group, DEFAULT_GROUP};

/// Reason a group lifecycle request was refused. The store is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupRejection {
    #[error("group name must not be empty")]
    EmptyName,

    #[error("group `{0}` already exists")]
    AlreadyExists(String),

    #[error("group `{0}` does not exist")]
    NotFound(String),

    #[error("the `Default` group cannot be renamed or deleted")]
    ReservedDefault,
}

impl ClipStore {
    /// Append a new empty group.
    pub fn add_group(&mut self, name: &str) -> Result<(), GroupRejection> {
        if name.is_empty() {
            return Err(GroupRejection::EmptyName);
        }
        if self.contains_group(name) {
            return Err(GroupRejection::AlreadyExists(name.to_string()));
        }
        self.groups.push(Group::new(name));
        Ok(())
    }

    /// Delete a group and its items. Resets the active pointer to `Default`
    /// when the deleted group was active.
    pub fn delete_group(&mut self, name: &str) -> Result<(), GroupRejection> {
        if name == DEFAULT_GROUP {
            return Err(GroupRejection::ReservedDefault);
        }
        let pos = self
            .groups
            .iter()
            .position(|g| g.name() == name)
            .ok_or_else(|| GroupRejection::NotFound(name.to_string()))?;
        self.groups.remove(pos);
        if self.active_group == name {
            self.active_group = DEFAULT_GROUP.to_string();
        }
        Ok(())
    }

    /// Rename a group in place, carrying its items and the active pointer.
    pub fn rename_group(&mut self, old: &str, new: &str) -> Result<(), GroupRejection> {
        if old == DEFAULT_GROUP {
            return Err(GroupRejection::ReservedDefault);
        }
        if new.is_empty() {
            return Err(GroupRejection::EmptyName);
        }
        if self.contains_group(new) {
            return Err(GroupRejection::AlreadyExists(new.to_string()));
        }
        let group = self
            .group_mut(old)
            .ok_or_else(|| GroupRejection::NotFound(old.to_string()))?;
        group.rename(new);
        if self.active_group == old {
            self.active_group = new.to_string();
        }
        Ok(())
    }

    /// Point ingestion and display at `name`. Unknown names are refused so the
    /// pointer always resolves.
    pub fn set_active(&mut self, name: &str) -> Result<(), GroupRejection> {
        if !self.contains_group(name) {
            return Err(GroupRejection::NotFound(name.to_string()));
        }
        self.active_group = name.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipItem;

    #[test]
    fn add_rejects_empty_and_existing_names() {
        let mut store = ClipStore::new();

        assert_eq!(store.add_group(""), Err(GroupRejection::EmptyName));
        assert_eq!(
            store.add_group("Work"),
            Err(GroupRejection::AlreadyExists("Work".into()))
        );
        assert_eq!(store.groups().len(), 3);

        store.add_group("Notes").unwrap();
        assert_eq!(store.group_names().last().map(String::as_str), Some("Notes"));
    }

    #[test]
    fn default_group_cannot_be_deleted_or_renamed() {
        let mut store = ClipStore::new();
        store.insert_item(DEFAULT_GROUP, ClipItem::text("a"));
        store.set_active("Work").unwrap();
        let before = store.clone();

        assert_eq!(store.delete_group(DEFAULT_GROUP), Err(GroupRejection::ReservedDefault));
        assert_eq!(
            store.rename_group(DEFAULT_GROUP, "X"),
            Err(GroupRejection::ReservedDefault)
        );
        assert_eq!(store, before);
    }

    #[test]
    fn deleting_active_group_resets_pointer() {
        let mut store = ClipStore::new();
        store.set_active("Work").unwrap();

        store.delete_group("Work").unwrap();

        assert_eq!(store.active_group(), DEFAULT_GROUP);
        assert!(!store.contains_group("Work"));
    }

    #[test]
    fn deleting_inactive_group_keeps_pointer() {
        let mut store = ClipStore::new();
        store.set_active("Work").unwrap();

        store.delete_group("Code Snippets").unwrap();

        assert_eq!(store.active_group(), "Work");
        assert_eq!(
            store.delete_group("Code Snippets"),
            Err(GroupRejection::NotFound("Code Snippets".into()))
        );
    }

    #[test]
    fn rename_moves_items_position_and_active_pointer() {
        let mut store = ClipStore::new();
        store.insert_item("Work", ClipItem::text("a"));
        store.set_active("Work").unwrap();

        store.rename_group("Work", "Job").unwrap();

        assert_eq!(store.group_names(), vec!["Default", "Job", "Code Snippets"]);
        assert_eq!(store.active_group(), "Job");
        assert_eq!(store.list_items("Job"), &[ClipItem::text("a")]);
        assert!(store.list_items("Work").is_empty());
    }

    #[test]
    fn rename_rejections_leave_store_untouched() {
        let mut store = ClipStore::new();
        let before = store.clone();

        assert_eq!(store.rename_group("Work", ""), Err(GroupRejection::EmptyName));
        assert_eq!(
            store.rename_group("Work", "Code Snippets"),
            Err(GroupRejection::AlreadyExists("Code Snippets".into()))
        );
        assert_eq!(
            store.rename_group("Missing", "Other"),
            Err(GroupRejection::NotFound("Missing".into()))
        );
        assert_eq!(store, before);
    }

    #[test]
    fn set_active_refuses_unknown_group() {
        let mut store = ClipStore::new();

        assert_eq!(
            store.set_active("Nope"),
            Err(GroupRejection::NotFound("Nope".into()))
        );
        assert_eq!(store.active_group(), DEFAULT_GROUP);
    }
}
