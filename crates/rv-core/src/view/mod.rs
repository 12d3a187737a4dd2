//! Which screen the UI collaborator is showing.
//!
//! Two states only: the group list and the item list of one group.
//! 只有两个状态：分组列表和某个分组的条目列表。

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Groups,
    Items {
        group: String,
    },
}

impl ViewState {
    /// `GROUPS -> ITEMS` on group selection; selecting again re-targets the list.
    pub fn select_group(&mut self, group: impl Into<String>) {
        *self = ViewState::Items {
            group: group.into(),
        };
    }

    /// `ITEMS -> GROUPS`
    pub fn back(&mut self) {
        *self = ViewState::Groups;
    }

    /// Group whose items are on screen, if any.
    pub fn displayed_group(&self) -> Option<&str> {
        match self {
            ViewState::Groups => None,
            ViewState::Items { group } => Some(group),
        }
    }

    pub fn is_showing_items_of(&self, group: &str) -> bool {
        self.displayed_group() == Some(group)
    }
}
