//! In-memory clipboard history store.
//!
//! [`ClipStore`] owns every group, the active-group pointer and the settings
//! record. History operations live in `history`, group lifecycle in
//! `registry`; both are plain methods so the single owner (the store actor)
//! decides when they run.
mod group;
mod history;
mod registry;

pub use group::{Group, GROUP_CAPACITY};
pub use registry::GroupRejection;

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Reserved group that always exists and can be neither renamed nor deleted.
pub const DEFAULT_GROUP: &str = "Default";

/// Groups present in a fresh store, in display order.
pub const BUILTIN_GROUPS: [&str; 3] = [DEFAULT_GROUP, "Work", "Code Snippets"];

/// Group list pushed to the UI as `show-groups`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupsView {
    pub groups: Vec<String>,
    pub active_group: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipStore {
    groups: Vec<Group>,
    active_group: String,
    settings: Settings,
}

impl Default for ClipStore {
    fn default() -> Self {
        Self {
            groups: BUILTIN_GROUPS.iter().map(|name| Group::new(*name)).collect(),
            active_group: DEFAULT_GROUP.to_string(),
            settings: Settings::default(),
        }
    }
}

impl ClipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a store from loaded parts, repairing anything that would
    /// break the store invariants.
    ///
    /// - empty and repeated group names are dropped (first occurrence wins)
    /// - `Default` is inserted at the front when missing
    /// - a dangling active group falls back to `Default`
    pub fn from_parts(groups: Vec<Group>, active_group: String, settings: Settings) -> Self {
        let mut repaired: Vec<Group> = Vec::with_capacity(groups.len() + 1);
        for group in groups {
            if group.name().is_empty() {
                tracing::warn!("dropping group with empty name from loaded state");
                continue;
            }
            if repaired.iter().any(|g| g.name() == group.name()) {
                tracing::warn!(group = %group.name(), "dropping repeated group from loaded state");
                continue;
            }
            repaired.push(group);
        }
        if !repaired.iter().any(|g| g.name() == DEFAULT_GROUP) {
            repaired.insert(0, Group::new(DEFAULT_GROUP));
        }

        let active_group = if repaired.iter().any(|g| g.name() == active_group) {
            active_group
        } else {
            tracing::warn!(active_group = %active_group, "active group missing, using Default");
            DEFAULT_GROUP.to_string()
        };

        Self {
            groups: repaired,
            active_group,
            settings,
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name() == name)
    }

    pub(crate) fn group_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.name() == name)
    }

    pub fn contains_group(&self, name: &str) -> bool {
        self.group(name).is_some()
    }

    pub fn group_names(&self) -> Vec<String> {
        self.groups.iter().map(|g| g.name().to_string()).collect()
    }

    pub fn active_group(&self) -> &str {
        &self.active_group
    }

    pub fn groups_view(&self) -> GroupsView {
        GroupsView {
            groups: self.group_names(),
            active_group: self.active_group.clone(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Restore built-in settings. Group data is untouched.
    pub fn reset_settings(&mut self) {
        self.settings = Settings::default();
    }
}
