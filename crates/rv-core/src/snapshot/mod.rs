//! Durable snapshot schema.
//!
//! ```json
//! { "theme": "dark", "exitKey": "Escape", "launchOnStartup": true,
//!   "activeGroup": "Default",
//!   "clipboardStore": { "Default": [ { "type": "text", "content": "hi" } ] } }
//! ```
//!
//! Every field is optional on read and merged one by one: a field that is
//! absent, `null` or of the wrong type keeps the built-in default without
//! affecting the others. Only text that is not a JSON object fails to decode.
//! Group order is preserved.
mod ordered_groups;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::clipboard::ClipItem;
use crate::settings::Settings;
use crate::store::{ClipStore, Group, DEFAULT_GROUP};

#[derive(Debug, Error)]
pub enum SnapshotCodecError {
    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSnapshot")]
pub struct StoreSnapshot {
    pub theme: String,
    pub exit_key: String,
    pub launch_on_startup: bool,
    pub active_group: String,
    #[serde(serialize_with = "ordered_groups::serialize")]
    pub clipboard_store: Vec<(String, Vec<ClipItem>)>,
}

/// On-disk shape before merging over defaults. `null` reads as absent.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    #[serde(default)]
    theme: Option<Value>,
    #[serde(default)]
    exit_key: Option<Value>,
    #[serde(default)]
    launch_on_startup: Option<Value>,
    #[serde(default)]
    active_group: Option<Value>,
    #[serde(default, deserialize_with = "ordered_groups::deserialize")]
    clipboard_store: Option<ordered_groups::OrderedGroups>,
}

fn merge_field<T: DeserializeOwned>(field: &'static str, value: Option<Value>, fallback: T) -> T {
    let Some(value) = value else {
        return fallback;
    };
    serde_json::from_value(value).unwrap_or_else(|e| {
        warn!(field, error = %e, "ignoring invalid snapshot field");
        fallback
    })
}

impl From<RawSnapshot> for StoreSnapshot {
    fn from(raw: RawSnapshot) -> Self {
        let defaults = StoreSnapshot::default();
        Self {
            theme: merge_field("theme", raw.theme, defaults.theme),
            exit_key: merge_field("exitKey", raw.exit_key, defaults.exit_key),
            launch_on_startup: merge_field(
                "launchOnStartup",
                raw.launch_on_startup,
                defaults.launch_on_startup,
            ),
            active_group: merge_field("activeGroup", raw.active_group, defaults.active_group),
            clipboard_store: raw.clipboard_store.unwrap_or(defaults.clipboard_store),
        }
    }
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self::from(&ClipStore::default())
    }
}

impl From<&ClipStore> for StoreSnapshot {
    fn from(store: &ClipStore) -> Self {
        let settings = store.settings();
        Self {
            theme: settings.theme.clone(),
            exit_key: settings.exit_key.clone(),
            launch_on_startup: settings.launch_on_startup,
            active_group: store.active_group().to_string(),
            clipboard_store: store
                .groups()
                .iter()
                .map(|g| (g.name().to_string(), g.items().to_vec()))
                .collect(),
        }
    }
}

impl StoreSnapshot {
    pub fn from_json(raw: &str) -> Result<Self, SnapshotCodecError> {
        serde_json::from_str(raw).map_err(SnapshotCodecError::Decode)
    }

    pub fn to_json_pretty(&self) -> Result<String, SnapshotCodecError> {
        serde_json::to_string_pretty(self).map_err(SnapshotCodecError::Encode)
    }

    pub fn settings(&self) -> Settings {
        Settings {
            theme: self.theme.clone(),
            exit_key: self.exit_key.clone(),
            launch_on_startup: self.launch_on_startup,
        }
    }

    /// Rebuild the in-memory store, repairing invariants the file may break.
    pub fn into_store(self) -> ClipStore {
        let settings = self.settings();
        let groups = self
            .clipboard_store
            .into_iter()
            .map(|(name, items)| Group::with_items(name, items))
            .collect();
        let active_group = if self.active_group.is_empty() {
            DEFAULT_GROUP.to_string()
        } else {
            self.active_group
        };
        ClipStore::from_parts(groups, active_group, settings)
    }
}
