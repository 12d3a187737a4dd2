use std::path::PathBuf;

/// Per-user root under which the snapshot, config and logs live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}
