use std::path::PathBuf;

use rv_core::app_dirs::AppDirs;

pub const SNAPSHOT_FILE_NAME: &str = "rival_app_data.json";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub snapshot_path: PathBuf,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            snapshot_path: dirs.app_data_root.join(SNAPSHOT_FILE_NAME),
            config_path: dirs.app_data_root.join(CONFIG_FILE_NAME),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_paths_derives_concrete_locations_from_app_data_root() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/rival"),
        };

        let paths = AppPaths::from_app_dirs(&dirs);

        assert_eq!(paths.snapshot_path, PathBuf::from("/tmp/rival/rival_app_data.json"));
        assert_eq!(paths.config_path, PathBuf::from("/tmp/rival/config.toml"));
        assert_eq!(paths.logs_dir, PathBuf::from("/tmp/rival/logs"));
    }
}
