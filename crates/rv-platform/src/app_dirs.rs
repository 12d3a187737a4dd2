use std::path::PathBuf;

use rv_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "rival";

/// Selects a separate data directory, e.g. `RIVAL_PROFILE=dev` -> `rival-dev`.
pub const PROFILE_ENV: &str = "RIVAL_PROFILE";

fn app_dir_name(profile: Option<&str>) -> String {
    match profile.map(str::trim) {
        Some(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

/// Resolves `<data-local>/rival[-<profile>]` through `dirs`.
#[derive(Debug, Default)]
pub struct DirsAppDirsAdapter {
    base_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn rooted_at(base: impl Into<PathBuf>) -> Self {
        Self {
            base_override: Some(base.into()),
        }
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base = self
            .base_override
            .clone()
            .or_else(dirs::data_local_dir)
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;
        let profile = std::env::var(PROFILE_ENV).ok();

        Ok(AppDirs {
            app_data_root: base.join(app_dir_name(profile.as_deref())),
        })
    }
}
