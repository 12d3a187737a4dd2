use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}

#[derive(Debug, Error)]
pub enum HotkeyError {
    #[error("global hotkeys are not supported by this host")]
    Unsupported,

    #[error("invalid hotkey combo `{0}`")]
    InvalidCombo(String),

    #[error("failed to register hotkey `{combo}`: {reason}")]
    Registration { combo: String, reason: String },
}
