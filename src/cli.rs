use std::path::PathBuf;

use clap::Parser;

/// Clipboard history with named groups and paste-back.
///
/// The UI talks to the engine over stdio: one JSON message per line in each
/// direction.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "rival", version, about)]
pub struct Cli {
    /// TOML configuration file (defaults to `config.toml` in the app data dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Snapshot file to load and save
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Clipboard poll period in milliseconds
    #[arg(long, value_name = "MS")]
    pub poll_interval_ms: Option<u64>,

    /// Periodic checkpoint period in seconds, 0 disables
    #[arg(long, value_name = "SECS")]
    pub checkpoint_secs: Option<u64>,
}
