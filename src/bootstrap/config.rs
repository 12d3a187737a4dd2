//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig / 将 TOML 解析为 AppConfig
//! - ✅ Layer command-line overrides on top / 叠加命令行覆盖项
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business rules / 禁止业务规则**
//!
//! Missing keys fall back to the defaults declared on [`AppConfig`].

use std::path::{Path, PathBuf};

use anyhow::Context;
use rv_core::config::AppConfig;

use crate::cli::Cli;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content).context("Failed to parse config as TOML")
}

/// Resolve the effective configuration.
///
/// An explicit `--config` must load; the per-user `default_path` is optional.
pub fn resolve_config(cli: &Cli, default_path: &Path) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path.clone())?,
        None if default_path.is_file() => load_config(default_path.to_path_buf())?,
        None => AppConfig::default(),
    };
    apply_overrides(&mut config, cli);
    Ok(config)
}

pub fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(path) = &cli.data_file {
        config.storage.snapshot_path = Some(path.clone());
    }
    if let Some(ms) = cli.poll_interval_ms {
        config.clipboard.poll_interval_ms = ms;
    }
    if let Some(secs) = cli.checkpoint_secs {
        config.storage.checkpoint_interval_secs = secs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// 测试有效 TOML 被正确解析
    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            command_queue_capacity = 8

            [clipboard]
            poll_interval_ms = 250

            [storage]
            snapshot_path = "/tmp/rival/data.json"
            checkpoint_interval_secs = 60
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();
        assert_eq!(config.command_queue_capacity, 8);
        assert_eq!(config.clipboard.poll_interval_ms, 250);
        assert_eq!(
            config.storage.snapshot_path,
            Some(PathBuf::from("/tmp/rival/data.json"))
        );
        assert_eq!(config.storage.checkpoint_interval_secs, 60);
        // untouched sections keep their defaults
        assert_eq!(config.paste.delay_ms, 100);
        assert_eq!(config.hotkey.combo, "CommandOrControl+Shift+V");
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[clipboard\npoll_interval_ms = ").unwrap();

        let result = load_config(temp_file.path().to_path_buf());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_missing_file_errors() {
        let result = load_config(PathBuf::from("/nonexistent/rival/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_config_reads_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[paste]\ndelay_ms = 40\n").unwrap();

        let config = resolve_config(&Cli::default(), &path).unwrap();
        assert_eq!(config.paste.delay_ms, 40);
    }

    #[test]
    fn test_resolve_config_without_files_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = resolve_config(&Cli::default(), &dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_cli_overrides_win_over_file() {
        let mut config = AppConfig::default();
        let cli = Cli {
            data_file: Some(PathBuf::from("/tmp/other.json")),
            poll_interval_ms: Some(50),
            checkpoint_secs: Some(5),
            ..Cli::default()
        };

        apply_overrides(&mut config, &cli);
        assert_eq!(
            config.storage.snapshot_path,
            Some(PathBuf::from("/tmp/other.json"))
        );
        assert_eq!(config.clipboard.poll_interval_ms, 50);
        assert_eq!(config.storage.checkpoint_interval_secs, 5);
    }
}
