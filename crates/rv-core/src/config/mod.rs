//! # Runtime configuration / 运行时配置
//!
//! Data only: the TOML file and CLI flags are mapped onto these structs by the
//! binary's bootstrap. Absent keys keep the values from [`Default`].
//! 仅包含数据结构，TOML 与命令行参数由 bootstrap 映射到这里。

mod app_config;

pub use app_config::{AppConfig, ClipboardConfig, HotkeyConfig, PasteConfig, StorageConfig};
