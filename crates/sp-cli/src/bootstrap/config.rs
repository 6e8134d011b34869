//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Pick which file to read / 选择要读取的配置文件
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No business rules / 禁止业务规则**

use anyhow::Context;
use std::path::PathBuf;

use sp_core::config::AppConfig;
use sp_infra::fs::AppDirs;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// **NO validation is performed**: empty strings and missing sections are
/// accepted as facts.
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Choose the configuration source
///
/// 1. `--config <PATH>`, which must exist
/// 2. `config.toml` in the app config dir, when present
/// 3. system defaults
pub fn resolve_config(explicit: Option<PathBuf>, app_dirs: &AppDirs) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let default_path = app_dirs.config_file();
    if default_path.exists() {
        return load_config(default_path);
    }

    Ok(AppConfig::with_system_defaults(app_dirs.data_root.clone()))
}
