use std::path::PathBuf;

use anyhow::Context;

const APP_DIR_NAME: &str = "scholarship-portal";

/// Resolved application directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    /// Credential store, logs
    pub data_root: PathBuf,
    /// `config.toml`
    pub config_root: PathBuf,
}

impl AppDirs {
    pub fn logs_dir(&self) -> PathBuf {
        self.data_root.join("logs")
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_root.join("config.toml")
    }
}

/// `SP_PROFILE` gives each profile its own directory tree.
fn resolved_app_dir_name() -> String {
    match std::env::var("SP_PROFILE") {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

pub struct DirsAppDirs {
    base_override: Option<PathBuf>,
}

impl DirsAppDirs {
    pub fn new() -> Self {
        Self {
            base_override: None,
        }
    }

    /// Resolve every directory under `base` instead of the system locations.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            base_override: Some(base),
        }
    }

    /// Resolve directories; nothing is created on disk.
    pub fn get_app_dirs(&self) -> anyhow::Result<AppDirs> {
        let app_dir_name = resolved_app_dir_name();
        if let Some(base) = &self.base_override {
            let root = base.join(&app_dir_name);
            return Ok(AppDirs {
                data_root: root.clone(),
                config_root: root,
            });
        }

        let data = dirs::data_local_dir().context("Unable to get local data directory")?;
        let config = dirs::config_dir().context("Unable to get config directory")?;
        Ok(AppDirs {
            data_root: data.join(&app_dir_name),
            config_root: config.join(&app_dir_name),
        })
    }
}

impl Default for DirsAppDirs {
    fn default() -> Self {
        Self::new()
    }
}
