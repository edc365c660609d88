use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::storage::DEFAULT_STORAGE_FILE;

const APP_DIR_NAME: &str = "pagekit";
const CONFIG_FILE: &str = "config.toml";

fn resolved_app_dir_name() -> String {
    match std::env::var("PAGEKIT_PROFILE") {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

/// Get the pagekit application data root directory.
///
/// # Platform-specific Paths
/// - macOS: ~/Library/Application Support/pagekit
/// - Windows: %APPDATA%\pagekit
/// - Linux: $XDG_DATA_HOME/pagekit or ~/.local/share/pagekit
///
/// A non-empty `PAGEKIT_PROFILE` appends `-<profile>` to the directory name.
///
/// Does not create the directory.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir =
        get_platform_data_dir().context("Failed to get platform-specific data directory")?;

    Ok(base_dir.join(resolved_app_dir_name()))
}

pub fn default_config_file() -> Result<PathBuf> {
    Ok(app_data_dir()?.join(CONFIG_FILE))
}

pub fn default_storage_file() -> Result<PathBuf> {
    Ok(app_data_dir()?.join(DEFAULT_STORAGE_FILE))
}

fn get_platform_data_dir() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_data_home) = std::env::var_os("XDG_DATA_HOME") {
            return Ok(PathBuf::from(xdg_data_home));
        }
    }

    dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to get platform data directory"))
}
