//! # Configuration Loader
//!
//! Reads TOML files into [`SiteConfig`]. Pure data loading: no validation,
//! missing keys keep their defaults.

use std::path::{Path, PathBuf};

use anyhow::Context;
use pk_core::SiteConfig;
use tracing::debug;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<SiteConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    Ok(SiteConfig::from_toml(&toml_value))
}

/// Resolve the effective configuration.
///
/// ## Lookup order / 查找顺序
/// 1. `explicit`, which must exist
/// 2. `fallback`, when the file is present
/// 3. [`SiteConfig::defaults`]
///
/// # Errors
///
/// Returns error if the chosen file cannot be read or parsed.
pub fn resolve_config(
    explicit: Option<&Path>,
    fallback: Option<PathBuf>,
) -> anyhow::Result<SiteConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    match fallback {
        Some(path) if path.exists() => {
            debug!(path = %path.display(), "Loading config from data dir");
            load_config(&path)
        }
        _ => {
            debug!("No config file, using defaults");
            Ok(SiteConfig::defaults())
        }
    }
}
