//! Dependency wiring: picks the adapter behind each port.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use pk_app::AppDeps;
use pk_core::ports::SystemClipboardPort;
use pk_core::SiteConfig;
use pk_infra::{config, fs, FileKeyValueStore};
use pk_platform::{ArboardClipboard, ConsoleNotifier, UnavailableClipboard};
use tracing::{debug, warn};

use crate::cli::GlobalArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMode {
    /// Use the system clipboard, degrading to unavailable if it cannot be opened.
    /// `hold` keeps serving the text on Linux, see [`ArboardClipboard`]
    System { hold: Duration },
    /// Never touch the system clipboard
    Headless,
}

pub fn resolve_site_config(global: &GlobalArgs) -> Result<SiteConfig> {
    config::resolve_config(global.config.as_deref(), fs::default_config_file().ok())
}

fn resolve_data_file(global: &GlobalArgs, config: &SiteConfig) -> Result<PathBuf> {
    if let Some(path) = global.data_file.clone().or_else(|| config.data_file.clone()) {
        return Ok(path);
    }
    fs::default_storage_file().context("Failed to resolve default storage file")
}

fn build_clipboard(mode: ClipboardMode) -> Arc<dyn SystemClipboardPort> {
    match mode {
        ClipboardMode::Headless => Arc::new(UnavailableClipboard::new("headless mode")),
        ClipboardMode::System { hold } => match ArboardClipboard::new() {
            Ok(clipboard) => Arc::new(clipboard.with_hold(hold)),
            Err(err) => {
                warn!(error = %err, "System clipboard unavailable");
                Arc::new(UnavailableClipboard::new(err.to_string()))
            }
        },
    }
}

pub fn build_deps(global: &GlobalArgs, clipboard: ClipboardMode) -> Result<AppDeps> {
    let config = resolve_site_config(global)?;
    let data_file = resolve_data_file(global, &config)?;
    debug!(data_file = %data_file.display(), key = %config.liked_posts_key, "Wiring dependencies");

    Ok(AppDeps {
        store: Arc::new(FileKeyValueStore::new(data_file)),
        clipboard: build_clipboard(clipboard),
        notifier: Arc::new(ConsoleNotifier::new()),
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(config: Option<PathBuf>, data_file: Option<PathBuf>) -> GlobalArgs {
        GlobalArgs {
            config,
            data_file,
            verbose: 0,
        }
    }

    #[test]
    fn test_flag_overrides_config_data_file() {
        let mut config = SiteConfig::defaults();
        config.data_file = Some(PathBuf::from("/from/config.json"));

        let path =
            resolve_data_file(&global(None, Some(PathBuf::from("/from/flag.json"))), &config)
                .unwrap();

        assert_eq!(path, PathBuf::from("/from/flag.json"));
    }

    #[test]
    fn test_config_data_file_used_without_flag() {
        let mut config = SiteConfig::defaults();
        config.data_file = Some(PathBuf::from("/from/config.json"));

        let path = resolve_data_file(&global(None, None), &config).unwrap();

        assert_eq!(path, PathBuf::from("/from/config.json"));
    }

    #[test]
    fn test_build_deps_reads_explicit_config() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[storage]\nliked_posts_key = \"k\"\n").unwrap();

        let deps = build_deps(
            &global(Some(config_path), Some(temp_dir.path().join("s.json"))),
            ClipboardMode::Headless,
        )
        .unwrap();

        assert_eq!(deps.config.liked_posts_key, "k");
    }
}
