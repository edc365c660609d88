//! Tracing configuration for pagekit
//!
//! Installs a `tracing-subscriber` registry: env filter plus one fmt layer on
//! stderr, so stdout stays clean for command output.

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// - Third-party crates: warn
/// - pagekit crates: info in development (debug/trace with `-v`/`-vv`),
///   warn in release unless raised with `-v`
fn build_filter_directives(is_dev: bool, verbose: u8) -> Vec<String> {
    let own_level = match (verbose, is_dev) {
        (0, true) => "info",
        (0, false) => "warn",
        (1, _) => "debug",
        _ => "trace",
    };

    let mut directives = vec!["warn".to_string()];
    directives.extend(
        ["pagekit", "pk_app", "pk_infra", "pk_platform"]
            .iter()
            .map(|target| format!("{target}={own_level}")),
    );
    directives
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` overrides the built-in directives.
///
/// # Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(verbose: u8) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development(), verbose);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_defaults_to_warn() {
        let directives = build_filter_directives(false, 0);
        assert!(directives.contains(&"warn".to_string()));
        assert!(directives.contains(&"pk_app=warn".to_string()));
    }

    #[test]
    fn test_verbosity_raises_own_crates_only() {
        let directives = build_filter_directives(false, 1);
        assert_eq!(directives[0], "warn");
        assert!(directives.contains(&"pk_infra=debug".to_string()));

        let directives = build_filter_directives(true, 3);
        assert!(directives.contains(&"pagekit=trace".to_string()));
    }

    #[test]
    fn test_directives_parse() {
        let directives = build_filter_directives(true, 0);
        assert!(EnvFilter::try_new(directives.join(",")).is_ok());
    }
}
