//! File logging
//!
//! The terminal belongs to the dashboard, so tracing output goes to a log
//! file. `HRDASH_LOG` overrides the configured filter.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{self, LogConfig};

pub const LOG_ENV: &str = "HRDASH_LOG";
const DEFAULT_DIRECTIVE: &str = "info";

/// Pick the filter directive: env var, then config, then `info`
pub fn filter_directive(config_level: Option<&str>, env: Option<&str>) -> String {
    env.or(config_level)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVE)
        .to_string()
}

/// Install the global subscriber writing to the log file.
///
/// Returns the file path on success. Logging is best effort; any failure
/// leaves the app running without a subscriber.
pub fn init(log: &LogConfig, override_path: Option<PathBuf>) -> Option<PathBuf> {
    let path = override_path
        .or_else(|| log.file.clone())
        .or_else(config::default_log_path)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let env = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(log.level.as_deref(), env.as_deref());
    let filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_config() {
        assert_eq!(filter_directive(Some("warn"), Some("debug")), "debug");
        assert_eq!(filter_directive(Some("warn"), None), "warn");
        assert_eq!(filter_directive(None, None), "info");
    }

    #[test]
    fn test_blank_directive_falls_back() {
        assert_eq!(filter_directive(Some("  "), None), "info");
    }
}
