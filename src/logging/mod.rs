//! Diagnostic logging to disk.
//!
//! When enabled, installs a `tracing` subscriber that appends to a daily log
//! file `bookshelf_<date>.log` in the configured log directory (default:
//! `~/.local/share/bookshelf/logs/`). Nothing is ever written to the terminal,
//! which belongs to the TUI.

use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;

/// Install the file subscriber. Returns the log file path, or `None` when
/// logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let level: Level = config
        .level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", config.level))?;

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let path = log_file_path(&log_dir, &date);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(Some(path))
}

pub fn log_file_path(log_dir: &Path, date: &str) -> PathBuf {
    log_dir.join(format!("bookshelf_{}.log", date))
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(dir: &str) -> PathBuf {
    let rest = match dir.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(dir),
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => PathBuf::from(dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name() {
        let path = log_file_path(Path::new("/tmp/logs"), "2026-10-19");
        assert_eq!(path, PathBuf::from("/tmp/logs/bookshelf_2026-10-19.log"));
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/var/log/x"), PathBuf::from("/var/log/x"));
        assert_eq!(expand_home("~user/logs"), PathBuf::from("~user/logs"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs/a"), home.join("logs/a"));
            assert_eq!(expand_home("~"), home);
        }
    }

    #[test]
    fn test_disabled_installs_nothing() {
        let config = LoggingConfig::default();
        assert_eq!(init(&config).unwrap(), None);
    }

    #[test]
    fn test_bad_level_is_rejected() {
        let config = LoggingConfig {
            enabled: true,
            level: "loud".to_string(),
            ..LoggingConfig::default()
        };
        assert!(init(&config).is_err());
    }
}
