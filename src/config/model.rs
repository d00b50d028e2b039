//! Configuration data model.
//!
//! All structs derive `Deserialize` for TOML. Every field has a
//! default so a missing or partial file still yields a working setup.

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// What the screen shows besides the library itself.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_header: bool,
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_header: true,
            show_hints: true,
        }
    }
}

/// Diagnostic log file settings. The TUI owns the terminal, so logs only
/// ever go to a file.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_log_dir() -> String {
    "~/.local/share/bookshelf/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
