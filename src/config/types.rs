use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub replay: ReplayConfig,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive (default: "info").
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

/// Settings for replaying an action log into a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Abort on the first undecodable line (default: true).
    /// When false, bad lines are logged and skipped.
    #[serde(default = "default_stop_on_error")]
    pub stop_on_error: bool,
    /// JSON snapshot used as the initial state instead of an empty list.
    #[serde(default)]
    pub seed: Option<PathBuf>,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_stop_on_error() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            stop_on_error: default_stop_on_error(),
            seed: None,
        }
    }
}
