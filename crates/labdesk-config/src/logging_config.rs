use crate::{DEFAULT_LOG_LEVEL, LogLevel};

use std::path::PathBuf;

use serde::Deserialize;

/// The `[logging]` section of `config.toml`.
///
/// `file` is optional; when unset, log output goes to stderr only.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            file: None,
        }
    }
}
