use crate::{ApiConfig, ConfigError, ConfigErrorResult, LoggingConfig, LogLevel};

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from disk with environment overrides.
    ///
    /// Loading order:
    /// 1. Check for LABDESK_CONFIG_DIR env var, else use ./.labdesk/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply LABDESK_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: LABDESK_CONFIG_DIR env var > ./.labdesk/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("LABDESK_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".labdesk"))
    }

    /// Apply LABDESK_* environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("LABDESK_SERVER_URL") {
            self.api.server_url = url;
        }
        if let Ok(actor_id) = std::env::var("LABDESK_ACTOR_ID") {
            self.api.actor_id = Some(actor_id);
        }
        if let Ok(level) = std::env::var("LABDESK_LOG_LEVEL") {
            // Lenient; unknown values fall back to info
            self.logging.level = LogLevel::from_raw(&level);
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.api.server_url.trim().is_empty() {
            return Err(ConfigError::api("api.server_url must not be empty"));
        }
        if !self.api.server_url.starts_with("http://")
            && !self.api.server_url.starts_with("https://")
        {
            return Err(ConfigError::api(
                "api.server_url must start with http:// or https://",
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::api("api.timeout_secs must be greater than 0"));
        }

        Ok(())
    }
}
