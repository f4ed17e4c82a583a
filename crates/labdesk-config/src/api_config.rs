use crate::{DEFAULT_SERVER_URL, DEFAULT_TIMEOUT_SECS};

use serde::Deserialize;

/// Configuration for the identity service API client
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the identity service (e.g., "http://127.0.0.1:8000")
    pub server_url: String,
    /// Actor ID sent in the X-Actor-Id header, if any
    pub actor_id: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server_url: String::from(DEFAULT_SERVER_URL),
            actor_id: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
