//! Transport configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for the REST client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend origin, without a trailing slash
    pub base_url: String,
    /// Request timeout; ignored on WASM where the browser owns timeouts
    #[serde(default)]
    pub timeout: Option<Duration>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    "storefront-console/0.1.0".to_string()
}
