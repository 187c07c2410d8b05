//! Frontend configuration

use console_core::{ConsoleConfig, CoreResult};
use console_http::ApiConfig;
use web_sys::window;

/// Everything the SPA needs to build its services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub console: ConsoleConfig,
    pub api: ApiConfig,
}

impl AppConfig {
    /// Compile-time override for the backend origin
    pub const API_BASE_URL: Option<&'static str> = option_env!("CONSOLE_API_BASE_URL");

    /// Compile-time JSON overrides for [`ConsoleConfig`]
    pub const CONSOLE_CONFIG: Option<&'static str> = option_env!("CONSOLE_CONFIG");

    /// Resolve configuration from the build environment and the page origin
    pub fn from_env() -> CoreResult<Self> {
        let console = match Self::CONSOLE_CONFIG {
            Some(raw) => ConsoleConfig::from_json(raw)?,
            None => ConsoleConfig::default(),
        };

        Ok(Self {
            console,
            api: ApiConfig::new(get_base_url()),
        })
    }
}

/// Get the base URL for API calls
fn get_base_url() -> String {
    if let Some(url) = AppConfig::API_BASE_URL {
        return url.to_string();
    }

    // Try to get from window location
    if let Some(window) = window() {
        if let Ok(location) = window.location().origin() {
            return location;
        }
    }

    // Default to relative URLs
    String::new()
}
