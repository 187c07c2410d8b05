//! Console configuration

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Settings consumed by the session gate.
///
/// Every field has a default so a partial JSON document (or none at all) is
/// enough to build a working configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Public route that hosts the login form
    pub login_route: String,
    /// Route authenticated users land on by default
    pub landing_route: String,
    /// Storage key holding the bearer token
    pub token_key: String,
    /// Storage key holding the companion login flag
    pub logged_in_key: String,
    /// Endpoint exchanging credentials for a token
    pub login_path: String,
    /// Endpoint confirming a token and returning its user
    pub verify_path: String,
    /// Optional endpoint notified on sign-out
    pub logout_path: Option<String>,
    /// Idle time after which the session is marked inactive
    pub idle_threshold_ms: u64,
    /// How often the idle check runs
    pub activity_check_interval_ms: u32,
}

impl ConsoleConfig {
    pub const DEFAULT_LOGIN_ROUTE: &'static str = "/login";
    pub const DEFAULT_LANDING_ROUTE: &'static str = "/dashboard";
    pub const DEFAULT_TOKEN_KEY: &'static str = "token";
    pub const DEFAULT_LOGGED_IN_KEY: &'static str = "isLoggedIn";

    /// 30 minutes
    pub const DEFAULT_IDLE_THRESHOLD_MS: u64 = 30 * 60 * 1000;

    /// 1 minute
    pub const DEFAULT_ACTIVITY_CHECK_INTERVAL_MS: u32 = 60_000;

    /// Parse a configuration document, filling gaps with defaults
    pub fn from_json(raw: &str) -> CoreResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the gate relies on
    pub fn validate(&self) -> CoreResult<()> {
        for (name, route) in [
            ("login_route", &self.login_route),
            ("landing_route", &self.landing_route),
        ] {
            if !route.starts_with('/') {
                return Err(CoreError::invalid_config(format!(
                    "{name} must be an absolute path, got {route:?}"
                )));
            }
        }

        if self.login_route == self.landing_route {
            return Err(CoreError::invalid_config(
                "login_route and landing_route must differ",
            ));
        }

        if self.token_key.is_empty() || self.logged_in_key.is_empty() {
            return Err(CoreError::invalid_config("storage keys must not be empty"));
        }

        if self.token_key == self.logged_in_key {
            return Err(CoreError::invalid_config("storage keys must differ"));
        }

        if self.activity_check_interval_ms == 0 {
            return Err(CoreError::invalid_config(
                "activity_check_interval_ms must be positive",
            ));
        }

        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            login_route: Self::DEFAULT_LOGIN_ROUTE.to_string(),
            landing_route: Self::DEFAULT_LANDING_ROUTE.to_string(),
            token_key: Self::DEFAULT_TOKEN_KEY.to_string(),
            logged_in_key: Self::DEFAULT_LOGGED_IN_KEY.to_string(),
            login_path: "/login".to_string(),
            verify_path: "/verify".to_string(),
            logout_path: None,
            idle_threshold_ms: Self::DEFAULT_IDLE_THRESHOLD_MS,
            activity_check_interval_ms: Self::DEFAULT_ACTIVITY_CHECK_INTERVAL_MS,
        }
    }
}
