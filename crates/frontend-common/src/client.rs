//! Service construction
//!
//! Built once at application start and shared through context, so every
//! hook, guard and page talks to the same session.

use crate::config::AppConfig;
use crate::storage::LocalTokenStore;
use console_core::{ConsoleConfig, SessionService, TokenStore};
use console_http::{ApiClientBuilder, AuthService, ClientError, ResourceClient};
use std::rc::Rc;

#[derive(Clone)]
pub struct ConsoleServices {
    pub config: Rc<ConsoleConfig>,
    pub session: SessionService,
    pub auth: AuthService,
    pub resources: ResourceClient,
}

impl ConsoleServices {
    /// Wire the services over an arbitrary token store
    pub fn new(config: &AppConfig, store: Rc<dyn TokenStore>) -> Result<Self, ClientError> {
        config
            .console
            .validate()
            .map_err(|err| ClientError::Configuration(err.to_string()))?;

        let session = SessionService::new(store);
        let client = ApiClientBuilder::from_config(&config.api)
            .session(session.clone())
            .build()?;

        Ok(Self {
            config: Rc::new(config.console.clone()),
            session,
            auth: AuthService::new(client.clone(), &config.console),
            resources: ResourceClient::new(client),
        })
    }

    /// Services backed by the browser's localStorage
    pub fn browser(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(config, Rc::new(LocalTokenStore::new(&config.console)))
    }
}

impl PartialEq for ConsoleServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config) && self.session == other.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_core::MemoryTokenStore;
    use console_http::ApiConfig;

    fn app_config(console: ConsoleConfig) -> AppConfig {
        AppConfig {
            console,
            api: ApiConfig::new("http://localhost:8080"),
        }
    }

    #[test]
    fn test_services_share_one_session() {
        let store = Rc::new(MemoryTokenStore::with_token("abc"));
        let services = ConsoleServices::new(&app_config(ConsoleConfig::default()), store).unwrap();

        assert!(services.auth.is_authenticated());
        services.session.clear();
        assert!(!services.auth.is_authenticated());
    }

    #[test]
    fn test_invalid_console_config_is_rejected() {
        let console = ConsoleConfig {
            landing_route: "/login".to_string(),
            ..ConsoleConfig::default()
        };

        let result = ConsoleServices::new(&app_config(console), Rc::new(MemoryTokenStore::new()));
        assert!(matches!(result, Err(ClientError::Configuration(_))));
    }
}
