//! Console REST client

pub mod auth;
pub mod config;
pub mod error;
pub mod resources;

use config::ApiConfig;
use console_core::SessionService;
use error::ClientError;
use reqwest::{Client, ClientBuilder, header};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// HTTP client that attaches the session's bearer token to every request.
///
/// A 401 from [`ApiClient::execute`] or [`ApiClient::upload`] invalidates
/// the session before the error is handed back; navigation is left to
/// whoever listens on the [`SessionService`].
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: SessionService,
}

impl ApiClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>, session: SessionService) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).session(session).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Session this client reads tokens from
    pub const fn session(&self) -> &SessionService {
        &self.session
    }

    /// Request builder with the bearer token (if any) and nothing else
    fn authorized(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(token) = self.session.token() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        request
    }

    /// Create a JSON request builder with authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.authorized(method, path)
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json")
    }

    /// Execute a request, invalidating the session on 401
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let result = self.execute_unintercepted(request).await;

        if matches!(&result, Err(err) if err.is_unauthorized()) {
            self.session.invalidate();
        }

        result
    }

    /// Send a multipart form; reqwest sets the multipart content type
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ClientError> {
        let request = self
            .authorized(reqwest::Method::POST, path)
            .header(header::ACCEPT, "application/json")
            .multipart(form);
        self.execute(request).await
    }

    /// Execute without the 401 side effect, for callers that own the failure
    pub(crate) async fn execute_unintercepted<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            if body.is_empty() {
                return Ok(serde_json::from_value(Value::Null)?);
            }
            Ok(serde_json::from_slice(&body)?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            tracing::debug!(status = status.as_u16(), "Request rejected");
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    session: Option<SessionService>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    /// Start from a full transport configuration
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            base_url: Some(config.base_url.clone()),
            session: None,
            timeout: config.timeout,
            user_agent: Some(config.user_agent.clone()),
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Share an existing session; a fresh in-memory one is used otherwise
    pub fn session(mut self, session: SessionService) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the request timeout
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout; // Timeouts not supported on WASM

        client_builder = client_builder.user_agent(
            self.user_agent
                .unwrap_or_else(|| "storefront-console/0.1.0".to_string()),
        );

        let client = client_builder.build()?;

        Ok(ApiClient {
            client,
            base_url,
            session: self.session.unwrap_or_else(SessionService::in_memory),
        })
    }
}
