//! Authentication service built on the REST client and the session

use super::{ApiClient, error::AuthError, error::ClientError};
use console_core::state::INVALID_CREDENTIALS;
use console_core::types::VerifyResponse;
use console_core::{AuthAction, ConsoleConfig, Credentials, LoginResponse, SessionService, User};
use reqwest::Method;

/// Outcome of a guard check. Checks never fail; failures resolve here.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCheck {
    Authenticated(User),
    Unauthenticated,
}

impl SessionCheck {
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

impl From<SessionCheck> for AuthAction {
    fn from(check: SessionCheck) -> Self {
        match check {
            SessionCheck::Authenticated(user) => Self::Authenticated(user),
            SessionCheck::Unauthenticated => Self::Unauthenticated,
        }
    }
}

/// Single source of truth for whether this client is authenticated
#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
    login_path: String,
    verify_path: String,
    logout_path: Option<String>,
}

impl AuthService {
    pub fn new(client: ApiClient, config: &ConsoleConfig) -> Self {
        Self {
            client,
            login_path: config.login_path.clone(),
            verify_path: config.verify_path.clone(),
            logout_path: config.logout_path.clone(),
        }
    }

    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    pub const fn session(&self) -> &SessionService {
        self.client.session()
    }

    /// Local-only check, may be stale relative to the server
    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    /// Confirm the stored token with the server and fetch its user
    pub async fn verify(&self) -> Result<User, ClientError> {
        let request = self.client.request(Method::GET, &self.verify_path);
        let response: VerifyResponse = self.client.execute_unintercepted(request).await?;
        Ok(response.into_user())
    }

    /// Guard sequence: local check, then verification, then resolution.
    ///
    /// Without a token no request is made. A failed verification clears the
    /// stored session before resolving unauthenticated.
    pub async fn check(&self) -> SessionCheck {
        if !self.is_authenticated() {
            tracing::debug!("No stored token, skipping verification");
            return SessionCheck::Unauthenticated;
        }

        match self.verify().await {
            Ok(user) => {
                tracing::debug!("Stored token verified");
                SessionCheck::Authenticated(user)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Token verification failed, logging out");
                self.logout();
                SessionCheck::Unauthenticated
            }
        }
    }

    /// Exchange credentials for a token. Stored state is untouched on failure.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let request = self
            .client
            .request(Method::POST, &self.login_path)
            .json(credentials);

        let response: LoginResponse = self
            .client
            .execute_unintercepted(request)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "Login rejected");
                AuthError::LoginFailed(
                    err.user_message()
                        .unwrap_or_else(|| INVALID_CREDENTIALS.to_string()),
                )
            })?;

        if response.token.is_empty() {
            return Err(AuthError::LoginFailed(INVALID_CREDENTIALS.to_string()));
        }

        self.session().set_token(&response.token)?;
        tracing::info!("Login succeeded");
        Ok(response.user)
    }

    /// Clear the local session. Always succeeds.
    pub fn logout(&self) {
        self.session().clear();
        tracing::info!("Logged out");
    }

    /// Clear locally right away, then tell the server (when a logout
    /// endpoint is configured) through the returned future.
    ///
    /// The server request is built before the clear so it still carries the
    /// bearer token. Server failures are logged and otherwise ignored.
    pub fn sign_out(&self) -> impl Future<Output = ()> + 'static {
        let notify = self.logout_path.as_ref().map(|path| {
            (
                self.client.clone(),
                self.client.request(Method::POST, path),
            )
        });
        self.logout();

        async move {
            let Some((client, request)) = notify else {
                return;
            };
            if let Err(err) = client
                .execute_unintercepted::<serde_json::Value>(request)
                .await
            {
                tracing::warn!(error = %err, "Server-side logout failed");
            }
        }
    }
}
