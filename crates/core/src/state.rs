//! View-local authentication state machine
//!
//! ```text
//! Unknown --CheckStarted--> Checking --Authenticated--> Authenticated
//!                                    \--Unauthenticated--> Unauthenticated
//! Authenticated --LoggedOut | Invalidated--> Unauthenticated
//! ```
//!
//! There is no terminal state: every guard or hook mount re-enters the
//! machine through `CheckStarted`.

use crate::types::User;

/// Fallback message shown when a login fails without a usable reason
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Unknown,
    Checking,
    Authenticated,
    Unauthenticated,
}

/// State owned by a single hook or guard instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub user: Option<User>,
    pub error: Option<String>,
}

pub enum AuthAction {
    /// A check (local, then optionally remote) or a login attempt has begun
    CheckStarted,
    /// Verification succeeded, or a login completed
    Authenticated(User),
    /// No token, or verification failed
    Unauthenticated,
    /// Login attempt rejected; carries the message to display
    LoginFailed(String),
    /// Explicit logout
    LoggedOut,
    /// A request was rejected as unauthorized mid-session
    Invalidated,
}

impl AuthState {
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.phase, AuthPhase::Authenticated)
    }

    /// Loading until the first check resolves, so protected content never flashes
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, AuthPhase::Unknown | AuthPhase::Checking)
    }

    #[must_use]
    pub fn reduce(&self, action: AuthAction) -> Self {
        match action {
            AuthAction::CheckStarted => Self {
                phase: AuthPhase::Checking,
                ..self.clone()
            },
            AuthAction::Authenticated(user) => Self {
                phase: AuthPhase::Authenticated,
                user: Some(user),
                error: None,
            },
            AuthAction::Unauthenticated | AuthAction::LoggedOut | AuthAction::Invalidated => {
                Self {
                    phase: AuthPhase::Unauthenticated,
                    user: None,
                    error: None,
                }
            }
            AuthAction::LoginFailed(message) => {
                let message = if message.trim().is_empty() {
                    INVALID_CREDENTIALS.to_string()
                } else {
                    message
                };
                Self {
                    phase: AuthPhase::Unauthenticated,
                    user: None,
                    error: Some(message),
                }
            }
        }
    }
}
