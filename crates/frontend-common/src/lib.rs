pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod guards;
pub mod hooks;
pub mod storage;

pub use auth::{AuthProvider, RedirectState, VerifiedUser, use_services};
pub use client::ConsoleServices;
pub use components::{Layout, NavLink, NavLinks, Spinner};
pub use config::AppConfig;
pub use guards::{ProtectedRoute, PublicRoute};
pub use hooks::{
    AuthStatus, UseAuthHandle, use_auth, use_auth_status, use_permissions,
    use_redirect_if_authenticated, use_require_auth, use_session,
};
pub use storage::LocalTokenStore;
