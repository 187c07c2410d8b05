//! Custom hooks for the application

pub mod use_auth;
pub mod use_liveness;
pub mod use_permissions;
pub mod use_redirect;
pub mod use_session;

pub use use_auth::{AuthStatus, UseAuthHandle, use_auth, use_auth_status};
pub use use_liveness::use_liveness;
pub use use_permissions::use_permissions;
pub use use_redirect::{use_redirect_if_authenticated, use_require_auth};
pub use use_session::use_session;
