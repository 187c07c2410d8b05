//! Authentication module

pub mod context;
pub mod redirect;

// Re-export commonly used items
pub use context::{AuthProvider, AuthStore, VerifiedUser, use_services};
pub use redirect::RedirectState;
