//! Storefront console HTTP layer
//!
//! A thin REST client that injects the session's bearer token and reports
//! unauthorized responses back to the session, plus the auth service built
//! on top of it.

pub mod client;

pub use client::auth::{AuthService, SessionCheck};
pub use client::config::ApiConfig;
pub use client::error::{AuthError, ClientError};
pub use client::resources::{Resource, ResourceClient};
pub use client::{ApiClient, ApiClientBuilder};
