//! Storefront console core types
//!
//! Everything in this crate is free of browser and network dependencies so
//! the session gate can be exercised on native targets.

pub mod activity;
pub mod config;
pub mod error;
pub mod guard;
pub mod liveness;
pub mod permissions;
pub mod session;
pub mod state;
pub mod types;

pub use activity::{ACTIVITY_EVENTS, ActivityTracker, SessionActivity};
pub use config::ConsoleConfig;
pub use error::{CoreError, CoreResult};
pub use guard::GuardDecision;
pub use liveness::Liveness;
pub use permissions::Permissions;
pub use session::{MemoryTokenStore, SessionEvent, SessionService, TokenStore};
pub use state::{AuthAction, AuthPhase, AuthState};
pub use types::{Credentials, LoginResponse, User};
