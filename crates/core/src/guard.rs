//! Rendering decisions for the route guards

use crate::state::AuthPhase;

/// What a guard should render for a given auth phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Still checking: show the loading indicator
    Loading,
    /// Render the guarded children
    Render,
    /// Replace the current history entry with another route
    Redirect(RedirectTarget),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// The public login route
    Login,
    /// The default authenticated landing route
    Landing,
}

/// Decision for a protected subtree
pub const fn protected(phase: AuthPhase) -> GuardDecision {
    match phase {
        AuthPhase::Unknown | AuthPhase::Checking => GuardDecision::Loading,
        AuthPhase::Authenticated => GuardDecision::Render,
        AuthPhase::Unauthenticated => GuardDecision::Redirect(RedirectTarget::Login),
    }
}

/// Decision for a public-only subtree such as the login form
pub const fn public(phase: AuthPhase) -> GuardDecision {
    match phase {
        AuthPhase::Unknown | AuthPhase::Checking => GuardDecision::Loading,
        AuthPhase::Authenticated => GuardDecision::Redirect(RedirectTarget::Landing),
        AuthPhase::Unauthenticated => GuardDecision::Render,
    }
}
