//! Redirect bookkeeping shared by the guards and hooks

/// History state attached to a login redirect so the login flow can send
/// the user back where they were going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectState {
    pub from: String,
}

/// Where to go after authenticating: the recorded origin when it is a real
/// page, otherwise the fallback.
pub fn return_path(from: Option<&str>, fallback: &str, login_route: &str) -> String {
    from.filter(|path| path.starts_with('/') && !path.starts_with("//") && *path != login_route)
        .unwrap_or(fallback)
        .to_string()
}

/// The invalidation listener only navigates away from pages other than login
pub fn should_redirect_on_invalidation(current_path: &str, login_route: &str) -> bool {
    current_path.trim_end_matches('/') != login_route.trim_end_matches('/')
}
