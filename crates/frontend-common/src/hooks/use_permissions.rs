use super::use_auth;
use console_core::Permissions;
use yew::prelude::*;

/// Permission checks against the user resolved by [`use_auth`]. No network
/// calls beyond the mount check.
#[hook]
pub fn use_permissions(required: Vec<String>) -> Permissions {
    let auth = use_auth();
    Permissions::new(auth.state.user, required)
}
