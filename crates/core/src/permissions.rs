//! Permission checks against the current user

use crate::types::User;

/// Permission view over an optional user and a required set.
///
/// Superusers pass every check. With no user, every check fails except
/// `has_all_permissions` on an empty requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct Permissions {
    user: Option<User>,
    required: Vec<String>,
}

impl Permissions {
    pub fn new(user: Option<User>, required: Vec<String>) -> Self {
        Self { user, required }
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.user.as_ref().is_some_and(|user| {
            user.is_superuser || user.permissions.iter().any(|p| p == permission)
        })
    }

    /// True when every required permission is held (vacuously true when none are required)
    pub fn has_all_permissions(&self) -> bool {
        self.required.iter().all(|p| self.has_permission(p))
    }

    /// True when at least one required permission is held
    pub fn has_any_permission(&self) -> bool {
        self.required.iter().any(|p| self.has_permission(p))
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }
}
