//! Wire types exchanged with the console backend

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-defined user record.
///
/// Only the permission fields are interpreted client-side; everything else
/// is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Look up an opaque field by name
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// Best-effort display name from the common name/email fields
    pub fn display_name(&self) -> Option<&str> {
        ["name", "username", "email"]
            .iter()
            .find_map(|key| self.extra.get(*key).and_then(Value::as_str))
    }
}

/// Login form payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Successful login response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: User,
}

/// Verification response, either the bare user or wrapped in `{"user": ..}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VerifyResponse {
    Wrapped { user: User },
    Bare(User),
}

impl VerifyResponse {
    pub fn into_user(self) -> User {
        match self {
            Self::Wrapped { user } | Self::Bare(user) => user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_keeps_opaque_fields() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "email": "ops@example.com",
            "permissions": ["orders.view"]
        }))
        .unwrap();

        assert_eq!(user.permissions, vec!["orders.view"]);
        assert!(!user.is_superuser);
        assert_eq!(user.field("id"), Some(&json!(7)));
        assert_eq!(user.display_name(), Some("ops@example.com"));
    }

    #[test]
    fn test_verify_response_wrapped_and_bare() {
        let wrapped: VerifyResponse =
            serde_json::from_value(json!({"user": {"is_superuser": true}})).unwrap();
        assert!(wrapped.into_user().is_superuser);

        let bare: VerifyResponse =
            serde_json::from_value(json!({"name": "Ada", "permissions": ["x"]})).unwrap();
        let user = bare.into_user();
        assert_eq!(user.permissions, vec!["x"]);
        assert_eq!(user.display_name(), Some("Ada"));
    }

    #[test]
    fn test_login_response_without_user() {
        let response: LoginResponse = serde_json::from_value(json!({"token": "abc"})).unwrap();
        assert_eq!(response.token, "abc");
        assert_eq!(response.user, User::default());
    }
}
