//! Browser-backed token store

use console_core::{ConsoleConfig, CoreError, CoreResult, TokenStore};
use web_sys::Storage;

/// Token store over `window.localStorage`, scoped to the page origin.
///
/// The token is stored as a raw string and the flag as `"true"`, so values
/// written by other tooling on the same origin stay readable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTokenStore {
    token_key: String,
    logged_in_key: String,
}

impl LocalTokenStore {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            token_key: config.token_key.clone(),
            logged_in_key: config.logged_in_key.clone(),
        }
    }
}

/// Get localStorage
fn get_local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalTokenStore {
    fn get_token(&self) -> Option<String> {
        get_local_storage()?
            .get_item(&self.token_key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn set_token(&self, token: &str) -> CoreResult<()> {
        let storage =
            get_local_storage().ok_or_else(|| CoreError::storage("localStorage is not available"))?;

        storage
            .set_item(&self.token_key, token)
            .and_then(|()| storage.set_item(&self.logged_in_key, "true"))
            .map_err(|_| CoreError::storage("failed to write session to localStorage"))
    }

    fn is_logged_in(&self) -> bool {
        get_local_storage()
            .and_then(|storage| storage.get_item(&self.logged_in_key).ok().flatten())
            .is_some_and(|flag| flag == "true")
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(&self.token_key);
            let _ = storage.remove_item(&self.logged_in_key);
        }
    }
}
