//! Token storage and the shared session service
//!
//! The [`SessionService`] is built once at application start and handed to
//! the REST client, the auth service and the view layer. It is the only
//! place that touches the underlying [`TokenStore`].

use crate::error::CoreResult;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Durable storage for the bearer token and its companion login flag
pub trait TokenStore {
    /// Stored token, if any
    fn get_token(&self) -> Option<String>;

    /// Store a token and raise the login flag. No format validation.
    fn set_token(&self, token: &str) -> CoreResult<()>;

    /// Whether the login flag is raised
    fn is_logged_in(&self) -> bool;

    /// Remove both the token and the login flag
    fn clear(&self);
}

/// In-memory store for tests and non-browser targets
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
    logged_in: RefCell<bool>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
            logged_in: RefCell::new(true),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &str) -> CoreResult<()> {
        *self.token.borrow_mut() = Some(token.to_string());
        *self.logged_in.borrow_mut() = true;
        Ok(())
    }

    fn is_logged_in(&self) -> bool {
        *self.logged_in.borrow()
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
        *self.logged_in.borrow_mut() = false;
    }
}

/// Events emitted by the session service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The server rejected the stored token; the session has been cleared
    Invalidated,
}

type Listener = Rc<dyn Fn(SessionEvent)>;

/// Shared handle over the token store plus the invalidation listener
#[derive(Clone)]
pub struct SessionService {
    store: Rc<dyn TokenStore>,
    listener: Rc<RefCell<Option<Listener>>>,
}

impl SessionService {
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        Self {
            store,
            listener: Rc::new(RefCell::new(None)),
        }
    }

    /// Session backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryTokenStore::new()))
    }

    pub fn token(&self) -> Option<String> {
        self.store.get_token()
    }

    pub fn set_token(&self, token: &str) -> CoreResult<()> {
        self.store.set_token(token)
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    /// Local-only check: true iff a token is stored
    pub fn is_authenticated(&self) -> bool {
        self.store.get_token().is_some()
    }

    /// Whether the companion login flag is raised
    pub fn is_logged_in(&self) -> bool {
        self.store.is_logged_in()
    }

    /// Install the listener notified on invalidation, replacing any previous one
    pub fn set_listener(&self, listener: Rc<dyn Fn(SessionEvent)>) {
        *self.listener.borrow_mut() = Some(listener);
    }

    pub fn clear_listener(&self) {
        *self.listener.borrow_mut() = None;
    }

    /// Clear the session and notify the listener once
    pub fn invalidate(&self) {
        tracing::warn!("Session invalidated by server, clearing stored token");
        self.store.clear();

        // Clone out of the cell so the listener may replace itself
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(SessionEvent::Invalidated);
        }
    }
}

impl PartialEq for SessionService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.listener, &other.listener)
    }
}

impl fmt::Debug for SessionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionService")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_set_token_raises_flag() {
        let store = MemoryTokenStore::new();
        assert!(store.get_token().is_none());
        assert!(!store.is_logged_in());

        store.set_token("abc").unwrap();
        assert_eq!(store.get_token().as_deref(), Some("abc"));
        assert!(store.is_logged_in());
    }

    #[test]
    fn test_clear_removes_token_and_flag() {
        let store = MemoryTokenStore::with_token("abc");
        store.clear();
        assert!(store.get_token().is_none());
        assert!(!store.is_logged_in());

        // Clearing twice is harmless
        store.clear();
        assert!(store.get_token().is_none());
    }

    #[test]
    fn test_is_authenticated_follows_token() {
        let session = SessionService::in_memory();
        assert!(!session.is_authenticated());

        session.set_token("abc").unwrap();
        assert!(session.is_authenticated());

        session.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_invalidate_notifies_once_and_clears() {
        let session = SessionService::new(Rc::new(MemoryTokenStore::with_token("abc")));
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            session.set_listener(Rc::new(move |event| {
                assert_eq!(event, SessionEvent::Invalidated);
                calls.set(calls.get() + 1);
            }));
        }

        session.invalidate();
        assert_eq!(calls.get(), 1);
        assert!(!session.is_authenticated());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_invalidate_without_listener_still_clears() {
        let session = SessionService::new(Rc::new(MemoryTokenStore::with_token("abc")));
        session.invalidate();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_clones_share_store_and_listener() {
        let session = SessionService::in_memory();
        let other = session.clone();
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            session.set_listener(Rc::new(move |_| calls.set(calls.get() + 1)));
        }

        other.set_token("abc").unwrap();
        assert!(session.is_authenticated());

        other.invalidate();
        assert_eq!(calls.get(), 1);
        assert_eq!(session, other);

        session.clear_listener();
        other.invalidate();
        assert_eq!(calls.get(), 1);
    }
}
