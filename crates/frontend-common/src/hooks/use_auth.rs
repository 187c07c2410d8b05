//! Per-instance authentication state

use super::use_liveness;
use crate::auth::{AuthStore, VerifiedUser, use_services};
use console_core::{AuthAction, AuthState, Credentials, Liveness};
use console_http::AuthService;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::*;

/// Handle returned by [`use_auth`]
#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub state: AuthState,
    /// Attempt a login with the given credentials
    pub login: Callback<Credentials>,
    /// Clear the session and replace the current entry with the given route
    /// (login route by default)
    pub logout: Callback<Option<String>>,
    /// Re-run the check sequence
    pub check_auth: Callback<()>,
}

/// Read-only status from [`use_auth_status`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthStatus {
    pub is_authenticated: bool,
    pub is_loading: bool,
}

/// Run one check, unless this instance already has one in flight
fn run_check(
    auth: AuthService,
    store: UseReducerHandle<AuthStore>,
    liveness: Liveness,
    in_flight: Rc<RefCell<bool>>,
) {
    if in_flight.replace(true) {
        tracing::debug!("Auth check already in flight");
        return;
    }

    store.dispatch(AuthAction::CheckStarted);
    spawn_local(async move {
        let outcome = auth.check().await;
        in_flight.replace(false);
        liveness.run(|| store.dispatch(outcome.into()));
    });
}

/// Owns an [`AuthState`] and checks the session once on mount.
///
/// Below a [`ProtectedRoute`](crate::ProtectedRoute) the state starts from
/// the guard's verified user and the mount check is skipped.
#[hook]
pub fn use_auth() -> UseAuthHandle {
    let services = use_services();
    let navigator = use_navigator();
    let verified = use_context::<VerifiedUser>();
    let seeded = verified.is_some();
    let store = use_reducer(move || verified.as_ref().map(AuthStore::from).unwrap_or_default());
    let liveness = use_liveness();
    let in_flight = use_mut_ref(|| false);

    let check_auth = {
        let auth = services.auth.clone();
        let store = store.clone();
        let liveness = liveness.clone();
        Callback::from(move |()| {
            run_check(
                auth.clone(),
                store.clone(),
                liveness.clone(),
                in_flight.clone(),
            );
        })
    };

    {
        let check_auth = check_auth.clone();
        use_effect_with((), move |_| {
            if !seeded {
                check_auth.emit(());
            }
        });
    }

    let login = {
        let auth = services.auth.clone();
        let store = store.clone();
        let liveness = liveness.clone();
        Callback::from(move |credentials: Credentials| {
            store.dispatch(AuthAction::CheckStarted);
            let auth = auth.clone();
            let store = store.clone();
            let liveness = liveness.clone();
            spawn_local(async move {
                let result = auth.login(&credentials).await;
                liveness.run(|| match result {
                    Ok(user) => store.dispatch(AuthAction::Authenticated(user)),
                    Err(err) => store.dispatch(AuthAction::LoginFailed(err.to_string())),
                });
            });
        })
    };

    let logout = {
        let auth = services.auth.clone();
        let login_route = services.config.login_route.clone();
        let store = store.clone();
        Callback::from(move |redirect_to: Option<String>| {
            // Clears the stored token before anything else can run a check
            spawn_local(auth.sign_out());
            store.dispatch(AuthAction::LoggedOut);

            let target = redirect_to.unwrap_or_else(|| login_route.clone());
            if let Some(navigator) = &navigator {
                navigator.replace(&AnyRoute::new(target));
            }
        })
    };

    UseAuthHandle {
        state: store.0.clone(),
        login,
        logout,
        check_auth,
    }
}

/// Just `{is_authenticated, is_loading}`, from the same check sequence
#[hook]
pub fn use_auth_status() -> AuthStatus {
    let auth = use_auth();
    AuthStatus {
        is_authenticated: auth.state.is_authenticated(),
        is_loading: auth.state.is_loading(),
    }
}
