//! Navigation hooks layered on [`use_auth`]

use super::{UseAuthHandle, use_auth};
use crate::auth::redirect::return_path;
use crate::auth::{RedirectState, use_services};
use console_core::AuthPhase;
use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::*;

/// Send unauthenticated users to `redirect_to` (login by default),
/// remembering the page they asked for.
#[hook]
pub fn use_require_auth(redirect_to: Option<String>) -> UseAuthHandle {
    let services = use_services();
    let auth = use_auth();
    let navigator = use_navigator();
    let location = use_location();
    let redirected = use_mut_ref(|| false);

    {
        let target = redirect_to.unwrap_or_else(|| services.config.login_route.clone());
        let from = location.map(|l| l.path().to_string()).unwrap_or_default();
        use_effect_with(auth.state.phase, move |phase| {
            if *phase == AuthPhase::Unauthenticated && !redirected.replace(true) {
                if let Some(navigator) = navigator {
                    navigator.replace_with_state(&AnyRoute::new(target), RedirectState { from });
                }
            }
        });
    }

    auth
}

/// Send authenticated users back to where they were headed, or `redirect_to`
/// (the landing route by default).
#[hook]
pub fn use_redirect_if_authenticated(redirect_to: Option<String>) -> UseAuthHandle {
    let services = use_services();
    let auth = use_auth();
    let navigator = use_navigator();
    let location = use_location();

    {
        let fallback = redirect_to.unwrap_or_else(|| services.config.landing_route.clone());
        let from = location
            .and_then(|l| l.state::<RedirectState>())
            .map(|state| state.from.clone());
        let target = return_path(from.as_deref(), &fallback, &services.config.login_route);
        use_effect_with(auth.state.phase, move |phase| {
            if *phase == AuthPhase::Authenticated {
                if let Some(navigator) = navigator {
                    navigator.replace(&AnyRoute::new(target));
                }
            }
        });
    }

    auth
}
