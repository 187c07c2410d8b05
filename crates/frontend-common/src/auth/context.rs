//! Service context and the session invalidation listener

use super::redirect::should_redirect_on_invalidation;
use crate::client::ConsoleServices;
use console_core::{AuthAction, AuthState, SessionEvent, User};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::*;

/// Reducer wrapper so per-instance auth state can live in `use_reducer`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthStore(pub AuthState);

impl Reducible for AuthStore {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.reduce(action)))
    }
}

/// User already verified by an enclosing [`ProtectedRoute`](crate::ProtectedRoute).
///
/// Hooks below the guard start from this user instead of verifying again.
#[derive(Clone, Debug, PartialEq)]
pub struct VerifiedUser(pub User);

impl From<&VerifiedUser> for AuthStore {
    fn from(verified: &VerifiedUser) -> Self {
        Self(AuthState::default().reduce(AuthAction::Authenticated(verified.0.clone())))
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub services: ConsoleServices,
    pub children: Children,
}

/// Provides the shared services and turns session invalidation into a
/// navigation to the login route. Must sit inside the router.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let navigator = use_navigator();

    {
        let session = props.services.session.clone();
        let login_route = props.services.config.login_route.clone();
        use_effect_with(navigator, move |navigator| {
            let navigator = navigator.clone();
            session.set_listener(Rc::new(move |event| match event {
                SessionEvent::Invalidated => {
                    let current = gloo::utils::window()
                        .location()
                        .pathname()
                        .unwrap_or_default();
                    if !should_redirect_on_invalidation(&current, &login_route) {
                        return;
                    }
                    tracing::info!(from = %current, "Session expired, returning to login");
                    if let Some(navigator) = &navigator {
                        navigator.replace(&AnyRoute::new(login_route.clone()));
                    }
                }
            }));

            // Cleanup on unmount
            move || session.clear_listener()
        });
    }

    html! {
        <ContextProvider<ConsoleServices> context={props.services.clone()}>
            {props.children.clone()}
        </ContextProvider<ConsoleServices>>
    }
}

/// Hook to use the shared services
#[hook]
pub fn use_services() -> ConsoleServices {
    use_context::<ConsoleServices>()
        .expect("ConsoleServices not found. Make sure to wrap your component with AuthProvider")
}
