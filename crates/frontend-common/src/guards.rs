//! Route guards
//!
//! Both guards run the shared check on mount, show a spinner while it is
//! pending and then either render their children or replace the current
//! history entry. The decision itself lives in [`console_core::guard`].

use crate::auth::redirect::return_path;
use crate::auth::{RedirectState, VerifiedUser, use_services};
use crate::components::{Layout, Spinner};
use crate::hooks::use_auth;
use console_core::guard::{self, GuardDecision};
use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub children: Children,
}

#[derive(Properties, PartialEq)]
struct ReplaceRedirectProps {
    to: AttrValue,
    #[prop_or_default]
    from: Option<AttrValue>,
}

/// Replaces the current history entry once, on mount, unless already there
#[function_component(ReplaceRedirect)]
fn replace_redirect(props: &ReplaceRedirectProps) -> Html {
    let navigator = use_navigator();
    let location = use_location();
    let to = props.to.to_string();
    let from = props.from.as_ref().map(ToString::to_string);

    use_effect_with((), move |_| {
        if location.is_some_and(|l| l.path() == to) {
            tracing::debug!(to = %to, "Already at redirect target");
        } else if let Some(navigator) = navigator {
            let route = AnyRoute::new(to);
            match from {
                Some(from) => navigator.replace_with_state(&route, RedirectState { from }),
                None => navigator.replace(&route),
            }
        } else {
            tracing::warn!("Guard redirect outside of a router");
        }
    });

    html! {}
}

/// Renders its children inside the layout shell only for verified sessions
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &GuardProps) -> Html {
    let services = use_services();
    let auth = use_auth();
    let location = use_location();

    match guard::protected(auth.state.phase) {
        GuardDecision::Loading => html! {
            <Spinner text="Checking authentication..." full_screen={true} />
        },
        GuardDecision::Render => {
            let shell = html! {
                <Layout user={auth.state.user.clone()} on_logout={auth.logout.reform(|()| None)}>
                    {props.children.clone()}
                </Layout>
            };
            match auth.state.user.clone() {
                Some(user) => html! {
                    <ContextProvider<VerifiedUser> context={VerifiedUser(user)}>
                        {shell}
                    </ContextProvider<VerifiedUser>>
                },
                None => shell,
            }
        }
        GuardDecision::Redirect(_) => {
            let from = location.map(|l| AttrValue::from(l.path().to_string()));
            html! {
                <ReplaceRedirect to={services.config.login_route.clone()} {from} />
            }
        }
    }
}

/// Renders its children (e.g. the login form) only for anonymous sessions
#[function_component(PublicRoute)]
pub fn public_route(props: &GuardProps) -> Html {
    let services = use_services();
    let auth = use_auth();
    let location = use_location();

    match guard::public(auth.state.phase) {
        GuardDecision::Loading => html! {
            <Spinner text="Checking authentication..." full_screen={true} />
        },
        GuardDecision::Render => html! { <>{ props.children.clone() }</> },
        GuardDecision::Redirect(_) => {
            let from = location
                .and_then(|l| l.state::<RedirectState>())
                .map(|state| state.from.clone());
            let target = return_path(
                from.as_deref(),
                &services.config.landing_route,
                &services.config.login_route,
            );
            html! { <ReplaceRedirect to={target} /> }
        }
    }
}
