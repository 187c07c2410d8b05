use crate::pages::{DashboardPage, LoginPage, NotFoundPage};
use console_frontend_common::{NavLink, ProtectedRoute, PublicRoute};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Sidebar entries, in display order
    pub fn nav_links() -> Vec<NavLink> {
        vec![NavLink::new("Dashboard", Self::Dashboard.to_path())]
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Login => html! {
            <PublicRoute><LoginPage /></PublicRoute>
        },
        Route::Dashboard => html! {
            <ProtectedRoute><DashboardPage /></ProtectedRoute>
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
