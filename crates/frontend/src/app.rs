use crate::routes::{Route, switch};
use console_frontend_common::{AppConfig, AuthProvider, ConsoleServices, NavLinks};
use console_http::ClientError;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo((), |_| {
        AppConfig::from_env()
            .map_err(|err| ClientError::Configuration(err.to_string()))
            .and_then(|config| ConsoleServices::browser(&config))
    });
    let nav = use_memo((), |_| NavLinks(Rc::new(Route::nav_links())));

    match &*services {
        Ok(services) => html! {
            <BrowserRouter>
                <AuthProvider services={services.clone()}>
                    <ContextProvider<NavLinks> context={(*nav).clone()}>
                        <Switch<Route> render={switch} />
                    </ContextProvider<NavLinks>>
                </AuthProvider>
            </BrowserRouter>
        },
        Err(err) => {
            tracing::error!(error = %err, "Failed to initialize console services");
            html! {
                <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900">
                    <p class="text-red-600 dark:text-red-400">
                        {format!("The console could not start: {err}")}
                    </p>
                </div>
            }
        }
    }
}
