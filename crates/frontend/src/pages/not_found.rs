use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-50 dark:bg-gray-900">
            <h1 class="text-4xl font-bold text-gray-900 dark:text-white mb-2">{"404"}</h1>
            <p class="text-gray-600 dark:text-gray-400 mb-6">{"Page not found"}</p>
            <Link<Route> to={Route::Dashboard} classes="text-blue-600 dark:text-blue-400 hover:underline">
                {"Back to dashboard"}
            </Link<Route>>
        </div>
    }
}
