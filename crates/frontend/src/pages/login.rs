use console_core::Credentials;
use console_frontend_common::use_redirect_if_authenticated;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_redirect_if_authenticated(None);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let submitted = use_state(|| false);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let login = auth.login.clone();
        let email = email.clone();
        let password = password.clone();
        let submitted = submitted.clone();
        let busy = auth.state.is_loading();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if busy {
                return;
            }
            submitted.set(true);
            login.emit(Credentials::new(email.trim(), (*password).clone()));
        })
    };

    let busy = auth.state.is_loading();
    let can_submit = !busy && !email.trim().is_empty() && !password.is_empty();

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex items-center justify-center">
            <form
                onsubmit={on_submit}
                class="w-full max-w-sm p-8 bg-white dark:bg-gray-800 rounded-lg shadow space-y-4"
            >
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{"Sign in"}</h1>

                if let Some(error) = &auth.state.error {
                    <div class="p-3 text-sm rounded bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300" role="alert">
                        {error}
                    </div>
                }

                <label class="block">
                    <span class="text-sm text-gray-700 dark:text-gray-300">{"Email"}</span>
                    <input
                        type="email"
                        autocomplete="username"
                        value={(*email).clone()}
                        oninput={on_email_input}
                        class="mt-1 w-full px-3 py-2 rounded border border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                    />
                </label>

                <label class="block">
                    <span class="text-sm text-gray-700 dark:text-gray-300">{"Password"}</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                        class="mt-1 w-full px-3 py-2 rounded border border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                    />
                </label>

                <button
                    type="submit"
                    disabled={!can_submit}
                    class="w-full px-4 py-2 font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50 rounded-lg transition-colors"
                >
                    { if busy && *submitted { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
        </div>
    }
}
