//! Persistent shell around authenticated pages

use crate::hooks::use_session;
use console_core::User;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: AttrValue,
    pub path: AttrValue,
}

impl NavLink {
    pub fn new(label: impl Into<AttrValue>, path: impl Into<AttrValue>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Sidebar entries, provided by the application through context
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLinks(pub Rc<Vec<NavLink>>);

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub user: Option<User>,
    pub on_logout: Callback<()>,
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let activity = use_session();
    let navigator = use_navigator();
    let location = use_location();
    let nav = use_context::<NavLinks>();

    let current = location.map(|l| l.path().to_string()).unwrap_or_default();
    let display_name = props
        .user
        .as_ref()
        .and_then(User::display_name)
        .unwrap_or("Administrator")
        .to_string();

    let on_logout = props.on_logout.reform(|_: MouseEvent| ());

    let links = nav.map(|NavLinks(links)| {
        links
            .iter()
            .map(|link| {
                let onclick = {
                    let navigator = navigator.clone();
                    let path = link.path.to_string();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        if let Some(navigator) = &navigator {
                            navigator.push(&AnyRoute::new(path.clone()));
                        }
                    })
                };
                let class = if current == link.path.as_str() {
                    "block px-4 py-2 rounded-lg bg-blue-50 dark:bg-gray-700 text-blue-600 dark:text-blue-400 font-medium"
                } else {
                    "block px-4 py-2 rounded-lg text-gray-600 dark:text-gray-400 hover:bg-gray-100 dark:hover:bg-gray-700"
                };
                html! {
                    <a href={link.path.clone()} {class} {onclick}>{link.label.clone()}</a>
                }
            })
            .collect::<Html>()
    });

    html! {
        <div class="h-screen flex bg-white dark:bg-gray-900">
            if let Some(links) = links {
                <nav class="w-56 p-4 space-y-1 bg-gray-50 dark:bg-gray-800 border-r border-gray-200 dark:border-gray-700">
                    {links}
                </nav>
            }
            <div class="flex-1 flex flex-col overflow-hidden">
                <header class="p-4 flex justify-between items-center bg-gray-50 dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
                    <h1 class="text-xl font-bold text-gray-900 dark:text-white">{"Storefront Console"}</h1>
                    <div class="flex items-center gap-3">
                        if !activity.is_active {
                            <span class="px-2 py-1 text-xs rounded bg-yellow-100 text-yellow-800">{"Idle"}</span>
                        }
                        <span class="text-sm text-gray-600 dark:text-gray-300">{display_name}</span>
                        <button
                            onclick={on_logout}
                            class="px-4 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 bg-gray-100 dark:bg-gray-700 hover:bg-gray-200 dark:hover:bg-gray-600 rounded-lg transition-colors"
                        >
                            {"Logout"}
                        </button>
                    </div>
                </header>
                <main class="flex-1 overflow-y-auto p-6">
                    {props.children.clone()}
                </main>
            </div>
        </div>
    }
}
