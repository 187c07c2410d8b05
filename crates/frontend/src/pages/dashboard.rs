use super::{error_text, items};
use console_frontend_common::hooks::use_liveness;
use console_frontend_common::{use_permissions, use_services};
use console_http::Resource;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const ORDERS_VIEW: &str = "orders.view";

#[derive(Clone, PartialEq)]
enum Count {
    Loading,
    Loaded(usize),
    Failed(String),
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    label: AttrValue,
    count: Count,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    let value = match &props.count {
        Count::Loading => html! { <span class="text-gray-400">{"..."}</span> },
        Count::Loaded(n) => html! { {*n} },
        Count::Failed(message) => html! {
            <span class="text-sm text-red-600 dark:text-red-400">{message}</span>
        },
    };

    html! {
        <div class="p-6 bg-white dark:bg-gray-800 rounded-lg shadow">
            <p class="text-sm text-gray-500 dark:text-gray-400">{props.label.clone()}</p>
            <p class="mt-2 text-3xl font-semibold text-gray-900 dark:text-white">{value}</p>
        </div>
    }
}

#[hook]
fn use_count(resource: Resource, enabled: bool) -> Count {
    let services = use_services();
    let liveness = use_liveness();
    let count = use_state(|| Count::Loading);

    {
        let count = count.clone();
        use_effect_with(enabled, move |enabled| {
            if *enabled {
                let resources = services.resources.clone();
                spawn_local(async move {
                    let result = resources.list(resource).await;
                    liveness.run(|| match result {
                        Ok(payload) => count.set(Count::Loaded(items(&payload).len())),
                        Err(err) => {
                            tracing::warn!(error = %err, ?resource, "Failed to load count");
                            count.set(Count::Failed(error_text(&err)));
                        }
                    });
                });
            }
        });
    }

    (*count).clone()
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let permissions = use_permissions(vec![ORDERS_VIEW.to_string()]);
    let can_view_orders = permissions.has_all_permissions();

    let products = use_count(Resource::Products, true);
    let orders = use_count(Resource::Orders, can_view_orders);

    html! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold text-gray-900 dark:text-white">{"Dashboard"}</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard label="Products" count={products} />
                if can_view_orders {
                    <StatCard label="Orders" count={orders} />
                }
            </div>
        </div>
    }
}
