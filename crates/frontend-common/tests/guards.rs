//! Browser tests for the route guards and hooks
//!
//! Run with `wasm-pack test --headless --firefox crates/frontend-common`.
//! Verification is served from a `data:` URL, so no backend is needed.

#![cfg(target_arch = "wasm32")]

use console_core::{AuthPhase, ConsoleConfig, Liveness, MemoryTokenStore};
use console_frontend_common::hooks::use_liveness;
use console_frontend_common::{
    AppConfig, AuthProvider, ConsoleServices, ProtectedRoute, PublicRoute, RedirectState,
    use_auth, use_session,
};
use console_http::ApiConfig;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Base URL plus verify path form `data:application/json,{"email":"a@b.c","permissions":["x"]}`
const VERIFY_BASE: &str = "data:application/json,";
const VERIFY_BODY: &str =
    "%7B%22email%22%3A%22a%40b.c%22%2C%22permissions%22%3A%5B%22x%22%5D%7D";

const SETTLE: Duration = Duration::from_millis(200);

fn services(token: Option<&str>) -> ConsoleServices {
    let store = match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::new(),
    };
    let config = AppConfig {
        console: ConsoleConfig {
            verify_path: VERIFY_BODY.to_string(),
            ..ConsoleConfig::default()
        },
        api: ApiConfig::new(VERIFY_BASE),
    };
    ConsoleServices::new(&config, Rc::new(store)).unwrap()
}

fn history_at(path: &str) -> AnyHistory {
    let history = MemoryHistory::new();
    history.push(path.to_string());
    history.into()
}

fn mount<C>(props: C::Properties) -> yew::AppHandle<C>
where
    C: BaseComponent,
{
    let document = gloo::utils::document();
    let root = document.create_element("div").unwrap();
    gloo::utils::body().append_child(&root).unwrap();
    yew::Renderer::<C>::with_root_and_props(root, props).render()
}

#[derive(Properties, PartialEq)]
struct CountedProps {
    renders: Rc<Cell<u32>>,
}

#[function_component(Counted)]
fn counted(props: &CountedProps) -> Html {
    props.renders.set(props.renders.get() + 1);
    html! { <p>{"guarded content"}</p> }
}

#[derive(Properties, PartialEq)]
struct GuardHarnessProps {
    services: ConsoleServices,
    history: AnyHistory,
    public: bool,
    renders: Rc<Cell<u32>>,
}

#[function_component(GuardHarness)]
fn guard_harness(props: &GuardHarnessProps) -> Html {
    let child = html! { <Counted renders={props.renders.clone()} /> };
    html! {
        <Router history={props.history.clone()}>
            <AuthProvider services={props.services.clone()}>
                if props.public {
                    <PublicRoute>{child.clone()}</PublicRoute>
                } else {
                    <ProtectedRoute>{child.clone()}</ProtectedRoute>
                }
            </AuthProvider>
        </Router>
    }
}

#[wasm_bindgen_test]
async fn protected_route_without_token_redirects_once() {
    let history = history_at("/dashboard");
    let changes = Rc::new(Cell::new(0_u32));
    let _listener = {
        let changes = changes.clone();
        history.listen(move || changes.set(changes.get() + 1))
    };
    let renders = Rc::new(Cell::new(0));

    let handle = mount::<GuardHarness>(GuardHarnessProps {
        services: services(None),
        history: history.clone(),
        public: false,
        renders: renders.clone(),
    });
    sleep(SETTLE).await;

    assert_eq!(renders.get(), 0);
    assert_eq!(history.location().path(), "/login");
    assert_eq!(changes.get(), 1);
    let from = history
        .location()
        .state::<RedirectState>()
        .map(|state| state.from.clone());
    assert_eq!(from.as_deref(), Some("/dashboard"));

    handle.destroy();
}

#[wasm_bindgen_test]
async fn protected_route_renders_children_once_after_verification() {
    let history = history_at("/dashboard");
    let renders = Rc::new(Cell::new(0));

    let handle = mount::<GuardHarness>(GuardHarnessProps {
        services: services(Some("abc")),
        history: history.clone(),
        public: false,
        renders: renders.clone(),
    });
    sleep(SETTLE).await;

    assert_eq!(renders.get(), 1);
    assert_eq!(history.location().path(), "/dashboard");

    handle.destroy();
}

#[wasm_bindgen_test]
async fn protected_route_unmounted_before_verification_stays_silent() {
    let history = history_at("/dashboard");
    let renders = Rc::new(Cell::new(0));
    let services = services(Some("abc"));

    let handle = mount::<GuardHarness>(GuardHarnessProps {
        services: services.clone(),
        history: history.clone(),
        public: false,
        renders: renders.clone(),
    });
    handle.destroy();
    sleep(SETTLE).await;

    assert_eq!(renders.get(), 0);
    assert_eq!(history.location().path(), "/dashboard");
    assert!(services.session.is_authenticated());
}

#[wasm_bindgen_test]
async fn public_route_sends_authenticated_users_back() {
    let history: AnyHistory = MemoryHistory::new().into();
    history.push_with_state(
        "/login".to_string(),
        RedirectState {
            from: "/orders".to_string(),
        },
    );
    let renders = Rc::new(Cell::new(0));

    let handle = mount::<GuardHarness>(GuardHarnessProps {
        services: services(Some("abc")),
        history: history.clone(),
        public: true,
        renders: renders.clone(),
    });
    sleep(SETTLE).await;

    assert_eq!(renders.get(), 0);
    assert_eq!(history.location().path(), "/orders");

    handle.destroy();
}

#[derive(Properties, PartialEq)]
struct PhaseRecorderProps {
    phases: Rc<RefCell<Vec<AuthPhase>>>,
}

#[function_component(PhaseRecorder)]
fn phase_recorder(props: &PhaseRecorderProps) -> Html {
    let auth = use_auth();
    props.phases.borrow_mut().push(auth.state.phase);
    html! {}
}

#[derive(Properties, PartialEq)]
struct NestedHarnessProps {
    services: ConsoleServices,
    history: AnyHistory,
    phases: Rc<RefCell<Vec<AuthPhase>>>,
}

#[function_component(NestedHarness)]
fn nested_harness(props: &NestedHarnessProps) -> Html {
    html! {
        <Router history={props.history.clone()}>
            <AuthProvider services={props.services.clone()}>
                <ProtectedRoute>
                    <PhaseRecorder phases={props.phases.clone()} />
                </ProtectedRoute>
            </AuthProvider>
        </Router>
    }
}

#[wasm_bindgen_test]
async fn hooks_below_protected_route_start_verified() {
    let phases = Rc::new(RefCell::new(Vec::new()));

    let handle = mount::<NestedHarness>(NestedHarnessProps {
        services: services(Some("abc")),
        history: history_at("/dashboard"),
        phases: phases.clone(),
    });
    sleep(SETTLE).await;

    let phases = phases.borrow();
    assert!(!phases.is_empty());
    assert!(phases.iter().all(|phase| *phase == AuthPhase::Authenticated));

    handle.destroy();
}

#[derive(Properties, PartialEq)]
struct LivenessHolderProps {
    slot: Rc<RefCell<Option<Liveness>>>,
}

#[function_component(LivenessHolder)]
fn liveness_holder(props: &LivenessHolderProps) -> Html {
    let liveness = use_liveness();
    props.slot.borrow_mut().get_or_insert(liveness);
    html! {}
}

#[wasm_bindgen_test]
async fn liveness_released_on_unmount() {
    let slot = Rc::new(RefCell::new(None));
    let handle = mount::<LivenessHolder>(LivenessHolderProps { slot: slot.clone() });
    sleep(Duration::from_millis(20)).await;

    let liveness = slot.borrow().clone().unwrap();
    assert!(liveness.is_alive());

    handle.destroy();
    sleep(Duration::from_millis(20)).await;

    let updated = Cell::new(false);
    assert!(!liveness.run(|| updated.set(true)));
    assert!(!updated.get());
}

#[derive(Properties, PartialEq)]
struct ActivityRecorderProps {
    last_activity: Rc<Cell<u64>>,
}

#[function_component(ActivityRecorder)]
fn activity_recorder(props: &ActivityRecorderProps) -> Html {
    let activity = use_session();
    props.last_activity.set(activity.last_activity);
    html! {}
}

#[derive(Properties, PartialEq)]
struct SessionHarnessProps {
    services: ConsoleServices,
    last_activity: Rc<Cell<u64>>,
}

#[function_component(SessionHarness)]
fn session_harness(props: &SessionHarnessProps) -> Html {
    html! {
        <AuthProvider services={props.services.clone()}>
            <ActivityRecorder last_activity={props.last_activity.clone()} />
        </AuthProvider>
    }
}

#[wasm_bindgen_test]
async fn use_session_records_document_activity() {
    let last_activity = Rc::new(Cell::new(0));
    let handle = mount::<SessionHarness>(SessionHarnessProps {
        services: services(None),
        last_activity: last_activity.clone(),
    });
    sleep(Duration::from_millis(20)).await;
    let initial = last_activity.get();
    assert!(initial > 0);

    sleep(Duration::from_millis(20)).await;
    let event = web_sys::Event::new("mousedown").unwrap();
    gloo::utils::document().dispatch_event(&event).unwrap();
    sleep(Duration::from_millis(20)).await;

    assert!(last_activity.get() > initial);

    handle.destroy();
}
