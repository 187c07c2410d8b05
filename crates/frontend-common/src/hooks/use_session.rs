//! Idle tracking hook

use crate::auth::use_services;
use console_core::{ACTIVITY_EVENTS, ActivityTracker, SessionActivity};
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use yew::prelude::*;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Tracks interaction on the document and flags the session idle past the
/// configured threshold. Informational only: nothing is logged out.
///
/// The listeners and the check interval are acquired on mount and dropped
/// (which cancels them) on unmount.
#[hook]
pub fn use_session() -> SessionActivity {
    let services = use_services();
    let idle_threshold_ms = services.config.idle_threshold_ms;
    let check_interval_ms = services.config.activity_check_interval_ms;

    let tracker = use_mut_ref(|| ActivityTracker::new(now_ms(), idle_threshold_ms));
    let initial = tracker.borrow().activity();
    let activity = use_state(move || initial);

    {
        let tracker = tracker.clone();
        let activity = activity.clone();
        use_effect_with((), move |_| {
            let document = gloo::utils::document();

            let listeners: Vec<EventListener> = ACTIVITY_EVENTS
                .iter()
                .map(|event| {
                    let tracker = tracker.clone();
                    let activity = activity.clone();
                    EventListener::new(&document, *event, move |_| {
                        let snapshot = tracker.borrow_mut().record(now_ms());
                        activity.set(snapshot);
                    })
                })
                .collect();

            let interval = Interval::new(check_interval_ms, move || {
                let before = tracker.borrow().activity();
                let after = tracker.borrow_mut().tick(now_ms());
                if after != before {
                    tracing::debug!(is_active = after.is_active, "Session activity changed");
                    activity.set(after);
                }
            });

            move || {
                drop(interval);
                drop(listeners);
            }
        });
    }

    *activity
}
