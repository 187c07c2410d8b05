//! Mounted flag scoped to a component

use console_core::Liveness;
use yew::prelude::*;

/// Liveness token released when the calling component unmounts.
///
/// Async work spawned from the component should only touch state through
/// [`Liveness::run`].
#[hook]
pub fn use_liveness() -> Liveness {
    let liveness = (*use_memo((), |_| Liveness::new())).clone();

    {
        let liveness = liveness.clone();
        use_effect_with((), move |_| move || liveness.release());
    }

    liveness
}
