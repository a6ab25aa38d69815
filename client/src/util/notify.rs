//! Toast scheduling.

use flows::Notice;
use leptos::prelude::*;

use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_DURATION;

/// Show a toast and, in the browser, dismiss it after [`TOAST_DURATION`].
///
/// [`TOAST_DURATION`]: crate::state::toast::TOAST_DURATION
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice) {
    #[cfg(feature = "hydrate")]
    log::debug!("toast: {}", notice.title);

    let Some(id) = toasts.try_update(|state| state.push(notice)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_DURATION).await;
        toasts.try_update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
