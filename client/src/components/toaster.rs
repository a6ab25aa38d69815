//! Toast stack rendered once at the app root.

use flows::NoticeLevel;
use leptos::prelude::*;

use crate::state::toast::ToastState;

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "toast toast--success",
        NoticeLevel::Error => "toast toast--error",
    }
}

/// Renders the toasts in context; clicking one dismisses it.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.with(|state| state.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let role = if toast.notice.level == NoticeLevel::Error { "alert" } else { "status" };
                    view! {
                        <div
                            class=level_class(toast.notice.level)
                            role=role
                            on:click=move |_| {
                                toasts.update(|state| {
                                    state.dismiss(id);
                                });
                            }
                        >
                            <p class="toast__title">{toast.notice.title}</p>
                            {toast
                                .notice
                                .description
                                .map(|text| view! { <p class="toast__description">{text}</p> })}
                        </div>
                    }
                }
            />
        </div>
    }
}
