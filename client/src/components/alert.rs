//! In-card banners for submission outcomes. Messages must be safe to render
//! and never include passwords or tokens.

use flows::{Banner, BannerKind};
use leptos::prelude::*;

use super::icons::{AlertTriangleIcon, CheckCircleIcon};

/// Renders a banner with an optional call-to-action link and dismiss button.
#[component]
pub fn Alert(banner: Banner, #[prop(optional)] on_dismiss: Option<Callback<()>>) -> impl IntoView {
    let Banner { kind, title, message, link } = banner;
    let (class, role) = match kind {
        BannerKind::Error => ("alert alert--error", "alert"),
        BannerKind::Success => ("alert alert--success", "status"),
    };

    view! {
        <div class=class role=role>
            {match kind {
                BannerKind::Error => view! { <AlertTriangleIcon/> }.into_any(),
                BannerKind::Success => view! { <CheckCircleIcon/> }.into_any(),
            }}
            <div class="alert__body">
                <p class="alert__title">{title}</p>
                <p class="alert__message">
                    {message}
                    {link.map(|(label, href)| view! { " " <a class="alert__link" href=href>{label}</a> "." })}
                </p>
            </div>
            {on_dismiss.map(|cb| {
                view! {
                    <button type="button" class="alert__dismiss" aria-label="Dismiss" on:click=move |_| cb.run(())>
                        "×"
                    </button>
                }
            })}
        </div>
    }
}
