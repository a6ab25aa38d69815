use flows::routes;
use leptos::prelude::*;

use super::icons::ShieldCheckIcon;

pub const BRAND: &str = "SecureAuth App";

/// Sticky top bar with the brand mark linking back to sign-in.
#[component]
pub fn AuthHeader() -> impl IntoView {
    view! {
        <header class="auth-header">
            <div class="auth-header__inner">
                <a class="auth-header__brand" href=routes::SIGN_IN>
                    <ShieldCheckIcon class="auth-header__logo"/>
                    <span>{BRAND}</span>
                </a>
            </div>
        </header>
    }
}
