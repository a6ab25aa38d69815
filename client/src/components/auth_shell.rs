use leptos::prelude::*;

use super::auth_footer::AuthFooter;
use super::auth_header::AuthHeader;

/// Page frame shared by the auth screens: header, a centered card with a
/// title and subtitle, and the footer.
#[component]
pub fn AuthShell(
    title: &'static str,
    #[prop(into)] description: Signal<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-page">
            <AuthHeader/>
            <main class="auth-main">
                <section class="auth-card">
                    <div class="auth-card__header">
                        <h1 class="auth-card__title">{title}</h1>
                        <p class="auth-card__description">{move || description.get()}</p>
                    </div>
                    {children()}
                </section>
            </main>
            <AuthFooter/>
        </div>
    }
}
