//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::{login::LoginPage, reset_confirm::ResetConfirmPage, reset_request::ResetRequestPage};
use crate::state::toast::ToastState;
use crate::util::auth::app_auth;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast list and the auth service, then routes the three
/// screens. Terms and privacy links fall through to the not-found view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(ToastState::default()));
    provide_context(app_auth());

    view! {
        <Stylesheet id="leptos" href="/pkg/secureauth.css"/>
        <Title text="SecureAuth App"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("password-reset-request") view=ResetRequestPage/>
                <Route path=StaticSegment("password-reset-confirm") view=ResetConfirmPage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
