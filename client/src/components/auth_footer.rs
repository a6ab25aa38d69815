//! Site footer: legal links and the copyright line.

#[cfg(test)]
#[path = "auth_footer_test.rs"]
mod auth_footer_test;

use flows::routes;
use leptos::prelude::*;

use super::auth_header::BRAND;
use crate::util::clock::current_year;

/// Copyright notice for the given calendar year.
pub fn copyright_line(year: i32) -> String {
    format!("© {year} {BRAND}. All rights reserved.")
}

#[component]
pub fn AuthFooter() -> impl IntoView {
    let line = copyright_line(current_year());

    view! {
        <footer class="auth-footer">
            <div class="auth-footer__inner">
                <p class="auth-footer__copyright">{line}</p>
                <nav class="auth-footer__links">
                    <a href=routes::TERMS>"Terms of Service"</a>
                    <a href=routes::PRIVACY>"Privacy Policy"</a>
                </nav>
            </div>
        </footer>
    }
}
