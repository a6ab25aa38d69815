//! # client
//!
//! Leptos frontend for the SecureAuth sign-in and password-reset screens.
//!
//! Pages bind the controllers from the `flows` crate to reactive signals;
//! components hold the shared chrome (header, footer, alerts, toasts) and the
//! password field. The server renders this crate with the `ssr` feature and
//! the browser hydrates it with the `hydrate` feature.

#![recursion_limit = "256"]
pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating secureauth client");
    leptos::mount::hydrate_body(app::App);
}
