//! Password reset confirmation screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the emailed link, `/password-reset-confirm?token=...`. The
//! token is read from the query once after hydration; until then the card
//! shows a validating placeholder, which is also what the server renders.
//! A valid token unlocks the new-password form and a successful reset sends
//! the user back to sign-in.

#[cfg(test)]
#[path = "reset_confirm_test.rs"]
mod reset_confirm_test;

use flows::{AuthService, Field, Notice, ResetConfirmController, routes};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::alert::Alert;
use crate::components::auth_shell::AuthShell;
use crate::components::field_message::FieldMessage;
use crate::components::password_field::PasswordField;
use crate::state::toast::ToastState;
use crate::util::auth::AppAuth;
use crate::util::notify::notify;

/// What the card body shows for a given token check result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Validating,
    Form,
    Unavailable,
}

pub fn section(token_valid: Option<bool>) -> Section {
    match token_valid {
        None => Section::Validating,
        Some(true) => Section::Form,
        Some(false) => Section::Unavailable,
    }
}

/// Check the reset link's raw query string (`?token=...`) against the
/// controller. Returns the toast to show when the link is unusable.
pub fn check_link(ctrl: &mut ResetConfirmController, search: &str, token_prefix: &str) -> Option<Notice> {
    let token = routes::token_from_query(search);
    ctrl.mount(token.as_deref(), token_prefix)
}

#[component]
pub fn ResetConfirmPage() -> impl IntoView {
    let auth = expect_context::<AppAuth>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ctrl = RwSignal::new(ResetConfirmController::new());
    let location = use_location();
    let navigate = use_navigate();

    let token_prefix = auth.config().token_prefix.clone();
    Effect::new(move || {
        let search = location.search.get_untracked();
        #[cfg(feature = "hydrate")]
        log::debug!("reset link opened, query present: {}", !search.is_empty());
        if let Some(notice) = ctrl.try_update(|c| check_link(c, &search, &token_prefix)).flatten() {
            notify(toasts, notice);
        }
    });

    let value = move |field: Field| Signal::derive(move || ctrl.with(|c| c.form().value(field).to_owned()));
    let error = move |field: Field| Signal::derive(move || ctrl.with(|c| c.form().error(field)));
    let invalid = move |field: Field| Signal::derive(move || ctrl.with(|c| c.form().error(field).is_some()));
    let on_input = move |field: Field| Callback::new(move |v: String| ctrl.update(|c| c.input(field, v)));
    let on_blur = move |field: Field| Callback::new(move |()| ctrl.update(|c| c.blur(field)));
    let current = Memo::new(move |_| section(ctrl.with(ResetConfirmController::token_valid)));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let attempt = match ctrl.try_update(ResetConfirmController::begin_submit) {
            Some(Ok(attempt)) => attempt,
            Some(Err(err)) => {
                if let Some(notice) = err.notice() {
                    notify(toasts, notice);
                }
                return;
            }
            None => return,
        };
        let auth = auth.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = auth.confirm_reset(&attempt.token, &attempt.form.password).await;
            let Some((notice, redirect)) = ctrl.try_update(|c| {
                let notice = c.finish(outcome);
                (notice, c.redirect())
            }) else {
                return;
            };
            notify(toasts, notice);
            if let Some(path) = redirect {
                navigate(path, NavigateOptions::default());
            }
        });
    };

    view! {
        <AuthShell title="Set New Password" description=Signal::derive(move || ctrl.with(ResetConfirmController::description))>
            {move || {
                ctrl.with(ResetConfirmController::banner)
                    .map(|banner| {
                        view! {
                            <Alert
                                banner=banner
                                on_dismiss=Callback::new(move |()| ctrl.update(ResetConfirmController::dismiss_error))
                            />
                        }
                    })
            }}

            {move || match current.get() {
                Section::Validating => {
                    view! { <p class="auth-card__placeholder">"Validating reset link..."</p> }.into_any()
                }
                Section::Unavailable => ().into_any(),
                Section::Form => {
                    view! {
                        <form class="auth-form" on:submit=on_submit.clone() novalidate>
                            <div class="form-item">
                                <PasswordField
                                    id=Field::Password.as_str()
                                    label="New Password"
                                    placeholder="••••••••"
                                    autocomplete="new-password"
                                    value=value(Field::Password)
                                    on_input=on_input(Field::Password)
                                    on_blur=on_blur(Field::Password)
                                    invalid=invalid(Field::Password)
                                />
                                <FieldMessage message=error(Field::Password)/>
                            </div>
                            <div class="form-item">
                                <PasswordField
                                    id=Field::ConfirmPassword.as_str()
                                    label="Confirm New Password"
                                    placeholder="••••••••"
                                    autocomplete="new-password"
                                    value=value(Field::ConfirmPassword)
                                    on_input=on_input(Field::ConfirmPassword)
                                    on_blur=on_blur(Field::ConfirmPassword)
                                    invalid=invalid(Field::ConfirmPassword)
                                />
                                <FieldMessage message=error(Field::ConfirmPassword)/>
                            </div>
                            <button
                                class="button button--primary"
                                type="submit"
                                disabled=move || ctrl.with(ResetConfirmController::submit_disabled)
                            >
                                {move || ctrl.with(ResetConfirmController::submit_label)}
                            </button>
                        </form>
                    }
                        .into_any()
                }
            }}
        </AuthShell>
    }
}
