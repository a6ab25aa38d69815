//! Sign-in screen.

use flows::{AuthService, Field, LoginController, routes};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::alert::Alert;
use crate::components::auth_shell::AuthShell;
use crate::components::field_message::FieldMessage;
use crate::components::password_field::PasswordField;
use crate::components::text_field::TextField;
use crate::state::toast::ToastState;
use crate::util::auth::AppAuth;
use crate::util::notify::notify;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AppAuth>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ctrl = RwSignal::new(LoginController::new());

    let value = move |field: Field| Signal::derive(move || ctrl.with(|c| c.form().value(field).to_owned()));
    let error = move |field: Field| Signal::derive(move || ctrl.with(|c| c.form().error(field)));
    let invalid = move |field: Field| Signal::derive(move || ctrl.with(|c| c.form().error(field).is_some()));
    let on_input = move |field: Field| Callback::new(move |v: String| ctrl.update(|c| c.input(field, v)));
    let on_blur = move |field: Field| Callback::new(move |()| ctrl.update(|c| c.blur(field)));
    let submitting = Signal::derive(move || ctrl.with(LoginController::is_submitting));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(values)) = ctrl.try_update(LoginController::begin_submit) else {
            return;
        };
        let auth = auth.clone();
        spawn_local(async move {
            let outcome = auth.sign_in(&values.email, &values.password).await;
            #[cfg(feature = "hydrate")]
            log::debug!("sign-in finished, ok: {}", outcome.is_ok());
            if let Some(notice) = ctrl.try_update(|c| c.finish(outcome)) {
                notify(toasts, notice);
            }
        });
    };

    view! {
        <AuthShell title="Sign In" description="Enter your credentials to access your account.">
            <form class="auth-form" on:submit=on_submit novalidate>
                <div class="form-item">
                    <TextField
                        id=Field::Email.as_str()
                        label="Email"
                        input_type="email"
                        placeholder="name@example.com"
                        autocomplete="email"
                        value=value(Field::Email)
                        on_input=on_input(Field::Email)
                        on_blur=on_blur(Field::Email)
                        invalid=invalid(Field::Email)
                    />
                    <FieldMessage message=error(Field::Email)/>
                </div>
                <div class="form-item">
                    <PasswordField
                        id=Field::Password.as_str()
                        label="Password"
                        placeholder="••••••••"
                        autocomplete="current-password"
                        value=value(Field::Password)
                        on_input=on_input(Field::Password)
                        on_blur=on_blur(Field::Password)
                        invalid=invalid(Field::Password)
                    />
                    <FieldMessage message=error(Field::Password)/>
                </div>

                {move || {
                    ctrl.with(LoginController::banner)
                        .map(|banner| {
                            view! {
                                <Alert
                                    banner=banner
                                    on_dismiss=Callback::new(move |()| ctrl.update(LoginController::dismiss_error))
                                />
                            }
                        })
                }}

                <button class="button button--primary" type="submit" disabled=move || submitting.get()>
                    {move || ctrl.with(LoginController::submit_label)}
                </button>
            </form>
            <div class="auth-card__footer">
                <a class="auth-link" href=routes::RESET_REQUEST>"Forgot Password?"</a>
            </div>
        </AuthShell>
    }
}
