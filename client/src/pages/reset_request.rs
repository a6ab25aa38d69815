//! Password reset request screen.

use flows::{AuthService, Field, ResetRequestController, routes};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::alert::Alert;
use crate::components::auth_shell::AuthShell;
use crate::components::field_message::FieldMessage;
use crate::components::icons::MailIcon;
use crate::components::text_field::TextField;
use crate::state::toast::ToastState;
use crate::util::auth::AppAuth;
use crate::util::notify::notify;

#[component]
pub fn ResetRequestPage() -> impl IntoView {
    let auth = expect_context::<AppAuth>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ctrl = RwSignal::new(ResetRequestController::new());

    let email = Signal::derive(move || ctrl.with(|c| c.form().value(Field::Email).to_owned()));
    let email_error = Signal::derive(move || ctrl.with(|c| c.form().error(Field::Email)));
    let submitting = Signal::derive(move || ctrl.with(ResetRequestController::is_submitting));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(values)) = ctrl.try_update(ResetRequestController::begin_submit) else {
            return;
        };
        let auth = auth.clone();
        spawn_local(async move {
            let outcome = auth.request_reset(&values.email).await;
            if let Some(notice) = ctrl.try_update(|c| c.finish(outcome)) {
                notify(toasts, notice);
            }
        });
    };

    view! {
        <AuthShell
            title="Reset Your Password"
            description="Enter your registered email address below, and we'll send you a link to reset your password."
        >
            <form class="auth-form" on:submit=on_submit novalidate>
                <div class="form-item">
                    <TextField
                        id=Field::Email.as_str()
                        label="Email Address"
                        input_type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        leading_icon=|| view! { <MailIcon/> }
                        value=email
                        on_input=Callback::new(move |v: String| ctrl.update(|c| c.input(Field::Email, v)))
                        on_blur=Callback::new(move |()| ctrl.update(|c| c.blur(Field::Email)))
                        invalid=Signal::derive(move || email_error.get().is_some())
                        disabled=submitting
                    />
                    <FieldMessage message=email_error/>
                </div>
                <button class="button button--primary" type="submit" disabled=move || submitting.get()>
                    {move || ctrl.with(ResetRequestController::submit_label)}
                </button>
            </form>

            {move || {
                ctrl.with(ResetRequestController::banner)
                    .map(|banner| {
                        view! {
                            <Alert
                                banner=banner
                                on_dismiss=Callback::new(move |()| ctrl.update(ResetRequestController::dismiss_banner))
                            />
                        }
                    })
            }}

            <div class="auth-card__footer">
                <p>
                    "Remember your password? "
                    <a class="auth-link" href=routes::SIGN_IN>"Sign In"</a>
                </p>
            </div>
        </AuthShell>
    }
}
