//! Password input with a show/hide toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The field owns only its visibility flag. Value, change and blur
//! notifications, placeholder and autocomplete are all forwarded from the
//! caller, so validation stays with the page's controller. The toggle is a
//! `type="button"` (never submits the form) with `tabindex="-1"` (skipped by
//! sequential tab navigation).

#[cfg(test)]
#[path = "password_field_test.rs"]
mod password_field_test;

use leptos::prelude::*;

use super::field_message::input_class;
use super::icons::{EyeIcon, EyeOffIcon};

/// Rendering mode of the password input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Masked,
    Plain,
}

impl Visibility {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Plain,
            Self::Plain => Self::Masked,
        }
    }

    /// Value for the input's `type` attribute.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::Plain => "text",
        }
    }

    /// Accessible label of the toggle: describes what clicking will do.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Masked => "Show password",
            Self::Plain => "Hide password",
        }
    }
}

#[component]
pub fn PasswordField(
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] on_blur: Option<Callback<()>>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] autocomplete: Option<String>,
    #[prop(optional, into)] invalid: Signal<bool>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let visibility = RwSignal::new(Visibility::default());

    view! {
        <div class="password-field">
            {label.map(|text| view! { <label class="form-label" for=id.clone()>{text}</label> })}
            <div class="password-field__control">
                <input
                    id=id.clone()
                    name=id
                    class=move || format!("{} password-field__input", input_class(invalid.get()))
                    type=move || visibility.get().input_type()
                    placeholder=placeholder
                    autocomplete=autocomplete
                    disabled=move || disabled.get()
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    on:blur=move |_| {
                        if let Some(cb) = on_blur {
                            cb.run(());
                        }
                    }
                />
                <button
                    type="button"
                    tabindex="-1"
                    class="password-field__toggle"
                    aria-label=move || visibility.get().toggle_label()
                    on:click=move |_| visibility.update(|v| *v = v.toggled())
                >
                    {move || match visibility.get() {
                        Visibility::Masked => view! { <EyeIcon/> }.into_any(),
                        Visibility::Plain => view! { <EyeOffIcon/> }.into_any(),
                    }}
                </button>
            </div>
        </div>
    }
}
