use leptos::prelude::*;

/// Inline validation message beneath a field; renders nothing when valid.
#[component]
pub fn FieldMessage(message: Signal<Option<&'static str>>) -> impl IntoView {
    move || message.get().map(|text| view! { <p class="form-message" role="alert">{text}</p> })
}

/// Input class with the invalid modifier applied when the field has an error.
pub fn input_class(has_error: bool) -> &'static str {
    if has_error { "form-input form-input--invalid" } else { "form-input" }
}
