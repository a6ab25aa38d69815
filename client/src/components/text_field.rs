#[cfg(test)]
#[path = "text_field_test.rs"]
mod text_field_test;

use leptos::prelude::*;

use super::field_message::input_class;

/// Wrapper class; the icon modifier pads the input for a leading icon.
pub fn control_class(has_icon: bool) -> &'static str {
    if has_icon { "text-field__control text-field__control--icon" } else { "text-field__control" }
}

/// Labelled single-line input bound to a controller field, with an optional
/// icon drawn inside its left edge.
#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] on_blur: Option<Callback<()>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] autocomplete: Option<String>,
    #[prop(optional, into)] leading_icon: Option<ViewFn>,
    #[prop(optional, into)] invalid: Signal<bool>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let wrapper = control_class(leading_icon.is_some());

    view! {
        <label class="form-label" for=id.clone()>{label}</label>
        <div class=wrapper>
            {leading_icon.map(|icon| view! { <span class="text-field__icon">{icon.run()}</span> })}
            <input
                id=id.clone()
                name=id
                type=input_type
                class=move || input_class(invalid.get())
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
        </div>
    }
}
