//! Labelled text input with field-error wiring.
//!
//! Editing the field clears its own validation error immediately, before any
//! re-validation happens on the next submit.

use leptos::prelude::*;

use crate::validate::FieldErrors;

/// A labelled form input bound to one field of a [`FieldErrors`] map.
#[component]
pub fn TextInput(
    /// Visible label above the input.
    label: &'static str,
    /// Field name used in the error map.
    field: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(optional)] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text" } else { input_type };
    let error = move || errors.get().message(field);
    let input_class = move || {
        if error().is_some() {
            "form-input form-input--invalid"
        } else {
            "form-input"
        }
    };

    view! {
        <div class="form-field">
            <label class="form-field__label">{label}</label>
            <input
                class=input_class
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    errors.update(|e| e.clear(field));
                }
            />
            <Show when=move || error().is_some()>
                <p class="form-field__error">{error}</p>
            </Show>
        </div>
    }
}
