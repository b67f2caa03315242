//! Field Error Component

use leptos::prelude::*;

use crate::validation::FieldErrors;

/// Inline validation message for one form field
#[component]
pub fn FieldError(errors: ReadSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|e| e.get(field).map(str::to_string)).map(|message| view! {
            <p class="field-error" role="alert">{message}</p>
        })
    }
}
