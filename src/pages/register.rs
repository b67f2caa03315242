//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{use_api, AuthApi};
use crate::auth::REGISTRATION_FAILED;
use crate::components::auth_guard::LOGIN_PATH;
use crate::components::FieldError;
use crate::dialog::alert;
use crate::models::Credentials;
use crate::validation::{validate_credentials, FieldErrors};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_api();
    let navigate = StoredValue::new(use_navigate());

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let field_errors = validate_credentials(&credentials);
        let invalid = !field_errors.is_empty();
        set_errors.set(field_errors);
        if invalid {
            return;
        }

        set_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.signup(&credentials).await {
                Ok(()) => {
                    log::info!("[REGISTER] account created");
                    navigate.with_value(|nav| nav(LOGIN_PATH, Default::default()));
                }
                Err(e) => {
                    log::warn!("[REGISTER] {}", e);
                    set_submitting.set(false);
                    alert(&e.user_message(REGISTRATION_FAILED));
                }
            }
        });
    };

    view! {
        <div class="form-page">
            <h2>"Register"</h2>
            <form class="form" on:submit=on_submit novalidate=true>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <FieldError errors=errors field="email"/>

                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <FieldError errors=errors field="password"/>

                <button type="submit" class="btn btn-secondary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Registering..." } else { "Register" }}
                </button>
            </form>
            <p class="form-footer">"Already registered? " <a href=LOGIN_PATH>"Login"</a></p>
        </div>
    }
}
