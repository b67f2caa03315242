//! New Task Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{use_api, TaskApi};
use crate::components::FieldError;
use crate::dialog::alert;
use crate::models::NewTask;
use crate::validation::{validate_new_task, FieldErrors};

pub const CREATE_FAILED: &str = "Failed to create task";

#[component]
pub fn TaskFormPage() -> impl IntoView {
    let api = use_api();
    let navigate = StoredValue::new(use_navigate());

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let task = NewTask {
            title: title.get_untracked(),
            description: description.get_untracked(),
        };
        let field_errors = validate_new_task(&task);
        let invalid = !field_errors.is_empty();
        set_errors.set(field_errors);
        if invalid {
            return;
        }

        set_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.create_task(&task).await {
                Ok(created) => {
                    log::info!("[TASKS] created task {}", created.id);
                    navigate.with_value(|nav| nav("/dashboard", Default::default()));
                }
                Err(e) => {
                    log::warn!("[TASKS] create failed: {}", e);
                    set_submitting.set(false);
                    alert(&e.user_message(CREATE_FAILED));
                }
            }
        });
    };

    view! {
        <div class="form-page">
            <h2>"Add a New Task"</h2>
            <form class="form" on:submit=on_submit novalidate=true>
                <div>
                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <FieldError errors=errors field="title"/>
                </div>
                <div>
                    <textarea
                        placeholder="Description"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />
                    <FieldError errors=errors field="description"/>
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating..." } else { "Create Task" }}
                </button>
            </form>
        </div>
    }
}
